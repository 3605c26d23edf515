use std::fmt::Display;

pub type AnyError = dyn std::error::Error + Send + Sync + 'static;

#[derive(Debug)]
pub enum ServiceError {
	/// Identity provider is not configured; sign-in is disabled.
	AuthUnavailable,
	PopupBlocked,
	SignInCancelled,
	NetworkError(String),
	StorageError(Box<AnyError>),
	DeserializationError(Box<AnyError>),
	/// Post body shorter than the minimum after trimming.
	PostTooShort,
	BadRequest,
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::AuthUnavailable => write!(f, "AuthUnavailable"),
			ServiceError::PopupBlocked => write!(f, "PopupBlocked"),
			ServiceError::SignInCancelled => write!(f, "SignInCancelled"),
			ServiceError::NetworkError(res) => write!(f, "NetworkError: {}", res),
			ServiceError::StorageError(res) => write!(f, "{}", res),
			ServiceError::DeserializationError(res) => write!(f, "{}", res),
			ServiceError::PostTooShort => write!(f, "PostTooShort"),
			ServiceError::BadRequest => write!(f, "BadRequest"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<serde_json::Error> for ServiceError {
	fn from(value: serde_json::Error) -> Self {
		ServiceError::DeserializationError(Box::new(value))
	}
}

impl From<std::io::Error> for ServiceError {
	fn from(value: std::io::Error) -> Self {
		ServiceError::StorageError(Box::new(value))
	}
}
