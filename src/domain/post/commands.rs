use crate::services::response::ServiceError;

pub const MIN_BODY_CHARS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePost {
	pub body: String,
	pub raw_tags: String,
}

impl CreatePost {
	pub fn new(body: impl Into<String>, raw_tags: impl Into<String>) -> Self {
		Self {
			body: body.into(),
			raw_tags: raw_tags.into(),
		}
	}

	/// Trimmed body, or `PostTooShort` when fewer than three characters remain.
	pub fn validated_body(&self) -> Result<&str, ServiceError> {
		let body = self.body.trim();
		if body.chars().count() < MIN_BODY_CHARS {
			return Err(ServiceError::PostTooShort);
		}
		Ok(body)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLike {
	pub id: i64,
}
