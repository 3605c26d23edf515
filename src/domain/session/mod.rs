use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Signed-in viewer as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	pub id: String,
	pub display_name: Option<String>,
	pub email: Option<String>,
	pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AuthState {
	/// The provider has not reported its first state yet.
	#[default]
	Loading,
	SignedOut,
	SignedIn(Session),
}

impl AuthState {
	pub fn session(&self) -> Option<&Session> {
		match self {
			AuthState::SignedIn(session) => Some(session),
			_ => None,
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, AuthState::Loading)
	}
}

impl From<Option<Session>> for AuthState {
	fn from(value: Option<Session>) -> Self {
		match value {
			Some(session) => AuthState::SignedIn(session),
			None => AuthState::SignedOut,
		}
	}
}

/// Shared handle on the current [`AuthState`]. Handed explicitly to the gate,
/// the route guard checks and the header.
#[derive(Clone, Default)]
pub struct SessionHolder(pub Arc<RwLock<AuthState>>);
impl From<Arc<RwLock<AuthState>>> for SessionHolder {
	fn from(value: Arc<RwLock<AuthState>>) -> Self {
		Self(value)
	}
}
impl From<AuthState> for SessionHolder {
	fn from(value: AuthState) -> Self {
		Arc::new(RwLock::new(value)).into()
	}
}
impl SessionHolder {
	pub async fn read(&self) -> RwLockReadGuard<'_, AuthState> {
		self.0.read().await
	}

	pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
		self.0.write().await
	}

	pub async fn snapshot(&self) -> AuthState {
		self.read().await.clone()
	}

	pub async fn current_session(&self) -> Option<Session> {
		self.read().await.session().cloned()
	}
}
