pub(crate) mod local_provider;
use async_trait::async_trait;
use tokio::sync::broadcast;

pub use self::local_provider::LocalIdentityProvider;
use crate::{domain::session::Session, services::response::ServiceError};

/// Pushed by the provider whenever its view of the session changes.
/// `None` means signed out.
pub type SessionEvent = Option<Session>;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
	/// Event source for session changes. Dropping the receiver unsubscribes.
	fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;

	/// Interactive sign-in flow.
	async fn sign_in(&self) -> Result<Session, ServiceError>;

	async fn sign_out(&self) -> Result<(), ServiceError>;
}
