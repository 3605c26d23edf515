use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::{IdentityProvider, SessionEvent};
use crate::{domain::session::Session, services::response::ServiceError};

const EVENT_CAPACITY: usize = 16;

/// In-process identity provider with a single account. Sessions start
/// unrestored: nothing is pushed until [`LocalIdentityProvider::restore`].
pub struct LocalIdentityProvider {
	account: Session,
	current: Mutex<Option<Session>>,
	next_failure: Mutex<Option<ServiceError>>,
	sender: broadcast::Sender<SessionEvent>,
}

impl LocalIdentityProvider {
	pub fn new(account: Session) -> Self {
		let (sender, _rx) = broadcast::channel(EVENT_CAPACITY);
		Self {
			account,
			current: Mutex::new(None),
			next_failure: Mutex::new(None),
			sender,
		}
	}

	/// Pushes the current session to every subscriber, as a provider does
	/// once it has finished restoring persisted credentials.
	pub fn restore(&self) {
		let current = self.current.lock().map(|c| c.clone()).unwrap_or_default();
		self.publish(current);
	}

	/// Makes the next `sign_in` call fail with `err`.
	pub fn fail_next_sign_in(&self, err: ServiceError) {
		if let Ok(mut next) = self.next_failure.lock() {
			*next = Some(err);
		}
	}

	pub fn subscriber_count(&self) -> usize {
		self.sender.receiver_count()
	}

	fn publish(&self, event: SessionEvent) {
		// no subscribers is fine
		let _ = self.sender.send(event);
	}

	fn set_current(&self, session: Option<Session>) -> Result<(), ServiceError> {
		let mut current = self
			.current
			.lock()
			.map_err(|err| ServiceError::NetworkError(err.to_string()))?;
		*current = session.clone();
		drop(current);
		self.publish(session);
		Ok(())
	}
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
	fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
		self.sender.subscribe()
	}

	async fn sign_in(&self) -> Result<Session, ServiceError> {
		let failure = self.next_failure.lock().ok().and_then(|mut next| next.take());
		if let Some(err) = failure {
			tracing::debug!("local sign-in failing on request: {}", err);
			return Err(err);
		}
		self.set_current(Some(self.account.clone()))?;
		Ok(self.account.clone())
	}

	async fn sign_out(&self) -> Result<(), ServiceError> {
		self.set_current(None)
	}
}
