use std::sync::Arc;

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::{
	adapters::identity::{IdentityProvider, SessionEvent},
	domain::session::{AuthState, Session, SessionHolder},
};

use super::response::ServiceError;

/// Keeps a [`SessionHolder`] in step with the identity provider.
///
/// The provider subscription is taken in [`AuthGate::start`] and released when
/// the gate is dropped or [`AuthGate::shutdown`] is called. Without a provider
/// (missing configuration) the gate reports `SignedOut` and refuses sign-in.
pub struct AuthGate {
	holder: SessionHolder,
	provider: Option<Arc<dyn IdentityProvider>>,
	subscription: Option<broadcast::Receiver<SessionEvent>>,
}

impl AuthGate {
	pub async fn start(
		provider: Arc<dyn IdentityProvider>,
		holder: SessionHolder,
	) -> Self {
		let subscription = provider.subscribe();
		*holder.write().await = AuthState::Loading;
		Self {
			holder,
			provider: Some(provider),
			subscription: Some(subscription),
		}
	}

	pub async fn disabled(holder: SessionHolder) -> Self {
		tracing::info!("authentication disabled");
		*holder.write().await = AuthState::SignedOut;
		Self {
			holder,
			provider: None,
			subscription: None,
		}
	}

	pub fn holder(&self) -> &SessionHolder {
		&self.holder
	}

	pub fn is_enabled(&self) -> bool {
		self.provider.is_some()
	}

	pub async fn current_session(&self) -> Option<Session> {
		self.holder.current_session().await
	}

	/// Applies every notification already pushed by the provider. Returns
	/// whether the held state changed.
	pub async fn sync(&mut self) -> bool {
		let mut changed = false;
		while let Some(subscription) = self.subscription.as_mut() {
			match subscription.try_recv() {
				Ok(event) => changed |= self.apply(event).await,
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Lagged(skipped)) => {
					tracing::warn!("skipped {} session notifications", skipped);
				}
				Err(TryRecvError::Closed) => {
					tracing::warn!("identity provider closed its session feed");
					self.subscription = None;
				}
			}
		}
		changed
	}

	/// Waits for the next notification and applies it. Returns `None` once the
	/// provider has gone away or the gate is disabled.
	pub async fn next_change(&mut self) -> Option<AuthState> {
		loop {
			let subscription = self.subscription.as_mut()?;
			match subscription.recv().await {
				Ok(event) => {
					self.apply(event).await;
					return Some(self.holder.snapshot().await);
				}
				Err(broadcast::error::RecvError::Lagged(skipped)) => {
					tracing::warn!("skipped {} session notifications", skipped);
				}
				Err(broadcast::error::RecvError::Closed) => {
					self.subscription = None;
					return None;
				}
			}
		}
	}

	pub async fn sign_in(&mut self) -> Result<Session, ServiceError> {
		let Some(provider) = self.provider.clone() else {
			tracing::warn!("sign-in unavailable: identity provider is not configured");
			return Err(ServiceError::AuthUnavailable);
		};

		let session = provider.sign_in().await.map_err(|err| {
			tracing::error!("sign-in failed: {}", err);
			err
		})?;
		self.apply(Some(session.clone())).await;
		self.sync().await;
		Ok(session)
	}

	pub async fn sign_out(&mut self) -> Result<(), ServiceError> {
		let Some(provider) = self.provider.clone() else {
			return Ok(());
		};

		provider.sign_out().await.map_err(|err| {
			tracing::error!("sign-out failed: {}", err);
			err
		})?;
		self.apply(None).await;
		self.sync().await;
		Ok(())
	}

	/// Releases the provider subscription.
	pub fn shutdown(mut self) {
		self.subscription.take();
	}

	async fn apply(
		&self,
		event: SessionEvent,
	) -> bool {
		let next: AuthState = event.into();
		let mut state = self.holder.write().await;
		if *state == next {
			return false;
		}
		tracing::info!(
			"session changed: {}",
			match &next {
				AuthState::SignedIn(session) => session.id.as_str(),
				_ => "signed out",
			}
		);
		*state = next;
		true
	}
}
