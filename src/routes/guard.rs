use crate::domain::session::AuthState;

use super::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
	Render(Route),
	/// Auth state still unknown; show the loading placeholder.
	Loading,
	Redirect { to: Route, from: String },
}

/// Keeps signed-out viewers off gated routes and remembers where they were
/// headed so sign-in can take them there, once.
#[derive(Debug, Default)]
pub struct RouteGuard {
	remembered: Option<String>,
}

impl RouteGuard {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn remembered(&self) -> Option<&str> {
		self.remembered.as_deref()
	}

	pub fn check(
		&mut self,
		path: &str,
		state: &AuthState,
	) -> GuardDecision {
		let route = Route::from_path(path);
		if !route.is_gated() {
			return GuardDecision::Render(route);
		}
		match state {
			AuthState::Loading => GuardDecision::Loading,
			AuthState::SignedOut => {
				let from = route.path().to_string();
				tracing::debug!("redirecting {} to landing until signed in", from);
				self.remembered = Some(from.clone());
				GuardDecision::Redirect { to: Route::Landing, from }
			}
			AuthState::SignedIn(_) => GuardDecision::Render(route),
		}
	}

	/// Called after every session change. Hands back the remembered path the
	/// first time a session is present and forgets it.
	pub fn on_session(&mut self, state: &AuthState) -> Option<String> {
		match state {
			AuthState::SignedIn(_) => self.remembered.take(),
			_ => None,
		}
	}

	pub fn forget(&mut self) {
		self.remembered = None;
	}
}

#[cfg(test)]
mod test {
	use super::{GuardDecision, RouteGuard};
	use crate::{
		domain::session::{AuthState, Session},
		routes::Route,
	};

	fn signed_in() -> AuthState {
		AuthState::SignedIn(Session {
			id: "uid".to_string(),
			display_name: None,
			email: None,
			avatar_url: None,
		})
	}

	#[test]
	fn test_redirect_then_replay_once() {
		'_given: {
			let mut guard = RouteGuard::new();

			'_when: {
				let decision = guard.check("/feed", &AuthState::SignedOut);
				assert_eq!(
					decision,
					GuardDecision::Redirect {
						to: Route::Landing,
						from: "/feed".to_string()
					}
				);
				assert_eq!(guard.remembered(), Some("/feed"));
			}

			assert_eq!(guard.on_session(&signed_in()), Some("/feed".to_string()));
			assert_eq!(guard.remembered(), None);
			assert_eq!(guard.on_session(&signed_in()), None);
		}
	}

	#[test]
	fn test_loading_blocks_gated_routes_only() {
		let mut guard = RouteGuard::new();

		assert_eq!(guard.check("/profile", &AuthState::Loading), GuardDecision::Loading);
		assert_eq!(guard.check("/", &AuthState::Loading), GuardDecision::Render(Route::Landing));
		assert_eq!(guard.remembered(), None);
	}

	#[test]
	fn test_signed_out_events_do_not_replay() {
		let mut guard = RouteGuard::new();
		guard.check("/dashboard", &AuthState::SignedOut);

		assert_eq!(guard.on_session(&AuthState::SignedOut), None);
		assert_eq!(guard.on_session(&AuthState::Loading), None);
		assert_eq!(guard.on_session(&signed_in()), Some("/dashboard".to_string()));
	}

	#[test]
	fn test_signed_in_renders() {
		let mut guard = RouteGuard::new();
		assert_eq!(guard.check("/dashboard", &signed_in()), GuardDecision::Render(Route::Dashboard));
	}
}
