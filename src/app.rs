use std::sync::Arc;

use crate::{
	adapters::{identity::IdentityProvider, storage::KeyValueStore},
	common::clock::Clock,
	config::Config,
	domain::{
		post::entity::Post,
		session::{AuthState, Session, SessionHolder},
	},
	routes::{GuardDecision, Route, RouteGuard},
	services::{auth_gate::AuthGate, feed_store::FeedStore, response::ServiceError},
	views::{
		compose::ComposeModal, dashboard::DashboardView, landing::LandingPage, profile::ProfileView, FeedView, Header,
		PostCard, Screen, View,
	},
};

/// Everything behind the pages: session, navigation, feed and the compose
/// dialog. Driven one event at a time by the front end.
pub struct App {
	gate: AuthGate,
	guard: RouteGuard,
	location: String,
	feed: FeedStore,
	compose: ComposeModal,
	landing: LandingPage,
	dashboard: DashboardView,
}

impl App {
	pub fn new(
		gate: AuthGate,
		feed: FeedStore,
	) -> Self {
		Self {
			gate,
			guard: RouteGuard::new(),
			location: Route::Landing.path().to_string(),
			feed,
			compose: ComposeModal::default(),
			landing: LandingPage::default(),
			dashboard: DashboardView::default(),
		}
	}

	/// Wires the app from configuration. Authentication is disabled when the
	/// identity configuration is incomplete or no provider is supplied.
	pub async fn bootstrap(
		config: &Config,
		provider: Option<Arc<dyn IdentityProvider>>,
		store: Arc<dyn KeyValueStore>,
		clock: Arc<dyn Clock>,
	) -> Self {
		let holder = SessionHolder::default();
		let gate = match provider {
			Some(provider) if config.auth_enabled() => AuthGate::start(provider, holder).await,
			_ => {
				if !config.missing_identity_keys.is_empty() {
					tracing::warn!("missing identity settings: {}", config.missing_identity_keys.join(", "));
				}
				AuthGate::disabled(holder).await
			}
		};
		let feed = FeedStore::new(store, clock, config.feed_author.clone());
		Self::new(gate, feed)
	}

	pub fn session_holder(&self) -> &SessionHolder {
		self.gate.holder()
	}

	pub fn location(&self) -> &str {
		&self.location
	}

	pub fn remembered_path(&self) -> Option<&str> {
		self.guard.remembered()
	}

	/// User-initiated navigation. Going home explicitly drops any remembered
	/// destination.
	pub async fn navigate(&mut self, path: &str) -> GuardDecision {
		if !Route::from_path(path).is_gated() {
			self.guard.forget();
		}
		self.resolve(path).await
	}

	/// Applies pending provider notifications, replaying a remembered path
	/// once a session shows up. Returns whether the session changed.
	pub async fn process_auth_events(&mut self) -> bool {
		if !self.gate.sync().await {
			return false;
		}
		self.after_auth_change().await;
		true
	}

	/// Waits for the provider's next notification and reacts to it.
	pub async fn wait_for_auth_change(&mut self) -> Option<AuthState> {
		let state = self.gate.next_change().await?;
		self.gate.sync().await;
		self.after_auth_change().await;
		Some(state)
	}

	/// Interactive sign-in. On success goes to the remembered path, or the
	/// feed when nothing was remembered. On failure nothing changes.
	pub async fn sign_in(&mut self) -> Result<Session, ServiceError> {
		let session = self.gate.sign_in().await?;
		let state = AuthState::SignedIn(session.clone());
		let target = self.guard.on_session(&state).unwrap_or(Route::Feed.path().to_string());
		self.resolve(&target).await;
		Ok(session)
	}

	pub async fn sign_out(&mut self) -> Result<(), ServiceError> {
		self.gate.sign_out().await?;
		self.after_auth_change().await;
		Ok(())
	}

	pub fn open_compose(&mut self) {
		self.compose.open();
	}

	pub fn close_compose(&mut self) {
		self.compose.close();
	}

	pub fn compose_mut(&mut self) -> &mut ComposeModal {
		&mut self.compose
	}

	/// Submits the compose dialog; the feed gains the new post on success.
	pub fn submit_compose(&mut self) -> Result<Post, ServiceError> {
		let cmd = self.compose.submit()?;
		self.feed.execute_create(&cmd)
	}

	pub fn toggle_like(&mut self, id: i64) {
		self.feed.toggle_like(id);
	}

	pub fn feed_mut(&mut self) -> &mut FeedStore {
		&mut self.feed
	}

	/// Builds the frame for the current location.
	pub async fn screen(&mut self) -> Screen {
		let state = self.gate.holder().snapshot().await;
		let route = Route::from_path(&self.location);

		let view = match (&state, route) {
			(_, Route::Landing) => View::Landing(self.landing.clone()),
			(AuthState::Loading, _) => View::Loading,
			(AuthState::SignedOut, _) => View::Landing(self.landing.clone()),
			(AuthState::SignedIn(_), Route::Feed) => View::Feed(self.feed_view()),
			(AuthState::SignedIn(session), Route::Profile) => {
				let author = self.feed.author().to_string();
				View::Profile(ProfileView::build(session, &author, self.feed.load()))
			}
			(AuthState::SignedIn(_), Route::Dashboard) => View::Dashboard(self.dashboard.clone()),
		};

		Screen {
			header: Header::new(route, &state),
			view,
		}
	}

	/// Releases the identity provider subscription.
	pub fn shutdown(self) {
		self.gate.shutdown();
	}

	fn feed_view(&mut self) -> FeedView {
		let now = self.feed.now();
		let posts = self.feed.load().iter().map(|p| PostCard::new(p, now)).collect();
		FeedView {
			posts,
			compose_open: self.compose.is_open(),
			toast: self.feed.active_toast().map(str::to_string),
		}
	}

	async fn after_auth_change(&mut self) {
		let state = self.gate.holder().snapshot().await;
		match self.guard.on_session(&state) {
			Some(path) => {
				tracing::info!("resuming navigation to {}", path);
				self.resolve(&path).await;
			}
			None => {
				let current = self.location.clone();
				self.resolve(&current).await;
			}
		}
	}

	async fn resolve(&mut self, path: &str) -> GuardDecision {
		let state = self.gate.holder().snapshot().await;
		let decision = self.guard.check(path, &state);
		self.location = match &decision {
			GuardDecision::Render(route) => {
				if *route == Route::Feed {
					// feed mount
					self.feed.load();
				}
				route.path().to_string()
			}
			GuardDecision::Redirect { to, .. } => to.path().to_string(),
			GuardDecision::Loading => Route::from_path(path).path().to_string(),
		};
		decision
	}
}
