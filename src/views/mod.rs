pub mod compose;
pub mod dashboard;
pub mod landing;
pub mod profile;
pub mod toast;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
	domain::{
		post::{entity::Post, relative_age},
		session::AuthState,
	},
	routes::Route,
};

use self::{dashboard::DashboardView, landing::LandingPage, profile::ProfileView};

/// What the rendering layer should draw for the current location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum View {
	/// Auth state not known yet; neither signed-in nor signed-out content.
	Loading,
	Landing(LandingPage),
	Feed(FeedView),
	Profile(ProfileView),
	Dashboard(DashboardView),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostCard {
	pub id: i64,
	pub author: String,
	pub body: String,
	pub tags: Vec<String>,
	pub like_count: u64,
	pub liked: bool,
	pub age: String,
}

impl PostCard {
	pub fn new(post: &Post, now: DateTime<Utc>) -> Self {
		Self {
			id: post.id,
			author: post.author.clone(),
			body: post.body.clone(),
			tags: post.tags.clone(),
			like_count: post.like_count,
			liked: post.liked_by_viewer,
			age: relative_age(post.created_at, now),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedView {
	pub posts: Vec<PostCard>,
	pub compose_open: bool,
	pub toast: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
	pub label: &'static str,
	pub route: Route,
	pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum HeaderAuth {
	Loading,
	SignedIn { name: String, avatar_url: Option<String> },
	SignedOut,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Header {
	pub links: Vec<NavLink>,
	pub auth: HeaderAuth,
}

impl Header {
	pub fn new(current: Route, auth: &AuthState) -> Self {
		let links = Route::ALL
			.iter()
			.map(|route| NavLink {
				label: route.label(),
				route: *route,
				active: *route == current,
			})
			.collect();
		let auth = match auth {
			AuthState::Loading => HeaderAuth::Loading,
			AuthState::SignedOut => HeaderAuth::SignedOut,
			AuthState::SignedIn(session) => HeaderAuth::SignedIn {
				name: session.display_name.clone().unwrap_or("User".to_string()),
				avatar_url: session.avatar_url.clone(),
			},
		};
		Header { links, auth }
	}
}

/// Header plus body: everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screen {
	pub header: Header,
	pub view: View,
}
