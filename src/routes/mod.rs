pub mod guard;

use serde::Serialize;

pub use self::guard::{GuardDecision, RouteGuard};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
	Landing,
	Feed,
	Profile,
	Dashboard,
}

impl Route {
	pub const ALL: [Route; 4] = [Route::Landing, Route::Feed, Route::Profile, Route::Dashboard];

	/// Resolves a location path. Unknown paths fall back to the landing page.
	pub fn from_path(path: &str) -> Self {
		let path = path.split(['?', '#']).next().unwrap_or_default();
		match path.trim_end_matches('/') {
			"/feed" | "feed" => Route::Feed,
			"/profile" | "profile" => Route::Profile,
			"/dashboard" | "dashboard" => Route::Dashboard,
			_ => Route::Landing,
		}
	}

	pub fn path(&self) -> &'static str {
		match self {
			Route::Landing => "/",
			Route::Feed => "/feed",
			Route::Profile => "/profile",
			Route::Dashboard => "/dashboard",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Route::Landing => "Home",
			Route::Feed => "Feed",
			Route::Profile => "Profile",
			Route::Dashboard => "Dashboard",
		}
	}

	/// Whether the route needs a signed-in viewer.
	pub fn is_gated(&self) -> bool {
		!matches!(self, Route::Landing)
	}
}

#[cfg(test)]
mod test {
	use super::Route;

	#[test]
	fn test_route_table() {
		assert_eq!(Route::from_path("/"), Route::Landing);
		assert_eq!(Route::from_path("/feed"), Route::Feed);
		assert_eq!(Route::from_path("/feed/"), Route::Feed);
		assert_eq!(Route::from_path("/profile?tab=posts"), Route::Profile);
		assert_eq!(Route::from_path("/dashboard#charts"), Route::Dashboard);
		assert_eq!(Route::from_path("/nope"), Route::Landing);

		for route in Route::ALL {
			assert_eq!(Route::from_path(route.path()), route);
		}
		assert!(!Route::Landing.is_gated());
		assert!(Route::Feed.is_gated() && Route::Profile.is_gated() && Route::Dashboard.is_gated());
	}
}
