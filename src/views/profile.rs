use serde::Serialize;

use crate::domain::{post::entity::Post, session::Session};

pub const DEFAULT_NAME: &str = "Gabriel Gomes";
pub const HEADLINE: &str = "Frontend • React • Tailwind";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileView {
	pub name: String,
	pub email: Option<String>,
	pub avatar_url: Option<String>,
	pub headline: &'static str,
	pub post_count: usize,
	pub likes_received: u64,
}

impl ProfileView {
	/// Builds the profile card for `session`, counting posts written as
	/// `author`.
	pub fn build(
		session: &Session,
		author: &str,
		posts: &[Post],
	) -> Self {
		let own = posts.iter().filter(|p| p.author == author);
		ProfileView {
			name: session.display_name.clone().unwrap_or(DEFAULT_NAME.to_string()),
			email: session.email.clone(),
			avatar_url: session.avatar_url.clone(),
			headline: HEADLINE,
			post_count: own.clone().count(),
			likes_received: own.map(|p| p.like_count).sum(),
		}
	}
}

#[cfg(test)]
mod test {
	use chrono::{TimeZone, Utc};

	use super::{ProfileView, DEFAULT_NAME};
	use crate::domain::{post::seed_posts, session::Session};

	#[test]
	fn test_profile_counts_own_posts() {
		let mut posts = seed_posts(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
		posts[0].author = "someone-else".to_string();
		let session = Session {
			id: "uid".to_string(),
			display_name: None,
			email: Some("g@example.com".to_string()),
			avatar_url: None,
		};

		let profile = ProfileView::build(&session, "gabriel", &posts);
		assert_eq!(profile.name, DEFAULT_NAME);
		assert_eq!(profile.post_count, 2);
		assert_eq!(profile.likes_received, 32);
	}
}
