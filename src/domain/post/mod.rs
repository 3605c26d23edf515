pub mod commands;
pub mod entity;

use chrono::{DateTime, Duration, Utc};

use self::entity::Post;

pub const MAX_TAGS: usize = 5;

/// Splits free-form tag input on `#`, commas and whitespace, keeping the
/// first occurrence of each tag and at most [`MAX_TAGS`] of them.
pub fn derive_tags(raw: &str) -> Vec<String> {
	let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);
	for tag in raw.split(|c: char| c == '#' || c == ',' || c.is_whitespace()) {
		let tag = tag.trim();
		if tag.is_empty() || tags.iter().any(|t| t == tag) {
			continue;
		}
		tags.push(tag.to_string());
		if tags.len() == MAX_TAGS {
			break;
		}
	}
	tags
}

/// Coarse age label: "just now", then minutes, hours and days, each floored.
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
	let minutes = (now - created_at).num_minutes();
	if minutes < 1 {
		return "just now".to_string();
	}
	if minutes < 60 {
		return format!("{}m", minutes);
	}
	let hours = minutes / 60;
	if hours < 24 {
		return format!("{}h", hours);
	}
	format!("{}d", hours / 24)
}

/// Default posts used when nothing (readable) is stored yet. Newest first.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
	let post = |id: i64, body: &str, tags: [&str; 3], likes: u64, hours_ago: i64| Post {
		id,
		author: "gabriel".to_string(),
		body: body.to_string(),
		tags: tags.iter().map(|t| t.to_string()).collect(),
		like_count: likes,
		liked_by_viewer: false,
		created_at: now - Duration::hours(hours_ago),
	};

	vec![
		post(
			3,
			"Shipping DevConnect feed with motion and likes. Next: comments.",
			["react", "tailwind", "motion"],
			6,
			3,
		),
		post(
			2,
			"Landing done: glassmorphism, dark mode, and showcase. Routing in!",
			["ui", "landing", "router"],
			12,
			24,
		),
		post(
			1,
			"Kicking off DevConnect: a social app for devs to wow recruiters.",
			["portfolio", "react", "tailwind"],
			20,
			48,
		),
	]
}

#[cfg(test)]
mod test {
	use chrono::{Duration, TimeZone, Utc};

	use super::{derive_tags, relative_age, seed_posts};

	#[test]
	fn test_derive_tags_on_clean_input() {
		assert_eq!(derive_tags("#react #tailwind"), vec!["react", "tailwind"]);
		assert_eq!(derive_tags("react, tailwind"), vec!["react", "tailwind"]);
	}

	#[test]
	fn test_derive_tags_dedupes_in_first_seen_order() {
		assert_eq!(derive_tags("a a, b"), vec!["a", "b"]);
		assert_eq!(derive_tags("b,#a,,b  a"), vec!["b", "a"]);
	}

	#[test]
	fn test_derive_tags_truncates_after_dedup() {
		assert_eq!(derive_tags("one one two three four five six"), vec!["one", "two", "three", "four", "five"]);
		assert!(derive_tags("  # , \t\n").is_empty());
	}

	#[test]
	fn test_relative_age_tiers() {
		let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

		assert_eq!(relative_age(now - Duration::milliseconds(30_000), now), "just now");
		assert_eq!(relative_age(now - Duration::minutes(5), now), "5m");
		assert_eq!(relative_age(now - Duration::seconds(59 * 60 + 59), now), "59m");
		assert_eq!(relative_age(now - Duration::hours(3), now), "3h");
		assert_eq!(relative_age(now - Duration::minutes(3 * 60 + 59), now), "3h");
		assert_eq!(relative_age(now - Duration::hours(47), now), "1d");
		assert_eq!(relative_age(now + Duration::minutes(10), now), "just now");
	}

	#[test]
	fn test_seed_is_newest_first() {
		let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
		let seed = seed_posts(now);

		assert_eq!(seed.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 2, 1]);
		assert!(seed.windows(2).all(|w| w[0].created_at > w[1].created_at));
		assert!(seed.iter().all(|p| !p.liked_by_viewer));
	}
}
