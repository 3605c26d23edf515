use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed post. Field names on the wire follow the stored record layout:
/// `{"id","author","text","tags","likes","liked","createdAt"}`.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: i64,
	pub author: String,
	#[serde(rename = "text")]
	pub body: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(rename = "likes")]
	pub like_count: u64,
	#[serde(rename = "liked")]
	pub liked_by_viewer: bool,
	#[serde(with = "chrono::serde::ts_milliseconds")]
	pub created_at: DateTime<Utc>,
}

impl Post {
	/// Flips the viewer's like. Unliking never takes the count below zero.
	pub fn toggle_like(&mut self) {
		if self.liked_by_viewer {
			self.like_count = self.like_count.saturating_sub(1);
		} else {
			self.like_count = self.like_count.saturating_add(1);
		}
		self.liked_by_viewer = !self.liked_by_viewer;
	}
}

#[test]
fn test_wire_representation() {
	let post = Post {
		id: 1_700_000_000_000,
		author: "gabriel".to_string(),
		body: "Hello feed".to_string(),
		tags: vec!["rust".to_string()],
		like_count: 2,
		liked_by_viewer: true,
		created_at: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
	};

	let jsonified = serde_json::to_value(&post).unwrap();
	assert_eq!(
		jsonified,
		serde_json::json!({
			"id": 1_700_000_000_000i64,
			"author": "gabriel",
			"text": "Hello feed",
			"tags": ["rust"],
			"likes": 2,
			"liked": true,
			"createdAt": 1_700_000_000_000i64,
		})
	);
	assert_eq!(serde_json::from_value::<Post>(jsonified).unwrap(), post);
}

#[test]
fn test_unlike_floors_at_zero() {
	let mut post = Post {
		id: 1,
		author: "gabriel".to_string(),
		body: "stale record".to_string(),
		tags: vec![],
		like_count: 0,
		liked_by_viewer: true,
		created_at: DateTime::from_timestamp_millis(0).unwrap(),
	};

	post.toggle_like();
	assert_eq!(post.like_count, 0);
	assert!(!post.liked_by_viewer);
}

#[test]
fn test_like_saturates_at_max() {
	let mut post = Post {
		id: 5,
		author: "gabriel".to_string(),
		body: "popular".to_string(),
		tags: vec![],
		like_count: u64::MAX,
		liked_by_viewer: false,
		created_at: DateTime::from_timestamp_millis(0).unwrap(),
	};

	post.toggle_like();
	assert_eq!(post.like_count, u64::MAX);
	assert!(post.liked_by_viewer);

	post.toggle_like();
	assert_eq!(post.like_count, u64::MAX - 1);
	assert!(!post.liked_by_viewer);
}
