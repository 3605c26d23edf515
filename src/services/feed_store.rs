use std::sync::Arc;

use crate::{
	adapters::storage::KeyValueStore,
	common::clock::Clock,
	domain::post::{
		commands::{CreatePost, ToggleLike},
		derive_tags,
		entity::Post,
		seed_posts,
	},
	views::toast::Toast,
};

use super::response::ServiceError;

pub const STORAGE_KEY: &str = "dc_posts";
pub const POST_PUBLISHED: &str = "Post published!";

/// Owns the feed. Loaded lazily on first access and written back in full
/// after every mutation.
pub struct FeedStore {
	store: Arc<dyn KeyValueStore>,
	clock: Arc<dyn Clock>,
	author: String,
	posts: Option<Vec<Post>>,
	toast: Option<Toast>,
}

impl FeedStore {
	pub fn new(
		store: Arc<dyn KeyValueStore>,
		clock: Arc<dyn Clock>,
		author: impl Into<String>,
	) -> Self {
		Self {
			store,
			clock,
			author: author.into(),
			posts: None,
			toast: None,
		}
	}

	/// Returns the feed, reading it from storage on first access. Missing or
	/// unreadable data is replaced by the seed posts.
	pub fn load(&mut self) -> &[Post] {
		if self.posts.is_none() {
			self.posts = Some(self.read_persisted());
		}
		self.posts.as_deref().unwrap_or_default()
	}

	pub fn author(&self) -> &str {
		&self.author
	}

	pub fn create(
		&mut self,
		body: &str,
		raw_tags: &str,
	) -> Result<Post, ServiceError> {
		self.execute_create(&CreatePost::new(body, raw_tags))
	}

	pub fn execute_create(&mut self, cmd: &CreatePost) -> Result<Post, ServiceError> {
		let body = cmd.validated_body()?.to_string();
		let created_at = self.clock.now_millis();

		let posts = self.posts_mut();
		let next_free_id = posts.iter().map(|p| p.id).max().map_or(i64::MIN, |id| id.saturating_add(1));
		let post = Post {
			id: created_at.timestamp_millis().max(next_free_id),
			author: self.author.clone(),
			body,
			tags: derive_tags(&cmd.raw_tags),
			like_count: 0,
			liked_by_viewer: false,
			created_at,
		};
		self.posts_mut().insert(0, post.clone());
		tracing::info!("post {} published with {} tags", post.id, post.tags.len());

		self.persist();
		self.toast = Some(Toast::new(POST_PUBLISHED, created_at));
		Ok(post)
	}

	/// Flips the viewer's like on `id`. Unknown ids are ignored.
	pub fn toggle_like(&mut self, id: i64) {
		self.execute_toggle_like(ToggleLike { id })
	}

	pub fn execute_toggle_like(&mut self, cmd: ToggleLike) {
		let Some(post) = self.posts_mut().iter_mut().find(|p| p.id == cmd.id) else {
			tracing::debug!("like toggle ignored, no post {}", cmd.id);
			return;
		};
		post.toggle_like();
		self.persist();
	}

	/// Writes the whole feed under [`STORAGE_KEY`]. Failures are logged; the
	/// in-memory feed stays authoritative.
	pub fn persist(&self) {
		let Some(posts) = self.posts.as_ref() else {
			return;
		};
		if let Err(err) = self.try_persist(posts) {
			tracing::warn!("could not persist feed: {}", err);
		}
	}

	/// Message of the toast still on screen, if any.
	pub fn active_toast(&self) -> Option<&str> {
		let now = self.clock.now();
		self.toast.as_ref().filter(|t| t.is_visible(now)).map(|t| t.message())
	}

	pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
		self.clock.now()
	}

	fn posts_mut(&mut self) -> &mut Vec<Post> {
		if self.posts.is_none() {
			self.posts = Some(self.read_persisted());
		}
		self.posts.get_or_insert_with(Vec::new)
	}

	fn try_persist(&self, posts: &[Post]) -> Result<(), ServiceError> {
		let payload = serde_json::to_string(posts)?;
		self.store.set(STORAGE_KEY, &payload)
	}

	fn read_persisted(&self) -> Vec<Post> {
		match self.try_read_persisted() {
			Ok(Some(posts)) => posts,
			Ok(None) => seed_posts(self.clock.now_millis()),
			Err(err) => {
				tracing::warn!("stored feed unreadable, using seed posts: {}", err);
				seed_posts(self.clock.now_millis())
			}
		}
	}

	fn try_read_persisted(&self) -> Result<Option<Vec<Post>>, ServiceError> {
		let Some(raw) = self.store.get(STORAGE_KEY)? else {
			return Ok(None);
		};
		Ok(Some(serde_json::from_str::<Vec<Post>>(&raw)?))
	}
}

#[cfg(test)]
mod test {
	use std::sync::Arc;

	use chrono::{Duration, TimeZone, Utc};
	use rand::{seq::SliceRandom, Rng};

	use super::{FeedStore, POST_PUBLISHED, STORAGE_KEY};
	use crate::{
		adapters::storage::{KeyValueStore, MemoryStore},
		common::clock::{Clock, FixedClock},
		services::response::ServiceError,
	};

	fn set_up() -> (Arc<MemoryStore>, Arc<FixedClock>, FeedStore) {
		let store = Arc::new(MemoryStore::new());
		let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));
		let feed = FeedStore::new(store.clone(), clock.clone(), "gabriel");
		(store, clock, feed)
	}

	#[test]
	fn test_empty_storage_yields_seed() {
		let (store, _clock, mut feed) = set_up();

		let ids: Vec<i64> = feed.load().iter().map(|p| p.id).collect();
		assert_eq!(ids, vec![3, 2, 1]);
		// loading alone does not write
		assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
	}

	#[test]
	fn test_corrupt_storage_yields_seed() {
		for payload in [r#"[{"id":1,"author":"x","te"#, "not json", r#"{"id":1}"#, r#"[{"id":1,"likes":-1}]"#] {
			let (store, _clock, mut feed) = set_up();
			store.set(STORAGE_KEY, payload).unwrap();

			assert_eq!(feed.load().len(), 3);
			assert_eq!(feed.load()[0].id, 3);
		}
	}

	#[test]
	fn test_short_bodies_are_rejected() {
		let (store, _clock, mut feed) = set_up();
		let before = feed.load().to_vec();
		let mut rng = rand::thread_rng();
		let padding = [" ", "\t", "\n", "  "];

		for _ in 0..50 {
			let len = rng.gen_range(0..3);
			let core: String = (0..len).map(|_| rng.gen_range('a'..='z')).collect();
			let body = format!("{}{}{}", padding.choose(&mut rng).unwrap(), core, padding.choose(&mut rng).unwrap());

			assert!(matches!(feed.create(&body, "#tag"), Err(ServiceError::PostTooShort)));
		}
		assert_eq!(feed.load(), before.as_slice());
		assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
		assert_eq!(feed.active_toast(), None);
	}

	#[test]
	fn test_create_prepends_and_persists() {
		'_given: {
			let (store, clock, mut feed) = set_up();
			let before = feed.load().len();

			'_when: {
				let post = feed.create("  Hello from Rust  ", "#rust, async #rust").unwrap();

				assert_eq!(post.body, "Hello from Rust");
				assert_eq!(post.tags, vec!["rust", "async"]);
				assert_eq!(post.id, clock.now_millis().timestamp_millis());
				assert_eq!(post.like_count, 0);
				assert!(!post.liked_by_viewer);
				assert_eq!(post.author, "gabriel");
				assert_eq!(feed.load()[0], post);
			}

			assert_eq!(feed.load().len(), before + 1);
			let stored: Vec<crate::domain::post::entity::Post> =
				serde_json::from_str(&store.get(STORAGE_KEY).unwrap().unwrap()).unwrap();
			assert_eq!(stored, feed.load());
		}
	}

	#[test]
	fn test_ids_stay_unique_within_one_millisecond() {
		let (_store, _clock, mut feed) = set_up();

		let first = feed.create("first post", "").unwrap();
		let second = feed.create("second post", "").unwrap();

		assert!(second.id > first.id);
		assert_eq!(feed.load()[0].id, second.id);
	}

	#[test]
	fn test_create_after_stored_max_id() {
		'_given: {
			let (store, clock, mut feed) = set_up();
			store
				.set(
					STORAGE_KEY,
					r#"[{"id":9223372036854775807,"author":"x","text":"last id","tags":[],"likes":0,"liked":false,"createdAt":0}]"#,
				)
				.unwrap();

			'_when: {
				let post = feed.create("hello world", "").unwrap();
				assert_eq!(post.id, i64::MAX);
				assert_eq!(post.created_at, clock.now_millis());
			}

			assert_eq!(feed.load().len(), 2);
			assert_eq!(feed.load()[0].body, "hello world");
		}
	}

	#[test]
	fn test_like_on_stored_max_count() {
		let (store, _clock, mut feed) = set_up();
		store
			.set(
				STORAGE_KEY,
				r#"[{"id":5,"author":"x","text":"popular","tags":[],"likes":18446744073709551615,"liked":false,"createdAt":0}]"#,
			)
			.unwrap();

		feed.toggle_like(5);
		assert_eq!(feed.load()[0].like_count, u64::MAX);
		assert!(feed.load()[0].liked_by_viewer);
	}

	#[test]
	fn test_toast_is_visible_for_two_seconds() {
		let (_store, clock, mut feed) = set_up();
		feed.create("toast me", "").unwrap();

		assert_eq!(feed.active_toast(), Some(POST_PUBLISHED));
		clock.advance(Duration::milliseconds(1_999));
		assert_eq!(feed.active_toast(), Some(POST_PUBLISHED));
		clock.advance(Duration::milliseconds(1));
		assert_eq!(feed.active_toast(), None);
	}

	#[test]
	fn test_toggle_like_is_its_own_inverse() {
		let (store, _clock, mut feed) = set_up();
		let original = feed.load().to_vec();

		feed.toggle_like(2);
		let liked = feed.load().iter().find(|p| p.id == 2).unwrap().clone();
		assert!(liked.liked_by_viewer);
		assert_eq!(liked.like_count, 13);
		assert!(store.get(STORAGE_KEY).unwrap().is_some());

		feed.toggle_like(2);
		assert_eq!(feed.load(), original.as_slice());
	}

	#[test]
	fn test_toggle_like_unknown_id_is_noop() {
		let (store, _clock, mut feed) = set_up();
		let original = feed.load().to_vec();

		feed.toggle_like(999);
		assert_eq!(feed.load(), original.as_slice());
		assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
	}

	#[test]
	fn test_persisted_round_trip() {
		let (store, clock, mut feed) = set_up();
		feed.create("persist me", "#a #b").unwrap();
		feed.toggle_like(1);

		let loaded = feed.load().to_vec();
		feed.persist();

		let mut reopened = FeedStore::new(store.clone(), clock.clone(), "gabriel");
		assert_eq!(reopened.load(), loaded.as_slice());
	}
}
