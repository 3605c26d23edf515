pub(crate) mod file_store;
use std::{collections::HashMap, sync::Mutex};

pub use self::file_store::FileStore;
use crate::services::response::ServiceError;

/// Minimal key-value persistence the feed is written through.
pub trait KeyValueStore: Send + Sync {
	fn get(&self, key: &str) -> Result<Option<String>, ServiceError>;
	fn set(&self, key: &str, value: &str) -> Result<(), ServiceError>;
}

#[derive(Default)]
pub struct MemoryStore {
	items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Default::default()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
		let items = self.items.lock().map_err(|err| ServiceError::StorageError(err.to_string().into()))?;
		Ok(items.get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), ServiceError> {
		let mut items = self.items.lock().map_err(|err| ServiceError::StorageError(err.to_string().into()))?;
		items.insert(key.to_string(), value.to_string());
		Ok(())
	}
}
