use std::{
	fs, io,
	path::{Path, PathBuf},
};

use super::KeyValueStore;
use crate::services::response::ServiceError;

/// Stores each key as `<base>/<key>.json`.
pub struct FileStore {
	base_path: PathBuf,
}

impl FileStore {
	pub fn new(base_path: impl Into<PathBuf>) -> Self {
		Self { base_path: base_path.into() }
	}

	pub fn base_path(&self) -> &Path {
		&self.base_path
	}

	fn path_for(&self, key: &str) -> PathBuf {
		self.base_path.join(format!("{}.json", key))
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
		match fs::read_to_string(self.path_for(key)) {
			Ok(value) => Ok(Some(value)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	fn set(&self, key: &str, value: &str) -> Result<(), ServiceError> {
		fs::create_dir_all(&self.base_path)?;

		// readers see the previous value or the new one, never a partial write
		let target = self.path_for(key);
		let staging = self.base_path.join(format!("{}.json.tmp", key));
		fs::write(&staging, value)?;
		fs::rename(&staging, &target)?;
		Ok(())
	}
}
