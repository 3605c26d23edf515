/// Connection parameters for the identity provider. Only present when every
/// key was found in the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
	pub api_key: String,
	pub auth_domain: String,
	pub project_id: String,
	pub app_id: String,
	pub storage_bucket: String,
	pub messaging_sender_id: String,
}

pub const IDENTITY_KEYS: [&str; 6] = [
	"FIREBASE_API_KEY",
	"FIREBASE_AUTH_DOMAIN",
	"FIREBASE_PROJECT_ID",
	"FIREBASE_APP_ID",
	"FIREBASE_STORAGE_BUCKET",
	"FIREBASE_MESSAGING_SENDER_ID",
];

pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Directory the file store writes `<key>.json` files into
	pub storage_dir: String,
	pub feed_author: String,
	pub identity: Option<IdentityConfig>,

	/// Identity keys absent from the environment
	pub missing_identity_keys: Vec<&'static str>,
}

impl Config {
	pub fn new() -> Config {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
		let log_level = lookup("LOG_LEVEL").unwrap_or("warn".to_string());
		let storage_dir = lookup("STORAGE_DIR").unwrap_or(".devconnect".into());
		let feed_author = lookup("FEED_AUTHOR").unwrap_or("gabriel".to_string());

		let mut values = Vec::with_capacity(IDENTITY_KEYS.len());
		let mut missing_identity_keys = vec![];
		for key in IDENTITY_KEYS {
			match lookup(key).filter(|v| !v.trim().is_empty()) {
				Some(value) => values.push(value),
				None => missing_identity_keys.push(key),
			}
		}

		let identity = if missing_identity_keys.is_empty() {
			let mut values = values.into_iter();
			let mut next = || values.next().unwrap_or_default();
			Some(IdentityConfig {
				api_key: next(),
				auth_domain: next(),
				project_id: next(),
				app_id: next(),
				storage_bucket: next(),
				messaging_sender_id: next(),
			})
		} else {
			None
		};

		Config {
			log_level,
			storage_dir,
			feed_author,
			identity,
			missing_identity_keys,
		}
	}

	pub fn auth_enabled(&self) -> bool {
		self.identity.is_some()
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::{Config, IDENTITY_KEYS};

	fn full_env() -> HashMap<&'static str, String> {
		IDENTITY_KEYS.iter().map(|k| (*k, format!("{}-value", k.to_lowercase()))).collect()
	}

	#[test]
	fn test_identity_config_when_all_keys_present() {
		let env = full_env();
		let config = Config::from_lookup(|k| env.get(k).cloned());

		assert!(config.auth_enabled());
		let identity = config.identity.unwrap();
		assert_eq!(identity.project_id, "firebase_project_id-value");
		assert_eq!(identity.messaging_sender_id, "firebase_messaging_sender_id-value");
		assert_eq!(config.log_level, "warn");
		assert_eq!(config.feed_author, "gabriel");
	}

	#[test]
	fn test_missing_key_disables_auth() {
		let mut env = full_env();
		env.remove("FIREBASE_APP_ID");
		env.insert("FIREBASE_API_KEY", "   ".to_string());
		let config = Config::from_lookup(|k| env.get(k).cloned());

		assert!(!config.auth_enabled());
		assert_eq!(config.missing_identity_keys, vec!["FIREBASE_API_KEY", "FIREBASE_APP_ID"]);
	}
}
