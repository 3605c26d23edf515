use std::sync::OnceLock;

use crate::config::Config;

pub fn config() -> &'static Config {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new();

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	config
}
