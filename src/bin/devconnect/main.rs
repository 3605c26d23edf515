pub mod render;

use std::sync::Arc;

use devconnect::{
	adapters::{
		identity::{IdentityProvider, LocalIdentityProvider},
		storage::FileStore,
	},
	common::clock::SystemClock,
	dependencies::config,
	domain::session::Session,
	App,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "commands: go <path> | login | logout | compose | body <text> | tags <text> | submit | cancel | like <id> | quit";

#[tokio::main]
async fn main() {
	let config = config();

	// ! Tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| format!("devconnect={}", config.log_level).into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	// ! Identity
	let provider = config.identity.as_ref().map(|identity| {
		Arc::new(LocalIdentityProvider::new(Session {
			id: format!("{}:{}", identity.project_id, config.feed_author),
			display_name: Some(config.feed_author.clone()),
			email: None,
			avatar_url: None,
		}))
	});

	let store = Arc::new(FileStore::new(&config.storage_dir));
	let mut app = App::bootstrap(
		config,
		provider.clone().map(|p| p as Arc<dyn IdentityProvider>),
		store,
		Arc::new(SystemClock),
	)
	.await;
	if let Some(provider) = &provider {
		provider.restore();
	}
	app.process_auth_events().await;

	println!("{}", HELP);
	println!("{}", render::render(&app.screen().await));

	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	while let Ok(Some(line)) = lines.next_line().await {
		let line = line.trim();
		let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
		match command {
			"" => continue,
			"quit" | "exit" => break,
			"go" => {
				app.navigate(arg).await;
			}
			"login" => {
				if let Err(err) = app.sign_in().await {
					println!("sign-in failed: {}", err);
				}
			}
			"logout" => {
				if let Err(err) = app.sign_out().await {
					println!("sign-out failed: {}", err);
				}
			}
			"compose" => app.open_compose(),
			"body" => {
				app.compose_mut().body = arg.to_string();
			}
			"tags" => {
				app.compose_mut().tags = arg.to_string();
			}
			"cancel" => app.close_compose(),
			"submit" => {
				if let Err(err) = app.submit_compose() {
					println!("not published: {}", err);
				}
			}
			"like" => match arg.parse::<i64>() {
				Ok(id) => app.toggle_like(id),
				Err(_) => println!("like needs a post id"),
			},
			_ => {
				println!("{}", HELP);
				continue;
			}
		}
		app.process_auth_events().await;
		println!("{}", render::render(&app.screen().await));
	}

	app.shutdown();
}
