use std::fmt::Write;

use devconnect::views::{HeaderAuth, Screen, View};

/// Plain-text rendering of one frame.
pub fn render(screen: &Screen) -> String {
	let mut out = String::new();

	let links: Vec<String> = screen
		.header
		.links
		.iter()
		.map(|link| if link.active { format!("[{}]", link.label) } else { link.label.to_string() })
		.collect();
	let auth = match &screen.header.auth {
		HeaderAuth::Loading => "...".to_string(),
		HeaderAuth::SignedIn { name, .. } => format!("{} (logout)", name),
		HeaderAuth::SignedOut => "(login)".to_string(),
	};
	let _ = writeln!(out, "DevConnect | {} | {}", links.join(" "), auth);
	let _ = writeln!(out, "{}", "-".repeat(60));

	match &screen.view {
		View::Loading => {
			let _ = writeln!(out, "Loading...");
		}
		View::Landing(page) => {
			let _ = writeln!(out, "{}\n{}\n", page.headline, page.pitch);
			for feature in &page.features {
				let _ = writeln!(out, "* {}: {}", feature.title, feature.description);
			}
			let _ = writeln!(out);
			for item in &page.showcase {
				let _ = writeln!(out, "- {} [{}] {}", item.title, item.tags.join(", "), item.href);
			}
			let stats: Vec<String> = page.stats.iter().map(|s| format!("{} {}", s.value, s.label)).collect();
			let _ = writeln!(out, "\n{}\n\n{}", stats.join(" | "), page.call_to_action);
		}
		View::Feed(feed) => {
			if let Some(toast) = &feed.toast {
				let _ = writeln!(out, ">> {}", toast);
			}
			if feed.compose_open {
				let _ = writeln!(out, "(composing: `body ...`, `tags ...`, `submit`, `cancel`)");
			}
			for post in &feed.posts {
				let heart = if post.liked { "♥" } else { "♡" };
				let _ = writeln!(out, "#{} @{} · {}", post.id, post.author, post.age);
				let _ = writeln!(out, "  {}", post.body);
				if !post.tags.is_empty() {
					let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
					let _ = writeln!(out, "  {}", tags.join(" "));
				}
				let _ = writeln!(out, "  {} {}", heart, post.like_count);
			}
		}
		View::Profile(profile) => {
			let _ = writeln!(out, "{}\n{}", profile.name, profile.headline);
			if let Some(email) = &profile.email {
				let _ = writeln!(out, "{}", email);
			}
			let _ = writeln!(out, "{} posts · {} likes received", profile.post_count, profile.likes_received);
		}
		View::Dashboard(dashboard) => {
			for card in &dashboard.cards {
				let _ = writeln!(out, "{:>10}: {}", card.label, card.value);
			}
			let _ = writeln!(out);
			for day in &dashboard.weekly {
				let _ = writeln!(
					out,
					"{} posts {:>2} likes {:>3} comments {:>2}",
					day.day, day.posts, day.likes, day.comments
				);
			}
			let _ = writeln!(out, "\n{} likes this week", dashboard.weekly_likes());
			if let Some(busiest) = dashboard.busiest_day() {
				let _ = writeln!(out, "busiest day: {} ({} posts)", busiest.day, busiest.posts);
			}
		}
	}
	out
}
