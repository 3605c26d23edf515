use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
	pub title: &'static str,
	pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShowcaseItem {
	pub title: &'static str,
	pub description: &'static str,
	pub href: &'static str,
	pub tags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
	pub value: &'static str,
	pub label: &'static str,
}

/// Public marketing page served at `/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LandingPage {
	pub headline: &'static str,
	pub pitch: &'static str,
	pub features: Vec<FeatureCard>,
	pub showcase: Vec<ShowcaseItem>,
	pub stats: Vec<Stat>,
	pub call_to_action: &'static str,
}

impl Default for LandingPage {
	fn default() -> Self {
		Self {
			headline: "The social network for modern developers",
			pitch: "Build a stunning profile, share bite-size posts, showcase projects and stats.",
			features: vec![
				FeatureCard {
					title: "Profiles that shine",
					description: "Custom avatars, bio, tech stack, and social links. Built for recruiters to grasp your value fast.",
				},
				FeatureCard {
					title: "Smooth micro-interactions",
					description: "Transitions, hover effects and toasts for a premium, app-like feel.",
				},
				FeatureCard {
					title: "Project analytics",
					description: "Dashboards with charts to visualize engagement, posts, and followers over time.",
				},
				FeatureCard {
					title: "Auth ready",
					description: "Sign-in scaffolding with protected routes.",
				},
			],
			showcase: vec![
				ShowcaseItem {
					title: "Secret Word Game",
					description: "A guessing game built with clean state management.",
					href: "https://github.com/gab01012025/secret-word-game",
					tags: &["React", "Hooks", "Game"],
				},
				ShowcaseItem {
					title: "Mini Blog",
					description: "Markdown posts, routing, and a sleek reading experience.",
					href: "https://github.com/gab01012025",
					tags: &["React", "Router", "Markdown"],
				},
				ShowcaseItem {
					title: "Task Manager Fullstack",
					description: "Auth, CRUD, and a modern UI on a Node/Express + MongoDB backend.",
					href: "https://github.com/gab01012025/task-manager-fullstack",
					tags: &["Fullstack", "Express", "MongoDB"],
				},
			],
			stats: vec![
				Stat { value: "<50ms", label: "Page transitions" },
				Stat { value: "A11y", label: "Accessible UI" },
				Stat { value: "100%", label: "Responsive" },
				Stat { value: "Type-safe", label: "Typed everywhere" },
			],
			call_to_action: "Ready for the real app? Auth + Feed + Dashboard next.",
		}
	}
}
