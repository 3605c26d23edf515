use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatCard {
	pub label: &'static str,
	pub value: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
	pub day: &'static str,
	pub posts: u32,
	pub likes: u32,
	pub comments: u32,
}

/// Data behind the dashboard charts. Figures are fixed demo values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardView {
	pub cards: Vec<StatCard>,
	pub weekly: Vec<DailyActivity>,
}

impl Default for DashboardView {
	fn default() -> Self {
		let day = |day, posts, likes, comments| DailyActivity { day, posts, likes, comments };
		Self {
			cards: vec![
				StatCard { label: "Posts", value: 18 },
				StatCard { label: "Followers", value: 127 },
				StatCard { label: "Likes", value: 842 },
				StatCard { label: "Projects", value: 6 },
			],
			weekly: vec![
				day("Mon", 1, 20, 2),
				day("Tue", 2, 38, 5),
				day("Wed", 3, 56, 6),
				day("Thu", 2, 41, 4),
				day("Fri", 4, 72, 9),
				day("Sat", 5, 85, 11),
				day("Sun", 1, 19, 3),
			],
		}
	}
}

impl DashboardView {
	pub fn weekly_likes(&self) -> u32 {
		self.weekly.iter().map(|d| d.likes).sum()
	}

	pub fn busiest_day(&self) -> Option<&DailyActivity> {
		self.weekly.iter().max_by_key(|d| d.posts)
	}
}
