use chrono::{DateTime, Duration, Utc};

pub const TOAST_DURATION_MS: i64 = 2_000;

/// Short-lived notification. Dismisses itself [`TOAST_DURATION_MS`] after
/// being shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
	message: String,
	shown_at: DateTime<Utc>,
}

impl Toast {
	pub fn new(message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
		Self {
			message: message.into(),
			shown_at,
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
		now >= self.shown_at && now - self.shown_at < Duration::milliseconds(TOAST_DURATION_MS)
	}
}
