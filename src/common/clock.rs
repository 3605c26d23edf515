use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Source of "now" for post ids, ages and toast expiry.
pub trait Clock: Send + Sync {
	fn now(&self) -> DateTime<Utc>;

	/// Current time truncated to whole milliseconds, the resolution posts are
	/// stored with.
	fn now_millis(&self) -> DateTime<Utc> {
		let now = self.now();
		DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
	}
}

#[derive(Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

/// Clock that only moves when told to.
pub struct FixedClock(Mutex<DateTime<Utc>>);
impl FixedClock {
	pub fn new(at: DateTime<Utc>) -> Self {
		Self(Mutex::new(at))
	}

	pub fn advance(&self, by: Duration) {
		if let Ok(mut now) = self.0.lock() {
			*now += by;
		}
	}

	pub fn set(&self, at: DateTime<Utc>) {
		if let Ok(mut now) = self.0.lock() {
			*now = at;
		}
	}
}
impl Clock for FixedClock {
	fn now(&self) -> DateTime<Utc> {
		match self.0.lock() {
			Ok(now) => *now,
			Err(poisoned) => *poisoned.into_inner(),
		}
	}
}

#[cfg(test)]
mod test {
	use chrono::{Duration, TimeZone, Utc};

	use super::{Clock, FixedClock};

	#[test]
	fn test_fixed_clock_advances_only_on_request() {
		let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
		let clock = FixedClock::new(start);
		assert_eq!(clock.now(), start);

		clock.advance(Duration::milliseconds(1500));
		assert_eq!(clock.now(), start + Duration::milliseconds(1500));
	}

	#[test]
	fn test_now_millis_drops_sub_millisecond_precision() {
		let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::nanoseconds(1_234_567);
		let clock = FixedClock::new(start);

		assert_eq!(clock.now_millis().timestamp_millis(), start.timestamp_millis());
		assert_eq!(clock.now_millis().timestamp_subsec_nanos(), 1_000_000);
	}
}
