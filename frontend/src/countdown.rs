use chrono::{DateTime, Duration, Utc};

use crate::config;

/// Hours, minutes and seconds left until an offer expires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn from_total_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::default();
        }
        Self {
            hours: total / 3600,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

/// Countdown toward an expiry instant that is fixed when the countdown is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    expiry: DateTime<Utc>,
}

impl Countdown {
    pub fn new(started_at: DateTime<Utc>, window: Duration) -> Self {
        Self {
            expiry: started_at + window,
        }
    }

    /// Offer window starting now, as configured for the page.
    pub fn starting_now() -> Self {
        Self::new(Utc::now(), Duration::hours(config::OFFER_WINDOW_HOURS))
    }

    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    pub fn time_left_at(&self, now: DateTime<Utc>) -> TimeLeft {
        let remaining = self.expiry - now;
        // Sub-second remainders are floored; anything past expiry clamps to zero.
        let total = remaining.num_milliseconds().div_euclid(1000);
        TimeLeft::from_total_seconds(total)
    }

    pub fn time_left(&self) -> TimeLeft {
        self.time_left_at(Utc::now())
    }
}

/// Zero-padded two digit rendering used by the countdown cells.
pub fn two_digits(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
    }

    fn five_hour_countdown() -> Countdown {
        Countdown::new(start(), Duration::hours(5))
    }

    #[test]
    fn expiry_is_five_hours_after_start() {
        assert_eq!(five_hour_countdown().expiry(), start() + Duration::seconds(18_000));
    }

    #[test]
    fn full_window_at_start() {
        let left = five_hour_countdown().time_left_at(start());
        assert_eq!(left, TimeLeft { hours: 5, minutes: 0, seconds: 0 });
    }

    #[test]
    fn one_hour_in_shows_four_hours() {
        let left = five_hour_countdown().time_left_at(start() + Duration::seconds(3600));
        assert_eq!(left, TimeLeft { hours: 4, minutes: 0, seconds: 0 });
        assert_eq!(two_digits(left.hours), "04");
        assert_eq!(two_digits(left.minutes), "00");
        assert_eq!(two_digits(left.seconds), "00");
    }

    #[test]
    fn clamps_to_zero_at_and_after_expiry() {
        let countdown = five_hour_countdown();
        for elapsed in [18_000, 18_001, 36_000, 1_000_000] {
            let left = countdown.time_left_at(start() + Duration::seconds(elapsed));
            assert!(left.is_zero(), "elapsed {elapsed}s gave {left:?}");
            assert_eq!(left, TimeLeft::default());
        }
    }

    #[test]
    fn partial_seconds_are_floored() {
        let left = five_hour_countdown().time_left_at(start() + Duration::milliseconds(500));
        assert_eq!(left, TimeLeft { hours: 4, minutes: 59, seconds: 59 });

        let almost_done = five_hour_countdown()
            .time_left_at(start() + Duration::milliseconds(17_999_400));
        assert!(almost_done.is_zero());
    }

    #[test]
    fn remaining_seconds_track_elapsed_time() {
        let countdown = five_hour_countdown();
        for elapsed in (0..18_000).step_by(997) {
            let left = countdown.time_left_at(start() + Duration::seconds(elapsed));
            assert_eq!(left.total_seconds(), 18_000 - elapsed);
            assert!((0..60).contains(&left.minutes));
            assert!((0..60).contains(&left.seconds));
        }
    }

    #[test]
    fn decomposes_mixed_values() {
        let left = TimeLeft::from_total_seconds(2 * 3600 + 7 * 60 + 9);
        assert_eq!(left, TimeLeft { hours: 2, minutes: 7, seconds: 9 });
        assert_eq!(TimeLeft::from_total_seconds(-42), TimeLeft::default());
    }

    #[test]
    fn two_digits_pads_single_digits() {
        assert_eq!(two_digits(7), "07");
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(59), "59");
    }
}
