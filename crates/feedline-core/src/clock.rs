//! Time source for record construction.
//!
//! Records read the clock exactly once when they are built, so a [`FixedClock`]
//! makes every derived value (publish stamp, days left) deterministic.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Supplies the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Frozen at midnight plus the given wall time on `date`.
    pub fn at(date: NaiveDate, hour: u32, min: u32, sec: u32) -> Option<Self> {
        date.and_hms_opt(hour, min, sec).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_today_is_date_of_now() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let clock = FixedClock::at(date, 23, 59, 59).unwrap();
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now(), date.and_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn fixed_clock_rejects_invalid_time() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert!(FixedClock::at(date, 24, 0, 0).is_none());
    }

    #[test]
    fn borrowed_clock_delegates() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let clock = FixedClock::at(date, 8, 0, 0).unwrap();
        fn read<C: Clock>(c: C) -> NaiveDateTime {
            c.now()
        }
        assert_eq!(read(&clock), clock.now());
    }
}
