//! # Time Sources
//!
//! Opening-hours checks never read the system clock directly. They take a
//! [`Clock`], so production code passes [`SystemClock`] and tests pass a
//! [`FixedClock`] pinned to whatever time-of-day the scenario needs.
//!
//! ```ignore
//! let clock = FixedClock::new(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
//! assert!(restaurant.is_restaurant_open(&clock));
//! ```
//!
//! Closures work too: any `Fn() -> NaiveTime` is a `Clock`.

use chrono::{Local, NaiveTime};
use std::cell::Cell;

/// Source of the current time-of-day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock that always reports the same time until told otherwise.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: Cell<NaiveTime>,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    /// Moves the clock to `time`.
    pub fn set(&self, time: NaiveTime) {
        self.time.set(time);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time.get()
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveTime,
{
    fn now(&self) -> NaiveTime {
        self()
    }
}
