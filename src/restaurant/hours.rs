use crate::clock::Clock;
use crate::model::Restaurant;
use chrono::NaiveTime;
use tracing::debug;

impl Restaurant {
    /// Returns true if `time` falls inside the operating window.
    ///
    /// The window is half-open: the opening time counts as open, the closing
    /// time as closed. When the closing time is earlier than the opening time
    /// the window wraps past midnight. Equal times form an empty window.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        let (open, close) = (self.opening_time, self.closing_time);
        if open <= close {
            open <= time && time < close
        } else {
            time >= open || time < close
        }
    }

    /// Returns true if the restaurant is open at the clock's current time.
    pub fn is_restaurant_open(&self, clock: &impl Clock) -> bool {
        let now = clock.now();
        let open = self.is_open_at(now);
        debug!(restaurant = %self.name, %now, open, "Checked opening hours");
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn restaurant(open: NaiveTime, close: NaiveTime) -> Restaurant {
        Restaurant::new("Amelie's cafe", "Chennai", open, close)
    }

    #[test]
    fn test_window_is_half_open() {
        let r = restaurant(at(10, 30), at(22, 0));
        assert!(r.is_open_at(at(10, 30)));
        assert!(r.is_open_at(at(21, 59)));
        assert!(!r.is_open_at(at(22, 0)));
        assert!(!r.is_open_at(at(10, 29)));
    }

    #[test]
    fn test_overnight_window_wraps_midnight() {
        let r = restaurant(at(20, 0), at(2, 0));
        assert!(r.is_open_at(at(23, 30)));
        assert!(r.is_open_at(at(0, 0)));
        assert!(r.is_open_at(at(1, 59)));
        assert!(!r.is_open_at(at(2, 0)));
        assert!(!r.is_open_at(at(12, 0)));
    }

    #[test]
    fn test_equal_times_never_open() {
        let r = restaurant(at(9, 0), at(9, 0));
        assert!(!r.is_open_at(at(9, 0)));
        assert!(!r.is_open_at(at(15, 0)));
    }

    #[test]
    fn test_uses_injected_clock() {
        let r = restaurant(at(10, 30), at(22, 0));
        assert!(r.is_restaurant_open(&FixedClock::new(at(12, 0))));
        assert!(!r.is_restaurant_open(&FixedClock::new(at(9, 0))));
    }
}
