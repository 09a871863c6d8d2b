//! Wall-clock source for the digit surface.

/// Local hour and minute as shown on the face.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LocalTime {
    pub hour: u8,
    pub minute: u8,
}

impl LocalTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let minutes = (seconds / 60) % (24 * 60);
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }
}

pub trait WallClock {
    /// Current local time, or `None` when the clock is not available.
    fn local_time(&self) -> Option<LocalTime>;

    /// Whether the user prefers 24-hour display.
    fn is_24h_style(&self) -> bool;
}

/// A clock frozen at one reading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock {
    time: Option<LocalTime>,
    use_24h: bool,
}

impl FixedClock {
    pub const fn new(time: Option<LocalTime>, use_24h: bool) -> Self {
        Self { time, use_24h }
    }

    pub fn set(&mut self, time: LocalTime) {
        self.time = Some(time);
    }
}

impl WallClock for FixedClock {
    fn local_time(&self) -> Option<LocalTime> {
        self.time
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h
    }
}

impl<C: WallClock + ?Sized> WallClock for &C {
    fn local_time(&self) -> Option<LocalTime> {
        (**self).local_time()
    }

    fn is_24h_style(&self) -> bool {
        (**self).is_24h_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_of_day_wrap_at_midnight() {
        assert_eq!(LocalTime::from_seconds_of_day(0), LocalTime::new(0, 0));
        assert_eq!(LocalTime::from_seconds_of_day(13 * 3600 + 7 * 60 + 59), LocalTime::new(13, 7));
        assert_eq!(LocalTime::from_seconds_of_day(24 * 3600 + 60), LocalTime::new(0, 1));
    }

    #[test]
    fn fixed_clock_reports_what_it_was_given() {
        let mut clock = FixedClock::new(None, true);
        assert_eq!(clock.local_time(), None);
        assert!(clock.is_24h_style());

        clock.set(LocalTime::new(8, 30));
        assert_eq!((&clock).local_time(), Some(LocalTime::new(8, 30)));
    }
}
