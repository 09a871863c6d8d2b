//! Host-side implementations of the watchface's injected sources.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use roundy_core::{
    clock::{LocalTime, WallClock},
    direction::{Direction, DirectionSource},
};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Wall clock backed by the system time shifted by a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset_minutes: i32,
    use_24h: bool,
}

impl SystemClock {
    pub fn new(offset_minutes: i32, use_24h: bool) -> Self {
        Self {
            offset_minutes,
            use_24h,
        }
    }
}

impl WallClock for SystemClock {
    fn local_time(&self) -> Option<LocalTime> {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
        let seconds = i64::try_from(since_epoch.as_secs()).ok()? + i64::from(self.offset_minutes) * 60;
        let of_day = u32::try_from(seconds.rem_euclid(SECONDS_PER_DAY)).ok()?;
        Some(LocalTime::from_seconds_of_day(of_day))
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h
    }
}

/// Uniform pick over the four directions per activation.
#[derive(Debug, Default)]
pub struct RandomDirection;

impl DirectionSource for RandomDirection {
    fn next_direction(&mut self) -> Direction {
        let index = rand::thread_rng().gen_range(0..Direction::ALL.len());
        Direction::ALL[index]
    }
}
