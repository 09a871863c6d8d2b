use super::{STEP_DELAY_MS, Sweep, SweepMode};
use crate::scheduler::{Scheduler, TimerKind};

/// Digit variant: the reveal front advances and every band it has passed
/// stays flipped until the next run.
#[derive(Clone, Copy, Debug, Default)]
pub struct CumulativeReveal;

impl SweepMode for CumulativeReveal {
    const START_PROGRESS: i32 = -1;
    const LABEL: &'static str = "digit";

    fn step<S: Scheduler>(sweep: &mut Sweep<Self, S::Handle>, scheduler: &mut S) -> bool {
        if sweep.progress < sweep.max_index {
            sweep.progress += 1;
        }

        if sweep.progress < sweep.max_index {
            sweep.step_timer = sweep.schedule(scheduler, STEP_DELAY_MS, TimerKind::Step);
        }

        true
    }

    fn is_flipped<H>(sweep: &Sweep<Self, H>, axis_index: u16) -> bool {
        sweep.progress >= 0 && i32::from(axis_index) <= sweep.progress
    }
}
