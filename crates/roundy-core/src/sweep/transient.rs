use core::fmt::Debug;

use log::trace;

use super::{ActiveBand, DECAY_DELAY_MS, STEP_DELAY_MS, Sweep, SweepMode};
use crate::scheduler::{Scheduler, TimerKind};

/// Background variant: one bright band travels across the grid and fades
/// behind itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransientBand;

impl SweepMode for TransientBand {
    const START_PROGRESS: i32 = 0;
    const LABEL: &'static str = "background";

    fn step<S: Scheduler>(sweep: &mut Sweep<Self, S::Handle>, scheduler: &mut S) -> bool {
        if sweep.progress > sweep.max_index {
            if sweep.decay_timer.is_some() {
                // the pending decay turns the last band off itself
                trace!("background sweep on {:?}: finished", sweep.owner);
                return false;
            }
            sweep.active = None;
            return true;
        }

        sweep.active = Some(ActiveBand {
            index: sweep.progress as u16,
            bright: true,
        });
        sweep.progress += 1;

        if let Some(handle) = sweep.decay_timer.take() {
            scheduler.cancel(handle);
        }
        sweep.decay_timer = sweep.schedule(scheduler, DECAY_DELAY_MS, TimerKind::Decay);

        if sweep.progress <= sweep.max_index {
            sweep.step_timer = sweep.schedule(scheduler, STEP_DELAY_MS, TimerKind::Step);
        }

        true
    }

    fn decay<H: Copy + Eq + Debug>(sweep: &mut Sweep<Self, H>) -> bool {
        sweep.active = None;
        true
    }

    fn is_flipped<H>(sweep: &Sweep<Self, H>, axis_index: u16) -> bool {
        matches!(
            sweep.active,
            Some(ActiveBand { index, bright: true }) if index == axis_index
        )
    }
}
