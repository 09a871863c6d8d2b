//! Sweep state machine shared by the background and digit surfaces.
//!
//! A sweep walks an index along one grid axis. It is driven purely by one-shot
//! timers: a step timer that advances the front and, for the transient
//! variant, a decay timer that turns the highlighted band back off.
//!
//! Phases are derived from the outstanding timers:
//!
//! | phase    | step timer | decay timer |
//! |----------|------------|-------------|
//! | Idle     | none       | none        |
//! | Stepping | pending    | any         |
//! | Decaying | none       | pending     |
//!
//! Transitions:
//!
//! | from      | event                | effect                                   | to                  |
//! |-----------|----------------------|------------------------------------------|---------------------|
//! | any       | `start`              | cancel both timers, reset, arm step      | Stepping            |
//! | Stepping  | step, band left      | light band, re-arm decay, arm next step  | Stepping            |
//! | Stepping  | step, last band      | light band, re-arm decay                 | Decaying            |
//! | Stepping  | step, past the end   | clear band unless a decay is pending     | Idle / Decaying     |
//! | Decaying  | decay                | clear band                               | Idle                |
//! | Stepping  | step, reveal < max   | advance reveal front, arm next step      | Stepping            |
//! | Stepping  | step, reveal at max  | advance reveal front                     | Idle                |
//!
//! The first four rows are [`TransientBand`], the last two
//! [`CumulativeReveal`].

use core::{fmt::Debug, marker::PhantomData};

use log::{debug, trace, warn};

use crate::{
    direction::Direction,
    geometry::Grid,
    scheduler::{Fired, Scheduler, SurfaceId, TimerKind, TimerTarget},
};

mod cumulative;
mod transient;

pub use self::{cumulative::CumulativeReveal, transient::TransientBand};

/// Delay before the first step of a run.
pub const INITIAL_DELAY_MS: u32 = 120;
/// Delay between successive steps.
pub const STEP_DELAY_MS: u32 = 60;
/// How long a transient band stays bright.
pub const DECAY_DELAY_MS: u32 = 60;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SweepPhase {
    Idle,
    Stepping,
    Decaying,
}

/// The currently highlighted row or column of a transient sweep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActiveBand {
    pub index: u16,
    pub bright: bool,
}

/// Per-variant behaviour plugged into [`Sweep`].
pub trait SweepMode: Sized {
    /// Progress value right after `start`.
    const START_PROGRESS: i32;
    const LABEL: &'static str;

    /// Handles a live step timer. Returns whether a redraw is needed.
    fn step<S: Scheduler>(sweep: &mut Sweep<Self, S::Handle>, scheduler: &mut S) -> bool;

    /// Handles a live decay timer. Returns whether a redraw is needed.
    fn decay<H: Copy + Eq + Debug>(sweep: &mut Sweep<Self, H>) -> bool {
        let _ = sweep;
        false
    }

    /// Whether a cell at `axis_index` renders flipped.
    fn is_flipped<H>(sweep: &Sweep<Self, H>, axis_index: u16) -> bool;
}

/// Sweep state owned by exactly one surface.
#[derive(Debug)]
pub struct Sweep<M, H> {
    owner: SurfaceId,
    grid: Grid,
    direction: Direction,
    progress: i32,
    max_index: i32,
    active: Option<ActiveBand>,
    step_timer: Option<H>,
    decay_timer: Option<H>,
    mode: PhantomData<M>,
}

impl<M, H> Sweep<M, H>
where
    M: SweepMode,
    H: Copy + Eq + Debug,
{
    pub fn new(owner: SurfaceId, grid: Grid) -> Self {
        let direction = Direction::default();
        Self {
            owner,
            grid,
            direction,
            progress: M::START_PROGRESS,
            max_index: i32::from(grid.max_index(direction)),
            active: None,
            step_timer: None,
            decay_timer: None,
            mode: PhantomData,
        }
    }

    pub fn owner(&self) -> SurfaceId {
        self.owner
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn max_index(&self) -> i32 {
        self.max_index
    }

    pub fn active(&self) -> Option<ActiveBand> {
        self.active
    }

    pub fn phase(&self) -> SweepPhase {
        match (self.step_timer, self.decay_timer) {
            (Some(_), _) => SweepPhase::Stepping,
            (None, Some(_)) => SweepPhase::Decaying,
            (None, None) => SweepPhase::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() != SweepPhase::Idle
    }

    /// Cancels any run in flight and starts a new one in `direction`.
    ///
    /// The owner repaints right away so the reset state is shown.
    pub fn start<S>(&mut self, direction: Direction, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.cancel(scheduler);

        self.direction = direction;
        self.max_index = i32::from(self.grid.max_index(direction));
        self.progress = M::START_PROGRESS;
        self.active = None;

        debug!(
            "{} sweep on {:?}: start {} over {} bands",
            M::LABEL,
            self.owner,
            direction.as_str(),
            self.max_index + 1
        );

        self.step_timer = self.schedule(scheduler, INITIAL_DELAY_MS, TimerKind::Step);
    }

    /// Cancels every outstanding timer of this sweep.
    pub fn cancel<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(handle) = self.step_timer.take() {
            scheduler.cancel(handle);
        }
        if let Some(handle) = self.decay_timer.take() {
            scheduler.cancel(handle);
        }
    }

    /// Routes a fired timer into the state machine.
    ///
    /// Timers for another surface, or whose handle is no longer the one held
    /// for that kind, are ignored. Returns whether a redraw is needed.
    pub fn on_timer<S>(&mut self, fired: Fired<H>, scheduler: &mut S) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        if fired.target.surface != self.owner {
            trace!(
                "{} sweep on {:?}: ignoring timer for {:?}",
                M::LABEL,
                self.owner,
                fired.target.surface
            );
            return false;
        }

        let slot = match fired.target.kind {
            TimerKind::Step => &mut self.step_timer,
            TimerKind::Decay => &mut self.decay_timer,
        };
        if *slot != Some(fired.handle) {
            trace!(
                "{} sweep on {:?}: stale {:?} timer {:?}",
                M::LABEL,
                self.owner,
                fired.target.kind,
                fired.handle
            );
            return false;
        }
        *slot = None;

        match fired.target.kind {
            TimerKind::Step => M::step(self, scheduler),
            TimerKind::Decay => M::decay(self),
        }
    }

    /// Flip state of a cell under the current direction.
    pub fn is_cell_flipped(&self, col: u16, row: u16) -> bool {
        M::is_flipped(self, self.grid.axis_index(self.direction, col, row))
    }

    pub fn is_index_flipped(&self, axis_index: u16) -> bool {
        M::is_flipped(self, axis_index)
    }

    fn schedule<S>(&self, scheduler: &mut S, delay_ms: u32, kind: TimerKind) -> Option<H>
    where
        S: Scheduler<Handle = H>,
    {
        let target = TimerTarget {
            surface: self.owner,
            kind,
        };
        let handle = scheduler.schedule(delay_ms, target);
        if handle.is_none() {
            warn!(
                "{} sweep on {:?}: no timer available for {:?}, animation halts",
                M::LABEL,
                self.owner,
                kind
            );
        }
        handle
    }
}

#[cfg(test)]
mod tests;
