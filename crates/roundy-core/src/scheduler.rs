//! One-shot timer abstraction and a deterministic virtual-time queue.
//!
//! Surfaces never hold closures. They schedule a [`TimerTarget`] naming
//! themselves and the callback kind, keep the returned handle, and later
//! receive a [`Fired`] from the host loop. A fired timer whose handle no
//! longer matches what the surface holds belongs to a canceled or replaced
//! run and is dropped.

use core::fmt::Debug;

use heapless::Vec;

/// Identifies a surface within one screen.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SurfaceId(pub u8);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerKind {
    /// Advances the sweep front.
    Step,
    /// Turns a transient highlight back off.
    Decay,
}

/// What a timer should invoke when it fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerTarget {
    pub surface: SurfaceId,
    pub kind: TimerKind,
}

/// A timer delivered back by the host loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fired<H> {
    pub handle: H,
    pub target: TimerTarget,
}

/// Host primitive for "call me back after N ms".
pub trait Scheduler {
    type Handle: Copy + Eq + Debug;

    /// Registers a one-shot timer.
    ///
    /// Returns `None` when the host cannot take another timer; callers then
    /// simply do not get the callback.
    fn schedule(&mut self, delay_ms: u32, target: TimerTarget) -> Option<Self::Handle>;

    /// Cancels a pending timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimerHandle(u32);

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    handle: TimerHandle,
    seq: u64,
    due_ms: u64,
    target: TimerTarget,
}

/// Bounded timer queue over virtual milliseconds.
///
/// Timers due at the same instant fire in the order they were scheduled.
#[derive(Debug)]
pub struct VirtualScheduler<const N: usize> {
    now_ms: u64,
    next_handle: u32,
    next_seq: u64,
    pending: Vec<PendingTimer, N>,
}

impl<const N: usize> Default for VirtualScheduler<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> VirtualScheduler<N> {
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_handle: 1,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|timer| timer.handle == handle)
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|timer| timer.due_ms).min()
    }

    /// Moves virtual time to `now_ms` (never backwards) and pops the earliest
    /// timer due by then.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Fired<TimerHandle>> {
        self.now_ms = self.now_ms.max(now_ms);

        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= self.now_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))?;

        let timer = self.pending.swap_remove(index);
        Some(Fired {
            handle: timer.handle,
            target: timer.target,
        })
    }

    /// Jumps virtual time to the earliest pending timer and pops it.
    pub fn advance_to_next(&mut self) -> Option<Fired<TimerHandle>> {
        let due = self.next_due()?;
        self.pop_due(due)
    }
}

impl<const N: usize> Scheduler for VirtualScheduler<N> {
    type Handle = TimerHandle;

    fn schedule(&mut self, delay_ms: u32, target: TimerTarget) -> Option<TimerHandle> {
        let handle = TimerHandle(self.next_handle);
        let timer = PendingTimer {
            handle,
            seq: self.next_seq,
            due_ms: self.now_ms + delay_ms as u64,
            target,
        };

        self.pending.push(timer).ok()?;
        self.next_handle = self.next_handle.wrapping_add(1).max(1);
        self.next_seq += 1;
        Some(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(index) = self.pending.iter().position(|timer| timer.handle == handle) {
            self.pending.swap_remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: TimerTarget = TimerTarget {
        surface: SurfaceId(0),
        kind: TimerKind::Step,
    };
    const DECAY: TimerTarget = TimerTarget {
        surface: SurfaceId(0),
        kind: TimerKind::Decay,
    };

    #[test]
    fn timers_fire_in_due_order() {
        let mut sched = VirtualScheduler::<4>::new();
        let late = sched.schedule(100, STEP).unwrap();
        let early = sched.schedule(40, DECAY).unwrap();

        let first = sched.advance_to_next().unwrap();
        assert_eq!(first.handle, early);
        assert_eq!(first.target, DECAY);
        assert_eq!(sched.now_ms(), 40);

        let second = sched.advance_to_next().unwrap();
        assert_eq!(second.handle, late);
        assert_eq!(sched.now_ms(), 100);
        assert!(sched.advance_to_next().is_none());
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let mut sched = VirtualScheduler::<4>::new();
        let a = sched.schedule(60, DECAY).unwrap();
        let b = sched.schedule(60, STEP).unwrap();
        let c = sched.schedule(60, STEP).unwrap();

        assert_eq!(sched.advance_to_next().unwrap().handle, a);
        assert_eq!(sched.advance_to_next().unwrap().handle, b);
        assert_eq!(sched.advance_to_next().unwrap().handle, c);
    }

    #[test]
    fn pop_due_holds_back_future_timers() {
        let mut sched = VirtualScheduler::<4>::new();
        sched.schedule(120, STEP).unwrap();

        assert!(sched.pop_due(119).is_none());
        assert_eq!(sched.now_ms(), 119);
        assert!(sched.pop_due(120).is_some());
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut sched = VirtualScheduler::<4>::new();
        assert!(sched.pop_due(500).is_none());
        assert!(sched.pop_due(10).is_none());
        assert_eq!(sched.now_ms(), 500);

        sched.schedule(5, STEP).unwrap();
        assert_eq!(sched.next_due(), Some(505));
    }

    #[test]
    fn canceled_timer_never_fires() {
        let mut sched = VirtualScheduler::<4>::new();
        let handle = sched.schedule(10, STEP).unwrap();
        assert!(sched.is_pending(handle));

        sched.cancel(handle);
        sched.cancel(handle);

        assert!(!sched.is_pending(handle));
        assert!(sched.is_idle());
        assert!(sched.advance_to_next().is_none());
    }

    #[test]
    fn full_queue_refuses_new_timers() {
        let mut sched = VirtualScheduler::<2>::new();
        assert!(sched.schedule(1, STEP).is_some());
        assert!(sched.schedule(1, STEP).is_some());
        assert!(sched.schedule(1, STEP).is_none());
        assert_eq!(sched.pending_count(), 2);
    }

    #[test]
    fn handles_are_not_reused() {
        let mut sched = VirtualScheduler::<2>::new();
        let first = sched.schedule(1, STEP).unwrap();
        sched.cancel(first);
        let second = sched.schedule(1, STEP).unwrap();
        assert_ne!(first, second);
    }
}
