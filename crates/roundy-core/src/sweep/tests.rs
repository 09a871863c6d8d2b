use proptest::prelude::*;

use super::*;
use crate::scheduler::{TimerHandle, VirtualScheduler};

type Sched = VirtualScheduler<8>;

const OWNER: SurfaceId = SurfaceId(7);

fn grid() -> Grid {
    // 4 columns, 3 rows
    Grid::new(4, 3, 5)
}

/// Fires the next timer into `sweep`; returns the firing time.
fn fire_next<M: SweepMode>(sweep: &mut Sweep<M, TimerHandle>, sched: &mut Sched) -> Option<u64> {
    let fired = sched.advance_to_next()?;
    sweep.on_timer(fired, sched);
    Some(sched.now_ms())
}

fn bright_indices(sweep: &Sweep<TransientBand, TimerHandle>) -> usize {
    (0..=sweep.max_index() as u16)
        .filter(|i| sweep.is_index_flipped(*i))
        .count()
}

#[test]
fn new_sweep_is_idle_top_to_bottom() {
    let sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    assert_eq!(sweep.direction(), Direction::TopToBottom);
    assert_eq!(sweep.max_index(), 2);
    assert_eq!(sweep.phase(), SweepPhase::Idle);
    assert_eq!(sweep.active(), None);
}

#[test]
fn start_arms_only_the_initial_step() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());

    sweep.start(Direction::LeftToRight, &mut sched);

    assert_eq!(sweep.max_index(), 3);
    assert_eq!(sweep.progress(), 0);
    assert_eq!(sweep.phase(), SweepPhase::Stepping);
    assert_eq!(sched.pending_count(), 1);
    assert_eq!(sched.next_due(), Some(u64::from(INITIAL_DELAY_MS)));
}

#[test]
fn transient_band_travels_and_fades() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::TopToBottom, &mut sched);

    assert_eq!(fire_next(&mut sweep, &mut sched), Some(120));
    assert_eq!(
        sweep.active(),
        Some(ActiveBand {
            index: 0,
            bright: true
        })
    );
    assert!(sweep.is_cell_flipped(3, 0));
    assert!(!sweep.is_cell_flipped(3, 1));

    // decay for band 0 fires before the step to band 1
    assert_eq!(fire_next(&mut sweep, &mut sched), Some(180));
    assert_eq!(sweep.active(), None);
    assert_eq!(fire_next(&mut sweep, &mut sched), Some(180));
    assert!(sweep.is_cell_flipped(0, 1));

    fire_next(&mut sweep, &mut sched);
    fire_next(&mut sweep, &mut sched);
    assert!(sweep.is_cell_flipped(0, 2));
    assert_eq!(sweep.progress(), 3);
    assert_eq!(sweep.phase(), SweepPhase::Decaying);

    assert_eq!(fire_next(&mut sweep, &mut sched), Some(300));
    assert_eq!(sweep.active(), None);
    assert_eq!(sweep.phase(), SweepPhase::Idle);
    assert!(sched.is_idle());
}

#[test]
fn transient_run_takes_max_plus_two_ticks() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::RightToLeft, &mut sched);

    let mut ticks = Vec::new();
    while let Some(at) = fire_next(&mut sweep, &mut sched) {
        if ticks.last() != Some(&at) {
            ticks.push(at);
        }
    }

    assert_eq!(ticks.len() as i32, sweep.max_index() + 2);
    assert_eq!(ticks, vec![120, 180, 240, 300, 360]);
}

#[test]
fn reversed_band_starts_at_far_edge() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::BottomToTop, &mut sched);
    fire_next(&mut sweep, &mut sched);

    assert!(sweep.is_cell_flipped(1, 2));
    assert!(!sweep.is_cell_flipped(1, 0));
}

#[test]
fn stale_timer_after_restart_is_ignored() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::TopToBottom, &mut sched);
    fire_next(&mut sweep, &mut sched);

    let stale_decay = Fired {
        handle: sweep.decay_timer.unwrap(),
        target: TimerTarget {
            surface: OWNER,
            kind: TimerKind::Decay,
        },
    };
    let stale_step = Fired {
        handle: sweep.step_timer.unwrap(),
        target: TimerTarget {
            surface: OWNER,
            kind: TimerKind::Step,
        },
    };

    sweep.start(Direction::LeftToRight, &mut sched);
    assert_eq!(sched.pending_count(), 1);
    assert_eq!(sweep.active(), None);

    assert!(!sweep.on_timer(stale_decay, &mut sched));
    assert!(!sweep.on_timer(stale_step, &mut sched));
    assert_eq!(sweep.progress(), 0);
    assert_eq!(sweep.active(), None);
    assert_eq!(sweep.phase(), SweepPhase::Stepping);
}

#[test]
fn restart_during_final_decay_cannot_leave_band_stuck() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::TopToBottom, &mut sched);

    while sweep.step_timer.is_some() {
        fire_next(&mut sweep, &mut sched);
    }
    assert_eq!(sweep.phase(), SweepPhase::Decaying);
    assert!(sweep.active().is_some());

    sweep.start(Direction::TopToBottom, &mut sched);
    assert_eq!(sweep.active(), None);
    assert_eq!(bright_indices(&sweep), 0);

    while fire_next(&mut sweep, &mut sched).is_some() {}
    assert_eq!(sweep.active(), None);
    assert_eq!(sweep.phase(), SweepPhase::Idle);
}

#[test]
fn step_past_the_end_defers_to_pending_decay() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.progress = sweep.max_index + 1;
    sweep.active = Some(ActiveBand {
        index: 2,
        bright: true,
    });
    sweep.decay_timer = sweep.schedule(&mut sched, DECAY_DELAY_MS, TimerKind::Decay);
    sweep.step_timer = sweep.schedule(&mut sched, DECAY_DELAY_MS, TimerKind::Step);

    // decay was scheduled first, so pop the step explicitly
    let step = Fired {
        handle: sweep.step_timer.unwrap(),
        target: TimerTarget {
            surface: OWNER,
            kind: TimerKind::Step,
        },
    };
    sched.cancel(step.handle);
    assert!(!sweep.on_timer(step, &mut sched));
    assert!(sweep.active().is_some());

    fire_next(&mut sweep, &mut sched);
    assert_eq!(sweep.active(), None);
}

#[test]
fn step_past_the_end_without_decay_clears_band() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.progress = sweep.max_index + 1;
    sweep.active = Some(ActiveBand {
        index: 2,
        bright: true,
    });
    sweep.step_timer = sweep.schedule(&mut sched, STEP_DELAY_MS, TimerKind::Step);

    assert_eq!(fire_next(&mut sweep, &mut sched), Some(60));
    assert_eq!(sweep.active(), None);
    assert!(sched.is_idle());
}

#[test]
fn timers_for_other_surfaces_are_ignored() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<CumulativeReveal, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::TopToBottom, &mut sched);

    let foreign = Fired {
        handle: sweep.step_timer.unwrap(),
        target: TimerTarget {
            surface: SurfaceId(1),
            kind: TimerKind::Step,
        },
    };
    assert!(!sweep.on_timer(foreign, &mut sched));
    assert_eq!(sweep.progress(), -1);
}

#[test]
fn exhausted_scheduler_halts_without_fault() {
    let mut sched = VirtualScheduler::<1>::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::TopToBottom, &mut sched);

    let fired = sched.advance_to_next().unwrap();
    assert!(sweep.on_timer(fired, &mut sched));
    // the decay took the only slot; the next step could not be armed
    assert!(sweep.step_timer.is_none());
    assert_eq!(sweep.phase(), SweepPhase::Decaying);

    let fired = sched.advance_to_next().unwrap();
    sweep.on_timer(fired, &mut sched);
    assert_eq!(sweep.phase(), SweepPhase::Idle);
    assert_eq!(sweep.progress(), 1);
    assert_eq!(sweep.active(), None);
}

#[test]
fn cumulative_reveal_keeps_swept_bands_flipped() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<CumulativeReveal, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::TopToBottom, &mut sched);

    assert_eq!(sweep.progress(), -1);
    assert!(!sweep.is_cell_flipped(0, 0));

    assert_eq!(fire_next(&mut sweep, &mut sched), Some(120));
    assert!(sweep.is_cell_flipped(0, 0));
    assert!(!sweep.is_cell_flipped(0, 1));

    assert_eq!(fire_next(&mut sweep, &mut sched), Some(180));
    assert!(sweep.is_cell_flipped(0, 0));
    assert!(sweep.is_cell_flipped(0, 1));

    assert_eq!(fire_next(&mut sweep, &mut sched), Some(240));
    assert_eq!(sweep.progress(), sweep.max_index());
    assert_eq!(sweep.phase(), SweepPhase::Idle);
    assert!(sched.is_idle());
    for row in 0..3 {
        assert!(sweep.is_cell_flipped(2, row));
    }
}

#[test]
fn cumulative_restart_unflips_everything() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<CumulativeReveal, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::LeftToRight, &mut sched);
    while fire_next(&mut sweep, &mut sched).is_some() {}
    assert!(sweep.is_cell_flipped(3, 0));

    sweep.start(Direction::RightToLeft, &mut sched);
    assert!(!sweep.is_cell_flipped(3, 0));
    assert!(!sweep.is_cell_flipped(0, 0));

    fire_next(&mut sweep, &mut sched);
    assert!(sweep.is_cell_flipped(3, 0));
    assert!(!sweep.is_cell_flipped(2, 0));
}

#[test]
fn cancel_clears_every_timer() {
    let mut sched = Sched::new();
    let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, grid());
    sweep.start(Direction::TopToBottom, &mut sched);
    fire_next(&mut sweep, &mut sched);
    assert_eq!(sched.pending_count(), 2);

    sweep.cancel(&mut sched);
    assert!(sched.is_idle());
    assert_eq!(sweep.phase(), SweepPhase::Idle);
}

proptest! {
    #[test]
    fn transient_never_lights_two_bands(cols in 1u16..24, rows in 1u16..24, dir in 0u8..4) {
        let mut sched = Sched::new();
        let direction = Direction::from_index(dir).unwrap();
        let mut sweep = Sweep::<TransientBand, TimerHandle>::new(OWNER, Grid::new(cols, rows, 4));
        sweep.start(direction, &mut sched);

        let mut lit = Vec::new();
        while let Some(fired) = sched.advance_to_next() {
            let was_active = sweep.active();
            sweep.on_timer(fired, &mut sched);
            prop_assert!(bright_indices(&sweep) <= 1);

            if fired.target.kind == TimerKind::Decay {
                let band = was_active.unwrap().index;
                prop_assert!(!sweep.is_index_flipped(band));
            }
            if let Some(band) = sweep.active() {
                lit.push(band.index);
            }
        }

        let expected: Vec<u16> = (0..=sweep.max_index() as u16).collect();
        lit.dedup();
        prop_assert_eq!(lit, expected);
        prop_assert_eq!(sweep.active(), None);
    }

    #[test]
    fn cumulative_progress_is_monotonic(cols in 1u16..24, rows in 1u16..24, dir in 0u8..4) {
        let mut sched = Sched::new();
        let direction = Direction::from_index(dir).unwrap();
        let grid = Grid::new(cols, rows, 4);
        let mut sweep = Sweep::<CumulativeReveal, TimerHandle>::new(OWNER, grid);
        sweep.start(direction, &mut sched);

        let mut last_progress = sweep.progress();
        let mut last_flipped = 0usize;
        while fire_next(&mut sweep, &mut sched).is_some() {
            prop_assert!(sweep.progress() >= last_progress);
            let flipped = (0..cols)
                .flat_map(|c| (0..rows).map(move |r| (c, r)))
                .filter(|(c, r)| sweep.is_cell_flipped(*c, *r))
                .count();
            prop_assert!(flipped > last_flipped);
            last_progress = sweep.progress();
            last_flipped = flipped;
        }

        prop_assert_eq!(sweep.progress(), sweep.max_index());
        prop_assert_eq!(last_flipped, usize::from(cols) * usize::from(rows));
    }
}
