//! Ambient background: every grid cell, with one transient band sweeping
//! across.

use core::fmt::Debug;

use embedded_graphics_core::{draw_target::DrawTarget, primitives::Rectangle};
use log::debug;

use crate::{
    cell,
    direction::Direction,
    geometry::Grid,
    palette::Palette,
    scheduler::{Fired, Scheduler, SurfaceId},
    surface::{self, SurfaceError},
    sweep::{Sweep, TransientBand},
};

#[derive(Debug)]
pub struct BackgroundSurface<H> {
    id: SurfaceId,
    frame: Rectangle,
    sweep: Sweep<TransientBand, H>,
    pending_redraw: bool,
}

impl<H> BackgroundSurface<H>
where
    H: Copy + Eq + Debug,
{
    pub fn create(id: SurfaceId, frame: Rectangle, grid: Grid) -> Result<Self, SurfaceError> {
        surface::check_frame(frame, grid)?;

        debug!("background {:?}: created at {:?}", id, frame.top_left);
        Ok(Self {
            id,
            frame,
            sweep: Sweep::new(id, grid),
            pending_redraw: true,
        })
    }

    /// Cancels outstanding timers, then releases the surface.
    pub fn destroy<S>(mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.sweep.cancel(scheduler);
        debug!("background {:?}: destroyed", self.id);
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn sweep(&self) -> &Sweep<TransientBand, H> {
        &self.sweep
    }

    pub fn start_sweep<S>(&mut self, direction: Direction, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.sweep.start(direction, scheduler);
        self.mark_dirty();
    }

    /// Feeds a fired timer to the sweep. Returns whether it asked for a
    /// repaint.
    pub fn on_timer<S>(&mut self, fired: Fired<H>, scheduler: &mut S) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        let changed = self.sweep.on_timer(fired, scheduler);
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub fn mark_dirty(&mut self) {
        self.pending_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.pending_redraw
    }

    /// Returns and clears the pending repaint request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.pending_redraw)
    }

    /// Fills the frame, then paints every cell: flipped and bright on the
    /// active band, dim elsewhere.
    pub fn render<D>(&self, target: &mut D, palette: &Palette<D::Color>) -> Result<(), D::Error>
    where
        D: DrawTarget,
    {
        target.fill_solid(&self.frame, palette.background_fill)?;

        let grid = self.sweep.grid();
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let flipped = self.sweep.is_cell_flipped(col, row);
                let mut frame = grid.cell_frame(col, row);
                frame.top_left += self.frame.top_left;
                cell::draw_cell(target, frame, flipped, palette.background_fill, palette)?;
            }
        }

        Ok(())
    }
}
