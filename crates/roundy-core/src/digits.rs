//! Clock digits: four digit glyphs and a colon, revealed by a cumulative
//! sweep.

use core::fmt::Debug;

use embedded_graphics_core::{draw_target::DrawTarget, primitives::Rectangle};
use log::{debug, trace, warn};

use crate::{
    cell,
    clock::WallClock,
    direction::Direction,
    geometry::{DIGIT_COUNT, DigitLayout, Grid},
    glyph::{self, GLYPH_COLON, GLYPH_ROWS, Glyph},
    palette::Palette,
    scheduler::{Fired, Scheduler, SurfaceId},
    surface::{self, SurfaceError},
    sweep::{CumulativeReveal, Sweep},
};

/// Digit value for an empty slot.
pub const BLANK: i8 = -1;

/// Splits a time into the four displayed digit values.
///
/// In 12-hour mode the hour wraps to 1..=12 and a leading zero becomes
/// [`BLANK`].
pub fn time_digits(hour: u8, minute: u8, use_24h: bool) -> [i8; DIGIT_COUNT] {
    let mut hour = hour;
    if !use_24h {
        hour %= 12;
        if hour == 0 {
            hour = 12;
        }
    }

    let mut digits = [
        (hour / 10) as i8,
        (hour % 10) as i8,
        (minute / 10) as i8,
        (minute % 10) as i8,
    ];
    if !use_24h && hour < 10 {
        digits[0] = BLANK;
    }

    digits
}

#[derive(Debug)]
pub struct DigitSurface<H> {
    id: SurfaceId,
    frame: Rectangle,
    layout: DigitLayout,
    digits: [i8; DIGIT_COUNT],
    use_24h: bool,
    sweep: Sweep<CumulativeReveal, H>,
    pending_redraw: bool,
}

impl<H> DigitSurface<H>
where
    H: Copy + Eq + Debug,
{
    /// Creates a surface with every digit blank.
    pub fn create(
        id: SurfaceId,
        frame: Rectangle,
        grid: Grid,
        layout: DigitLayout,
        use_24h: bool,
    ) -> Result<Self, SurfaceError> {
        surface::check_frame(frame, grid)?;

        let right = layout.start_col + layout.total_width();
        let bottom = layout.start_row + GLYPH_ROWS as u16;
        if right > grid.cols || bottom > grid.rows {
            warn!(
                "digits {:?}: layout reaches {}x{} on a {}x{} grid, outer cells are clipped",
                id, right, bottom, grid.cols, grid.rows
            );
        }

        debug!("digits {:?}: created at {:?}", id, frame.top_left);
        Ok(Self {
            id,
            frame,
            layout,
            digits: [BLANK; DIGIT_COUNT],
            use_24h,
            sweep: Sweep::new(id, grid),
            pending_redraw: true,
        })
    }

    /// Cancels the outstanding step timer, then releases the surface.
    pub fn destroy<S>(mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.sweep.cancel(scheduler);
        debug!("digits {:?}: destroyed", self.id);
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn digits(&self) -> [i8; DIGIT_COUNT] {
        self.digits
    }

    pub fn uses_24h(&self) -> bool {
        self.use_24h
    }

    pub fn sweep(&self) -> &Sweep<CumulativeReveal, H> {
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

    /// Updates the shown time. Requests a redraw only when a digit or the
    /// display mode actually changed; returns whether it did.
    pub fn set_time(&mut self, hour: u8, minute: u8, use_24h: bool) -> bool {
        let digits = time_digits(hour, minute, use_24h);
        let changed = digits != self.digits || use_24h != self.use_24h;

        self.digits = digits;
        self.use_24h = use_24h;

        if changed {
            trace!("digits {:?}: now {:?}", self.id, digits);
            self.mark_dirty();
        }
        changed
    }

    /// Pulls the current time from `clock`. Does nothing when the clock has
    /// no time to offer.
    pub fn refresh_time<C: WallClock + ?Sized>(&mut self, clock: &C) -> bool {
        let Some(now) = clock.local_time() else {
            return false;
        };
        self.set_time(now.hour, now.minute, clock.is_24h_style())
    }

    pub fn force_redraw(&mut self) {
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.pending_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.pending_redraw
    }

    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.pending_redraw)
    }

    /// Draws digit 1, digit 2, colon, digit 3, digit 4. Blank or invalid
    /// digits leave their slot empty.
    pub fn render<D>(&self, target: &mut D, palette: &Palette<D::Color>) -> Result<(), D::Error>
    where
        D: DrawTarget,
    {
        let [d1, d2, colon, d3, d4] = self.layout.slot_columns();
        let row = self.layout.start_row;

        self.draw_glyph(target, glyph::digit_glyph(self.digits[0]), d1, row, palette)?;
        self.draw_glyph(target, glyph::digit_glyph(self.digits[1]), d2, row, palette)?;
        self.draw_glyph(target, glyph::glyph_for(GLYPH_COLON), colon, row, palette)?;
        self.draw_glyph(target, glyph::digit_glyph(self.digits[2]), d3, row, palette)?;
        self.draw_glyph(target, glyph::digit_glyph(self.digits[3]), d4, row, palette)
    }

    fn draw_glyph<D>(
        &self,
        target: &mut D,
        glyph: Option<&Glyph>,
        cell_col: u16,
        cell_row: u16,
        palette: &Palette<D::Color>,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget,
    {
        let Some(glyph) = glyph else {
            return Ok(());
        };

        let grid = self.sweep.grid();
        for (col, row) in glyph.cells() {
            let (col, row) = (cell_col + col, cell_row + row);
            if !grid.contains(col, row) {
                continue;
            }

            let flipped = self.sweep.is_cell_flipped(col, row);
            let mut frame = grid.cell_frame(col, row);
            frame.top_left += self.frame.top_left;
            cell::draw_cell(target, frame, flipped, palette.digit_fill, palette)?;
        }

        Ok(())
    }
}
