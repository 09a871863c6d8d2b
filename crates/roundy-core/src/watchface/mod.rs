//! The watchface screen: background and digits stacked in one frame.

use core::fmt::Debug;

use embedded_graphics_core::{draw_target::DrawTarget, pixelcolor::PixelColor, primitives::Rectangle};
use log::{debug, trace};

use crate::{
    background::BackgroundSurface,
    clock::WallClock,
    digits::DigitSurface,
    direction::{Direction, DirectionSource},
    geometry::{DigitLayout, Grid},
    palette::Palette,
    scheduler::{Fired, Scheduler, SurfaceId},
    surface::SurfaceError,
};

pub const BACKGROUND_ID: SurfaceId = SurfaceId(0);
pub const DIGITS_ID: SurfaceId = SurfaceId(1);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

impl TickResult {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::RenderRequested
        } else {
            Self::NoRender
        }
    }
}

#[derive(Debug)]
pub struct Watchface<H, C> {
    background: BackgroundSurface<H>,
    digits: DigitSurface<H>,
    palette: Palette<C>,
}

impl<H, C> Watchface<H, C>
where
    H: Copy + Eq + Debug,
    C: PixelColor,
{
    /// Creates both surfaces over the default watch grid.
    pub fn load(frame: Rectangle, palette: Palette<C>, use_24h: bool) -> Result<Self, SurfaceError> {
        Self::load_with(frame, Grid::WATCH, DigitLayout::WATCH, palette, use_24h)
    }

    pub fn load_with(
        frame: Rectangle,
        grid: Grid,
        layout: DigitLayout,
        palette: Palette<C>,
        use_24h: bool,
    ) -> Result<Self, SurfaceError> {
        let background = BackgroundSurface::create(BACKGROUND_ID, frame, grid)?;
        let digits = DigitSurface::create(DIGITS_ID, frame, grid, layout, use_24h)?;

        debug!("watchface: loaded, 24h={}", use_24h);
        Ok(Self {
            background,
            digits,
            palette,
        })
    }

    pub fn background(&self) -> &BackgroundSurface<H> {
        &self.background
    }

    pub fn digits(&self) -> &DigitSurface<H> {
        &self.digits
    }

    pub fn palette(&self) -> &Palette<C> {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette<C>) {
        if palette != self.palette {
            self.palette = palette;
            self.background.mark_dirty();
            self.digits.force_redraw();
        }
    }

    /// Picks one direction and starts both sweeps with it.
    pub fn appear<R, S>(&mut self, source: &mut R, scheduler: &mut S) -> Direction
    where
        R: DirectionSource + ?Sized,
        S: Scheduler<Handle = H>,
    {
        let direction = source.next_direction();
        debug!("watchface: appear, sweeping {}", direction.as_str());

        self.background.start_sweep(direction, scheduler);
        self.digits.start_sweep(direction, scheduler);
        direction
    }

    /// Pulls the current time into the digit surface.
    pub fn tick<W: WallClock + ?Sized>(&mut self, clock: &W) -> TickResult {
        TickResult::from_changed(self.digits.refresh_time(clock))
    }

    /// Routes a fired timer to the surface that scheduled it.
    pub fn dispatch<S>(&mut self, fired: Fired<H>, scheduler: &mut S) -> TickResult
    where
        S: Scheduler<Handle = H>,
    {
        let changed = match fired.target.surface {
            BACKGROUND_ID => self.background.on_timer(fired, scheduler),
            DIGITS_ID => self.digits.on_timer(fired, scheduler),
            other => {
                trace!("watchface: dropping timer for unknown {:?}", other);
                false
            }
        };

        TickResult::from_changed(changed)
    }

    /// Whether either sweep still has a timer outstanding.
    pub fn is_animating(&self) -> bool {
        self.background.sweep().is_running() || self.digits.sweep().is_running()
    }

    pub fn needs_redraw(&self) -> bool {
        self.background.needs_redraw() || self.digits.needs_redraw()
    }

    /// Returns and clears the pending repaint request of both surfaces.
    pub fn take_redraw(&mut self) -> bool {
        let background = self.background.take_redraw();
        let digits = self.digits.take_redraw();
        background || digits
    }

    /// Background first, digits on top.
    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.background.render(target, &self.palette)?;
        self.digits.render(target, &self.palette)
    }

    /// Destroys both surfaces, canceling their timers.
    pub fn unload<S>(self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.digits.destroy(scheduler);
        self.background.destroy(scheduler);
        debug!("watchface: unloaded");
    }
}
