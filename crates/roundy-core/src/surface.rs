//! Pieces shared by the background and digit surfaces.

use core::fmt;

use embedded_graphics_core::{geometry::Size, primitives::Rectangle};

use crate::geometry::Grid;

/// Surface creation errors. A failed creation leaves nothing allocated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SurfaceError {
    /// The frame cannot hold the whole cell grid.
    FrameTooSmall { needed: Size, available: Size },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameTooSmall { needed, available } => write!(
                f,
                "frame {}x{} cannot hold a {}x{} grid",
                available.width, available.height, needed.width, needed.height
            ),
        }
    }
}

pub(crate) fn check_frame(frame: Rectangle, grid: Grid) -> Result<(), SurfaceError> {
    let needed = grid.pixel_size();
    if needed.width > frame.size.width || needed.height > frame.size.height {
        return Err(SurfaceError::FrameTooSmall {
            needed,
            available: frame.size,
        });
    }

    Ok(())
}
