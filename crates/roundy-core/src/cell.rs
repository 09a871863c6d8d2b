//! The single cell primitive both surfaces are built from.

use embedded_graphics_core::{
    Pixel, draw_target::DrawTarget, geometry::Point, primitives::Rectangle,
};

use crate::palette::Palette;

/// Interior diagonal of a square cell, skipping its one-pixel border.
///
/// Runs `\` (top-left to bottom-right) when not flipped and `/` (top-right
/// to bottom-left) when flipped.
pub fn diagonal_points(cell: Rectangle, flipped: bool) -> impl Iterator<Item = Point> {
    let size = cell.size.width.min(cell.size.height) as i32;
    let origin = cell.top_left;

    (1..size - 1).map(move |idx| {
        let x = if flipped { size - 1 - idx } else { idx };
        origin + Point::new(x, idx)
    })
}

/// Fills `cell` and strokes its diagonal with the dim or bright color.
pub fn draw_cell<D>(
    target: &mut D,
    cell: Rectangle,
    flipped: bool,
    fill: D::Color,
    palette: &Palette<D::Color>,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    target.fill_solid(&cell, fill)?;

    let stroke = palette.stroke(flipped);
    target.draw_iter(diagonal_points(cell, flipped).map(|point| Pixel(point, stroke)))
}
