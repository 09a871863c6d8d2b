//! Cell grid geometry and the clock digit layout.

use embedded_graphics_core::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::direction::{Axis, Direction};

/// Cell edge in pixels on the watch panel.
pub const CELL_SIZE: u16 = 5;
pub const GRID_COLS: u16 = 36;
pub const GRID_ROWS: u16 = 36;

pub const DIGIT_COUNT: usize = 4;
pub const DIGIT_WIDTH: u16 = 6;
pub const DIGIT_HEIGHT: u16 = 12;
pub const COLON_WIDTH: u16 = 2;
pub const DIGIT_GAP: u16 = 1;
pub const DIGIT_START_COL: u16 = 3;
pub const DIGIT_START_ROW: u16 = 12;

/// A fixed grid of square cells anchored at the surface origin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
    pub cell_size: u16,
}

impl Grid {
    /// Grid covering the 180x180 round panel.
    pub const WATCH: Self = Self::new(GRID_COLS, GRID_ROWS, CELL_SIZE);

    pub const fn new(cols: u16, rows: u16, cell_size: u16) -> Self {
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    /// Pixel extent of the whole grid.
    pub const fn pixel_size(&self) -> Size {
        Size::new(
            self.cols as u32 * self.cell_size as u32,
            self.rows as u32 * self.cell_size as u32,
        )
    }

    pub const fn contains(&self, col: u16, row: u16) -> bool {
        col < self.cols && row < self.rows
    }

    /// Top-left pixel of a cell, relative to the grid origin.
    pub const fn cell_origin(&self, col: u16, row: u16) -> Point {
        Point::new(
            col as i32 * self.cell_size as i32,
            row as i32 * self.cell_size as i32,
        )
    }

    pub const fn cell_frame(&self, col: u16, row: u16) -> Rectangle {
        Rectangle::new(
            self.cell_origin(col, row),
            Size::new(self.cell_size as u32, self.cell_size as u32),
        )
    }

    /// Number of cells along the axis a direction walks.
    pub const fn axis_len(&self, direction: Direction) -> u16 {
        match direction.axis() {
            Axis::Rows => self.rows,
            Axis::Columns => self.cols,
        }
    }

    /// Last index a sweep in `direction` reaches.
    pub const fn max_index(&self, direction: Direction) -> u16 {
        self.axis_len(direction).saturating_sub(1)
    }

    /// Position of a cell along the sweep axis, counted from where the
    /// sweep starts.
    pub const fn axis_index(&self, direction: Direction, col: u16, row: u16) -> u16 {
        let position = match direction.axis() {
            Axis::Rows => row,
            Axis::Columns => col,
        };

        if direction.reversed() {
            self.max_index(direction).saturating_sub(position)
        } else {
            position
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::WATCH
    }
}

/// Where the clock glyphs sit on the grid, in cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitLayout {
    pub start_col: u16,
    pub start_row: u16,
    pub gap: u16,
    pub digit_width: u16,
    pub colon_width: u16,
}

impl DigitLayout {
    pub const WATCH: Self = Self {
        start_col: DIGIT_START_COL,
        start_row: DIGIT_START_ROW,
        gap: DIGIT_GAP,
        digit_width: DIGIT_WIDTH,
        colon_width: COLON_WIDTH,
    };

    /// Starting columns of `[digit 1, digit 2, colon, digit 3, digit 4]`.
    pub const fn slot_columns(&self) -> [u16; 5] {
        let d1 = self.start_col;
        let d2 = d1 + self.digit_width + self.gap;
        let colon = d2 + self.digit_width + self.gap;
        let d3 = colon + self.colon_width + self.gap;
        let d4 = d3 + self.digit_width + self.gap;
        [d1, d2, colon, d3, d4]
    }

    /// Total width of the row of glyphs in cells.
    pub const fn total_width(&self) -> u16 {
        self.digit_width * DIGIT_COUNT as u16 + self.colon_width + self.gap * 4
    }
}

impl Default for DigitLayout {
    fn default() -> Self {
        Self::WATCH
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn watch_grid_fills_the_panel() {
        assert_eq!(Grid::WATCH.pixel_size(), Size::new(180, 180));
    }

    #[test]
    fn cell_frame_is_offset_by_cell_size() {
        let frame = Grid::WATCH.cell_frame(2, 3);
        assert_eq!(frame.top_left, Point::new(10, 15));
        assert_eq!(frame.size, Size::new(5, 5));
    }

    #[test]
    fn axis_index_follows_direction() {
        let grid = Grid::new(10, 4, 3);

        assert_eq!(grid.axis_index(Direction::TopToBottom, 7, 1), 1);
        assert_eq!(grid.axis_index(Direction::BottomToTop, 7, 1), 2);
        assert_eq!(grid.axis_index(Direction::LeftToRight, 7, 1), 7);
        assert_eq!(grid.axis_index(Direction::RightToLeft, 7, 1), 2);
    }

    #[test]
    fn digit_slots_fit_inside_the_watch_grid() {
        let layout = DigitLayout::WATCH;
        assert_eq!(layout.slot_columns(), [3, 10, 17, 20, 27]);
        assert_eq!(layout.total_width(), 30);
        assert!(layout.start_col + layout.total_width() <= GRID_COLS);
        assert!(layout.start_row + DIGIT_HEIGHT <= GRID_ROWS);
    }

    proptest! {
        #[test]
        fn max_index_tracks_the_walked_axis(cols in 1u16..200, rows in 1u16..200, dir in 0u8..4) {
            let grid = Grid::new(cols, rows, 4);
            let direction = Direction::from_index(dir).unwrap();
            let expected = if direction.is_vertical() { rows - 1 } else { cols - 1 };
            prop_assert_eq!(grid.max_index(direction), expected);
        }

        #[test]
        fn axis_index_stays_within_max(cols in 1u16..64, rows in 1u16..64, dir in 0u8..4, c in 0u16..64, r in 0u16..64) {
            prop_assume!(c < cols && r < rows);
            let grid = Grid::new(cols, rows, 4);
            let direction = Direction::from_index(dir).unwrap();
            prop_assert!(grid.axis_index(direction, c, r) <= grid.max_index(direction));
        }
    }
}
