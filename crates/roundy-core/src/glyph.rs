//! Cell bitmaps for the clock digits and the colon separator.

use crate::geometry::DIGIT_HEIGHT;

pub const GLYPH_ROWS: usize = DIGIT_HEIGHT as usize;
/// Symbol index of the colon separator.
pub const GLYPH_COLON: usize = 10;

/// One glyph as a row-major bit matrix.
///
/// Bit `width - 1` of a row mask is the leftmost cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    width: u8,
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    const fn new(width: u8, rows: [u8; GLYPH_ROWS]) -> Self {
        Self { width, rows }
    }

    pub const fn width(&self) -> u16 {
        self.width as u16
    }

    pub const fn height(&self) -> u16 {
        GLYPH_ROWS as u16
    }

    pub fn is_set(&self, col: u16, row: u16) -> bool {
        if col >= self.width() {
            return false;
        }
        let Some(mask) = self.rows.get(row as usize) else {
            return false;
        };

        mask & (1 << (self.width() - 1 - col)) != 0
    }

    /// Set cells as `(col, row)` offsets from the glyph's top-left cell.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, mask)| **mask != 0)
            .flat_map(move |(row, _)| {
                (0..self.width()).filter_map(move |col| {
                    self.is_set(col, row as u16).then_some((col, row as u16))
                })
            })
    }
}

const GLYPHS: [Glyph; 11] = [
    // 0
    Glyph::new(6, [0x3F, 0x3F, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x3F]),
    // 1
    Glyph::new(6, [0x0C; GLYPH_ROWS]),
    // 2
    Glyph::new(6, [0x3F, 0x3F, 0x03, 0x03, 0x00, 0x00, 0x3F, 0x3F, 0x30, 0x30, 0x3F, 0x3F]),
    // 3
    Glyph::new(6, [0x3F, 0x3F, 0x03, 0x03, 0x00, 0x00, 0x3F, 0x3F, 0x03, 0x03, 0x3F, 0x3F]),
    // 4
    Glyph::new(6, [0x33, 0x33, 0x33, 0x33, 0x3F, 0x3F, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03]),
    // 5
    Glyph::new(6, [0x3F, 0x3F, 0x30, 0x30, 0x00, 0x00, 0x3F, 0x3F, 0x03, 0x03, 0x3F, 0x3F]),
    // 6
    Glyph::new(6, [0x3F, 0x3F, 0x30, 0x30, 0x00, 0x00, 0x3F, 0x3F, 0x33, 0x33, 0x3F, 0x3F]),
    // 7
    Glyph::new(6, [0x3F, 0x3F, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03]),
    // 8
    Glyph::new(6, [0x3F, 0x3F, 0x33, 0x33, 0x00, 0x00, 0x3F, 0x3F, 0x33, 0x33, 0x3F, 0x3F]),
    // 9
    Glyph::new(6, [0x3F, 0x3F, 0x33, 0x33, 0x00, 0x00, 0x3F, 0x3F, 0x03, 0x03, 0x3F, 0x3F]),
    // :
    Glyph::new(2, [0x00, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x00]),
];

/// Looks up the glyph for a digit (0..=9) or [`GLYPH_COLON`].
pub fn glyph_for(symbol: usize) -> Option<&'static Glyph> {
    GLYPHS.get(symbol)
}

/// Glyph for a stored digit value; blanks (-1) and out-of-range values have
/// none.
pub fn digit_glyph(digit: i8) -> Option<&'static Glyph> {
    if !(0..=9).contains(&digit) {
        return None;
    }
    glyph_for(digit as usize)
}
