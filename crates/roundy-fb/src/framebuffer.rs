//! In-memory 1bpp framebuffer.

use core::fmt;

use crate::panel::{self, BUFFER_SIZE, HEIGHT, ROW_BYTES, WIDTH};

/// 1bpp framebuffer for the panel.
///
/// A set bit is an inked (dark) pixel.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("inked", &self.count_on())
            .finish()
    }
}

impl FrameBuffer {
    /// Creates a blank (all clear) framebuffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Returns the underlying framebuffer bytes.
    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Clears the framebuffer to blank (`on = false`) or inked (`on = true`).
    ///
    /// Row padding bits stay clear either way.
    pub fn clear(&mut self, on: bool) {
        if !on {
            self.bytes.fill(0x00);
            return;
        }

        let tail_bits = WIDTH % 8;
        for row in self.bytes.chunks_exact_mut(ROW_BYTES) {
            row.fill(0xFF);
            if tail_bits != 0 {
                row[ROW_BYTES - 1] = 0xFFu8 << (8 - tail_bits);
            }
        }
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when the pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        let Some((byte_index, bit_mask)) = panel::bit_position(x, y) else {
            return false;
        };

        if on {
            self.bytes[byte_index] |= bit_mask;
        } else {
            self.bytes[byte_index] &= !bit_mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        let (byte_index, bit_mask) = panel::bit_position(x, y)?;
        Some((self.bytes[byte_index] & bit_mask) != 0)
    }

    /// Returns the packed bytes of row `y` (0-based).
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= HEIGHT {
            return None;
        }

        let start = y * ROW_BYTES;
        Some(&self.bytes[start..start + ROW_BYTES])
    }

    /// Number of inked pixels.
    pub fn count_on(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    /// Writes the frame as text, one line per pixel row.
    ///
    /// `step` samples every n-th pixel on both axes so a full frame fits a
    /// terminal.
    pub fn write_text<W: fmt::Write>(
        &self,
        out: &mut W,
        step: usize,
        on: char,
        off: char,
    ) -> fmt::Result {
        let step = step.max(1);
        for y in (0..HEIGHT).step_by(step) {
            for x in (0..WIDTH).step_by(step) {
                let glyph = if self.pixel(x, y) == Some(true) { on } else { off };
                out.write_char(glyph)?;
            }
            out.write_char('\n')?;
        }

        Ok(())
    }
}
