//! Panel dimensions and packed row layout.

/// Panel width in pixels.
pub const WIDTH: usize = 180;
/// Panel height in pixels.
pub const HEIGHT: usize = 180;
/// Number of bytes in one packed pixel row. The last byte is padded.
pub const ROW_BYTES: usize = WIDTH.div_ceil(8);
/// Total framebuffer size in bytes.
pub const BUFFER_SIZE: usize = ROW_BYTES * HEIGHT;

/// Byte offset and bit mask for a pixel, or `None` when out of bounds.
#[inline]
pub const fn bit_position(x: usize, y: usize) -> Option<(usize, u8)> {
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }

    Some((y * ROW_BYTES + (x / 8), 1u8 << (7 - (x % 8))))
}
