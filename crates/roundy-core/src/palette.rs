//! Colors for the light and dark display variants.

use embedded_graphics_core::pixelcolor::{BinaryColor, PixelColor, Rgb565};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaletteVariant {
    Light,
    #[default]
    Dark,
}

/// Fill and stroke colors used by both surfaces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette<C> {
    pub background_fill: C,
    pub digit_fill: C,
    /// Diagonal of an unswept cell.
    pub dim_stroke: C,
    /// Diagonal of a swept or highlighted cell.
    pub bright_stroke: C,
}

impl<C: PixelColor> Palette<C> {
    pub fn stroke(&self, flipped: bool) -> C {
        if flipped {
            self.bright_stroke
        } else {
            self.dim_stroke
        }
    }
}

impl Palette<BinaryColor> {
    /// 1bpp palette where `On` is an inked pixel.
    ///
    /// Unswept diagonals are drawn in the paper color and vanish into the
    /// fill; only swept cells show in ink.
    pub const fn monochrome(variant: PaletteVariant) -> Self {
        let (paper, ink) = match variant {
            PaletteVariant::Light => (BinaryColor::Off, BinaryColor::On),
            PaletteVariant::Dark => (BinaryColor::On, BinaryColor::Off),
        };

        Self {
            background_fill: paper,
            digit_fill: paper,
            dim_stroke: paper,
            bright_stroke: ink,
        }
    }
}

impl Palette<Rgb565> {
    const BLACK: Rgb565 = Rgb565::new(0, 0, 0);
    const WHITE: Rgb565 = Rgb565::new(31, 63, 31);
    // 0x555555
    const DARK_GRAY: Rgb565 = Rgb565::new(10, 21, 10);
    // 0xAAAAAA
    const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

    pub const fn color(variant: PaletteVariant) -> Self {
        match variant {
            PaletteVariant::Dark => Self {
                background_fill: Self::BLACK,
                digit_fill: Self::BLACK,
                dim_stroke: Self::DARK_GRAY,
                bright_stroke: Self::WHITE,
            },
            PaletteVariant::Light => Self {
                background_fill: Self::LIGHT_GRAY,
                digit_fill: Self::BLACK,
                dim_stroke: Self::DARK_GRAY,
                bright_stroke: Self::WHITE,
            },
        }
    }
}
