#![cfg_attr(not(test), no_std)]

//! Monochrome framebuffer for the 180x180 round watch panel.

mod framebuffer;
pub mod panel;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;
