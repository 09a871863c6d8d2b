#![cfg_attr(not(test), no_std)]

//! Clock face rendering and the directional sweep animation for the Roundy
//! watchface.
//!
//! Everything here is host-agnostic: surfaces draw into any
//! `embedded-graphics-core` target and advance through an injected
//! [`scheduler::Scheduler`].

pub mod background;
pub mod cell;
pub mod clock;
pub mod digits;
pub mod direction;
pub mod geometry;
pub mod glyph;
pub mod palette;
pub mod scheduler;
pub mod surface;
pub mod sweep;
pub mod watchface;
