//! Pixel-side half of the crate.
//!
//! *The astronomy never touches a pixel; this module never does math on
//! timestamps.*  A [`Canvas`] is a scoped mutable view over the caller's
//! frame-buffer; [`paint_terminator`] darkens the unlit part of the disc,
//! [`paint_disc`] shades the full moon the terminator is painted over.

mod canvas;
mod disc;
mod terminator;

pub use canvas::{BlendMode, Canvas, DimMask, RasterError, RenderContext, Rgba, WHITE};
pub use disc::paint_disc;
pub use terminator::{Anchor, Quadrant, Span, paint_terminator, position_angle, terminator_spans};
