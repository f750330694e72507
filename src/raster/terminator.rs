//! Terminator geometry and the darkside painter.
//!
//! The sunrise terminator is a half-ellipse whose horizontal compression
//! is `cos(position angle)`; which side of the disc it opens toward flips
//! every 90° of position angle.  Per scanline the disc half-width `rr`
//! comes from the circle equation and the ellipse offset `xx` from the
//! cosine term; the quadrant decides whether the span's left edge sits at
//! the ellipse (`cx − xx`) or at the disc edge (`cx − rr`).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::raster::canvas::{BlendMode, Canvas, RasterError, RenderContext};

/// Rotation of the terminator relative to the disc's vertical axis:
/// `π − phase`, renormalized into `[0, 2π)`.
pub fn position_angle(phase_angle: f64) -> f64 {
    (PI - phase_angle).rem_euclid(TAU)
}

/// Where a scanline span's left boundary is anchored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// At the terminator ellipse: `x1 = cx − xx`.
    Ellipse,
    /// At the disc's own edge: `x1 = cx − rr`.
    DiscEdge,
}

/// One of the four 90° sectors of the position angle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Quadrant {
    Q0,
    Q1,
    Q2,
    Q3,
}

impl Quadrant {
    /// `floor(pos / (π/2)) mod 4`; total over `[0, 2π)`.
    pub fn from_position_angle(pos: f64) -> Self {
        match ((pos / FRAC_PI_2).floor() as i32).rem_euclid(4) {
            0 => Quadrant::Q0,
            1 => Quadrant::Q1,
            2 => Quadrant::Q2,
            _ => Quadrant::Q3,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Quadrant::Q0 => 0,
            Quadrant::Q1 => 1,
            Quadrant::Q2 => 2,
            Quadrant::Q3 => 3,
        }
    }

    /// The boundary-anchor rule for this sector.
    pub fn anchor(self) -> Anchor {
        match self {
            Quadrant::Q0 | Quadrant::Q1 => Anchor::Ellipse,
            Quadrant::Q2 | Quadrant::Q3 => Anchor::DiscEdge,
        }
    }
}

/// A horizontal pixel run to be darkened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x: i32,
    pub w: i32,
}

/// Compute the dark-side spans for a disc of `radius` centered at
/// `(cx, cy)`.
///
/// Pure geometry, no pixels: one span for the center row, two mirror
/// spans for every row pair below/above it.  Rows near the poles may
/// come out zero-width; that is expected, not an error.  A negative
/// radius is rejected, radius 0 yields no spans.
pub fn terminator_spans(
    phase_angle: f64,
    radius: i32,
    cx: i32,
    cy: i32,
) -> Result<Vec<Span>, RasterError> {
    if radius < 0 {
        return Err(RasterError::NegativeRadius(radius));
    }
    let mut spans = Vec::with_capacity(2 * radius as usize + 1);
    if radius == 0 {
        return Ok(spans);
    }

    let pos = position_angle(phase_angle);
    let cos_term = pos.cos();
    let anchor = Quadrant::from_position_angle(pos).anchor();
    let rsquared = (radius as f64) * (radius as f64);

    for j in 0..=radius {
        let rrf = (rsquared - (j as f64) * (j as f64)).sqrt();
        let rr = (rrf + 0.5) as i32; // rrf is never negative
        let xx = (rrf * cos_term).round() as i32;
        let x1 = cx - match anchor {
            Anchor::Ellipse => xx,
            Anchor::DiscEdge => rr,
        };
        let w = rr + xx + 1;

        spans.push(Span { y: cy - j, x: x1, w });
        if j != 0 {
            spans.push(Span { y: cy + j, x: x1, w });
        }
    }
    Ok(spans)
}

/// Darken the unlit part of the disc in place.
///
/// Spans are computed up front, so an invalid radius fails before any
/// pixel is touched; the only side effect is the dim blend inside the
/// disc.  The canvas borrow ends with the call.
pub fn paint_terminator(
    ctx: &RenderContext,
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    radius: i32,
    phase_angle: f64,
) -> Result<(), RasterError> {
    for span in terminator_spans(phase_angle, radius, cx, cy)? {
        canvas.blend_span(ctx, span.y, span.x, span.w, BlendMode::DimAndMask);
    }
    Ok(())
}
