//! Procedural full-moon disc.
//!
//! Stand-in for the photographic pixmap the original asset pipeline would
//! supply: a sphere shaded with a little limb darkening, enough surface
//! gradient for the dim blend to keep visible structure on the night side.

use crate::raster::canvas::{BlendMode, Canvas, RasterError, RenderContext, Rgba};

/// Brightness at the limb relative to the disc center.
const LIMB_FLOOR: f64 = 0.55;

fn scale_rgb(color: Rgba, f: f64) -> Rgba {
    let ch = |c: u32| ((c as f64 * f) as u32).min(0xFF);
    ch((color >> 16) & 0xFF) << 16 | ch((color >> 8) & 0xFF) << 8 | ch(color & 0xFF)
}

/// Paint a shaded full-moon disc of `radius` centered at `(cx, cy)`.
///
/// Pixels outside the disc are left untouched.  Same row-pair walk as the
/// terminator painter, so the two stay seam-free at the disc edge.
pub fn paint_disc(
    ctx: &RenderContext,
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    radius: i32,
    base: Rgba,
) -> Result<(), RasterError> {
    if radius < 0 {
        return Err(RasterError::NegativeRadius(radius));
    }
    if radius == 0 {
        return Ok(());
    }

    let rsquared = (radius as f64) * (radius as f64);
    for j in 0..=radius {
        let rrf = (rsquared - (j as f64) * (j as f64)).sqrt();
        let rr = (rrf + 0.5) as i32;
        for i in -rr..=rr {
            let d2 = ((i * i + j * j) as f64) / rsquared;
            // hemisphere height above the screen plane, 1 at center, 0 at limb
            let z = (1.0 - d2).max(0.0).sqrt();
            let shade = LIMB_FLOOR + (1.0 - LIMB_FLOOR) * z;
            let mode = BlendMode::Overwrite(scale_rgb(base, shade));
            canvas.blend_span(ctx, cy - j, cx + i, 1, mode);
            if j != 0 {
                canvas.blend_span(ctx, cy + j, cx + i, 1, mode);
            }
        }
    }
    Ok(())
}
