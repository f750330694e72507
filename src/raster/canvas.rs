//! Frame-buffer view and span blending.
//!
//! The window owns its `Vec<u32>`; the renderer borrows it for exactly one
//! call through [`Canvas`] and writes clipped horizontal spans.  The dim
//! mask used to darken the night side lives in a caller-owned
//! [`RenderContext`] and is built once, on first use.

use once_cell::sync::OnceCell;
use thiserror::Error;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Full-brightness white in the frame-buffer format.
pub const WHITE: Rgba = 0x00FF_FFFF;

/// Errors from canvas construction and span painting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Buffer length does not match `width * height`.
    #[error("buffer holds {got} pixels, expected {expected}")]
    SizeMismatch { expected: usize, got: usize },

    /// A negative disc radius is a caller bug, not an empty disc.
    #[error("negative disc radius: {0}")]
    NegativeRadius(i32),
}

/// How a span is combined with the pixels already in the buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Replace the pixel outright.
    Overwrite(Rgba),
    /// AND with the lazily-created dim mask: darkens without blackening,
    /// so the surface shading underneath stays visible.
    DimAndMask,
}

/// The AND mask that dims a pixel to roughly a third of its brightness.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DimMask(Rgba);

impl DimMask {
    /// One third of full brightness per channel (0xFFFFFF / 3 = 0x555555).
    fn for_white(white: Rgba) -> Self {
        DimMask(white / 3)
    }

    #[inline]
    pub fn apply(self, px: Rgba) -> Rgba {
        px & self.0
    }
}

/// Per-caller rendering state surviving across paint calls.
///
/// Replaces the original design's process-global blend handle: the caller
/// owns the context and passes it in, nothing hides in a singleton.  The
/// `OnceCell` doubles as the one-time initialization barrier should a
/// future caller ever share the context between threads.
#[derive(Debug, Default)]
pub struct RenderContext {
    dim: OnceCell<DimMask>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dim mask, created on first use and reused afterwards.
    pub fn dim_mask(&self) -> DimMask {
        *self.dim.get_or_init(|| DimMask::for_white(WHITE))
    }
}

/// Scoped mutable view over a row-major pixel buffer.
///
/// Holds the borrow only for the duration of one render call; the core
/// never keeps a reference to the buffer across calls.
#[derive(Debug)]
pub struct Canvas<'a> {
    pixels: &'a mut [Rgba],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(pixels: &'a mut [Rgba], width: usize, height: usize) -> Result<Self, RasterError> {
        if pixels.len() != width * height {
            return Err(RasterError::SizeMismatch {
                expected: width * height,
                got: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            Some(self.pixels[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Blend the horizontal span `[x, x + w)` on row `y`.
    ///
    /// Clips against the buffer edges; rows outside and zero/negative
    /// widths are no-ops, matching the degenerate spans the terminator
    /// geometry is allowed to produce near the disc poles.
    pub fn blend_span(&mut self, ctx: &RenderContext, y: i32, x: i32, w: i32, mode: BlendMode) {
        if w <= 0 || y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x.max(0) as usize;
        let x1 = (x + w).clamp(0, self.width as i32) as usize;
        if x0 >= x1 {
            return;
        }
        let row = y as usize * self.width;
        let span = &mut self.pixels[row + x0..row + x1];
        match mode {
            BlendMode::Overwrite(color) => span.fill(color),
            BlendMode::DimAndMask => {
                let mask = ctx.dim_mask();
                for px in span.iter_mut() {
                    *px = mask.apply(*px);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let mut buf = vec![0u32; 7];
        let err = Canvas::new(&mut buf, 4, 2).unwrap_err();
        assert_eq!(
            err,
            RasterError::SizeMismatch {
                expected: 8,
                got: 7
            }
        );
    }

    #[test]
    fn overwrite_span_is_clipped() {
        let mut buf = vec![0u32; 4 * 4];
        let ctx = RenderContext::new();
        let mut canvas = Canvas::new(&mut buf, 4, 4).unwrap();
        canvas.blend_span(&ctx, 1, -2, 8, BlendMode::Overwrite(0xAB));

        for x in 0..4 {
            assert_eq!(canvas.pixel(x, 1), Some(0xAB));
            assert_eq!(canvas.pixel(x, 0), Some(0));
            assert_eq!(canvas.pixel(x, 2), Some(0));
        }
    }

    #[test]
    fn off_buffer_rows_and_empty_widths_are_noops() {
        let mut buf = vec![0xFFFF_FFFFu32; 3 * 3];
        let ctx = RenderContext::new();
        let mut canvas = Canvas::new(&mut buf, 3, 3).unwrap();
        canvas.blend_span(&ctx, -1, 0, 3, BlendMode::DimAndMask);
        canvas.blend_span(&ctx, 3, 0, 3, BlendMode::DimAndMask);
        canvas.blend_span(&ctx, 1, 1, 0, BlendMode::DimAndMask);
        canvas.blend_span(&ctx, 1, 1, -4, BlendMode::DimAndMask);
        assert!(buf.iter().all(|&px| px == 0xFFFF_FFFF), "buffer was touched");
    }

    #[test]
    fn dim_mask_thirds_white_and_is_idempotent() {
        let ctx = RenderContext::new();
        let mask = ctx.dim_mask();
        assert_eq!(mask.apply(WHITE), 0x0055_5555);
        assert_eq!(mask.apply(mask.apply(0x00C0_8040)), mask.apply(0x00C0_8040));
    }

    #[test]
    fn context_builds_the_mask_once() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.dim_mask(), ctx.dim_mask());
    }
}
