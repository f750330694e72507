//! Lunar-phase disc renderer.
//!
//! The crate is split the same way the problem is:
//!
//! * [`astro`] - pure math: timestamp to Sun-Moon-Earth phase angle.
//! * [`raster`] - geometry plus pixels: phase angle to dimmed terminator
//!   spans painted into a caller-owned frame-buffer.
//!
//! The binaries (`moonwin`, `phase_info`) are thin collaborators that
//! supply a clock, a pixel buffer and a redraw loop; everything with
//! actual algorithmic content lives in these two modules.

pub mod astro;
pub mod raster;
