//! `moonwin` - a little window showing the current moon phase.
//!
//! ```bash
//! cargo run --release                 # 174 px moon, live clock
//! cargo run --release -- --small      # 100 px moon
//! cargo run --release -- --at 947182440
//! ```
//!
//! Q or Escape quits.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use minifb::{Key, Window, WindowOptions};

use moonwin_rs::astro::{illuminated_fraction, phase_angle, phase_name};
use moonwin_rs::raster::{Canvas, RenderContext, paint_disc, paint_terminator};

/// The two historical disc sizes, in pixels.
const LARGE_DIAM: usize = 174;
const SMALL_DIAM: usize = 100;

/// Base tint of the lit moon surface (0x00RRGGBB).
const MOON_TINT: u32 = 0x00E8_E8E0;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Use the 100 px disc instead of the 174 px one
    #[arg(long)]
    small: bool,

    /// Freeze the clock at this Unix timestamp instead of following
    /// wall-clock time
    #[arg(long, value_name = "UNIX_SECS")]
    at: Option<f64>,
}

fn now_unix() -> f64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        // pre-1970 system clock; the phase series handles negative T fine
        Err(e) => -e.duration().as_secs_f64(),
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let diam = if opts.small { SMALL_DIAM } else { LARGE_DIAM };
    let radius = (diam / 2) as i32;
    let (cx, cy) = (radius, radius);

    /* shade the full disc once; every frame starts from this copy */
    let ctx = RenderContext::new();
    let mut base = vec![0u32; diam * diam];
    {
        let mut canvas = Canvas::new(&mut base, diam, diam)?;
        paint_disc(&ctx, &mut canvas, cx, cy, radius, MOON_TINT)?;
    }

    let mut frame = vec![0u32; diam * diam];
    let mut window = Window::new("moonwin", diam, diam, WindowOptions::default())?;
    // the phase moves per-hour, not per-frame; just keep input responsive
    window.set_target_fps(10);

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        let when = opts.at.unwrap_or_else(now_unix);
        let phase = phase_angle(when)?;

        frame.copy_from_slice(&base);
        let mut canvas = Canvas::new(&mut frame, diam, diam)?;
        paint_terminator(&ctx, &mut canvas, cx, cy, radius, phase)?;

        window.set_title(&format!(
            "moonwin: {} ({:.0}% lit)",
            phase_name(phase),
            illuminated_fraction(phase) * 100.0
        ));
        window.update_with_buffer(&frame, diam, diam)?;
    }
    Ok(())
}
