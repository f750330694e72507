//! phase_info - one-shot CLI printing moon-phase data for a timestamp.
//!
//! USAGE:
//! ```bash
//! cargo run --bin phase_info                  # now
//! cargo run --bin phase_info -- --at 947182440
//! ```

use std::f64::consts::PI;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use moonwin_rs::astro::{illuminated_fraction, phase_angle, phase_name};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Unix timestamp to evaluate (defaults to the current time)
    #[arg(long, value_name = "UNIX_SECS")]
    at: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let when = match opts.at {
        Some(t) => t,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs_f64(),
    };

    let phase = phase_angle(when)?;
    println!("timestamp:   {when:.0}");
    println!("phase angle: {:.4} rad ({:.2} deg)", phase, phase * 180.0 / PI);
    println!("illuminated: {:.1}%", illuminated_fraction(phase) * 100.0);
    println!("phase:       {}", phase_name(phase));
    Ok(())
}
