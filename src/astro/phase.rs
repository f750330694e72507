//! Moon phase-angle approximation.
//!
//! Low-order trigonometric series from Meeus, *Astronomical Algorithms*,
//! eqn. 46.4: three mean angles as polynomials in Julian centuries since
//! J2000.0, combined through a six-term sine correction.  Accurate to a
//! fraction of a degree over the years a desktop moon cares about.

use std::f64::consts::{PI, TAU};

use thiserror::Error;

const DEG2RAD: f64 = PI / 180.0;
const SECS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_YEAR: f64 = 365.2425;

/// J2000.0 reference epoch (2000-01-01 12:00 TT) in Unix seconds.
pub const J2000_UNIX: f64 = 946_684_800.0;

/// Empirical one-day correction to the epoch offset.
///
/// Without it the computed phase runs about a day ahead of reference
/// ephemerides.  The shift was calibrated against published new-moon
/// times, not derived; treat it as part of the model and keep it verbatim
/// when touching the series coefficients.
pub const CALIBRATION_SECS: f64 = 86_400.0;

/// Mean synodic month (new moon to new moon), in seconds.
pub const SYNODIC_MONTH_SECS: f64 = 2_551_442.8;

/// Errors from the phase calculator.
#[derive(Error, Debug, PartialEq)]
pub enum PhaseError {
    /// The supplied timestamp was NaN or infinite.
    #[error("timestamp is not finite: {0}")]
    NonFiniteTimestamp(f64),
}

/// Reduce a degree value into `[0°, 360°)` and convert to radians.
fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0) * DEG2RAD
}

/// Sun–Moon–Earth phase angle at `unix_secs`, in radians `[0, 2π)`.
///
/// Convention: `0` is full moon, `π` is new moon.  Total for every finite
/// timestamp; a non-finite input is a caller bug and is rejected rather
/// than letting NaN leak into the renderer.
pub fn phase_angle(unix_secs: f64) -> Result<f64, PhaseError> {
    if !unix_secs.is_finite() {
        return Err(PhaseError::NonFiniteTimestamp(unix_secs));
    }

    /* Julian centuries since the (calibrated) J2000.0 epoch */
    let t = (unix_secs - J2000_UNIX - CALIBRATION_SECS) / SECS_PER_DAY / DAYS_PER_YEAR / 100.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    /* Mean elongation of the Moon from the Sun */
    let d = normalize_degrees(
        297.850_204_2 + 445_267.111_516_8 * t - 0.001_630_0 * t2
            + t3 / 545_868.0
            + t4 / 113_065_000.0,
    );
    /* Sun's mean anomaly */
    let msun = normalize_degrees(
        357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
    );
    /* Moon's mean anomaly */
    let mmoon = normalize_degrees(
        134.963_411_4 + 477_198.867_631_3 * t + 0.008_997_0 * t2 - t3 / 3_536_000.0
            + t4 / 14_712_000.0,
    );

    Ok(normalize_degrees(
        180.0 - d / DEG2RAD - 6.289 * mmoon.sin() + 2.100 * msun.sin()
            - 1.274 * (2.0 * d - mmoon).sin()
            - 0.658 * (2.0 * d).sin()
            - 0.214 * (2.0 * mmoon).sin()
            - 0.110 * d.sin(),
    ))
}

/// Fraction of the visible disc that is lit, in `[0, 1]`.
pub fn illuminated_fraction(phase_angle: f64) -> f64 {
    (1.0 + phase_angle.cos()) / 2.0
}

/// Common eight-bucket name for a phase angle (display only).
pub fn phase_name(phase_angle: f64) -> &'static str {
    let deg = phase_angle.rem_euclid(TAU) / DEG2RAD;
    // 0° = full, 180° = new; the angle *decreases* as the moon waxes.
    match deg {
        d if d < 22.5 => "full moon",
        d if d < 67.5 => "waxing gibbous",
        d if d < 112.5 => "first quarter",
        d if d < 157.5 => "waxing crescent",
        d if d < 202.5 => "new moon",
        d if d < 247.5 => "waning crescent",
        d if d < 292.5 => "last quarter",
        d if d < 337.5 => "waning gibbous",
        _ => "full moon",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// New moon of 2000-01-06 18:14 UTC.
    const REFERENCE_NEW_MOON: f64 = 947_182_440.0;

    #[test]
    fn result_is_always_normalized() {
        // ~60 samples spread over 1970..2100
        for i in 0..60 {
            let t = -100_000_000.0 + i as f64 * 68_000_000.0;
            let phase = phase_angle(t).unwrap();
            assert!(
                (0.0..TAU).contains(&phase),
                "phase {phase} out of range for t={t}"
            );
        }
    }

    #[test]
    fn reference_new_moon_is_near_pi() {
        let phase = phase_angle(REFERENCE_NEW_MOON).unwrap();
        assert!(
            (phase - PI).abs() < 0.15,
            "expected ~π at the 2000-01-06 new moon, got {phase}"
        );
    }

    #[test]
    fn roughly_periodic_over_synodic_months() {
        let base = phase_angle(REFERENCE_NEW_MOON).unwrap();
        // offsets where the ~26°/month anomalistic beat of the 6.289·sin(Mmoon)
        // term stays small; at e.g. k=3 the real drift exceeds the tolerance
        for k in [-1i32, 1, 5, 6] {
            let t = REFERENCE_NEW_MOON + k as f64 * SYNODIC_MONTH_SECS;
            let phase = phase_angle(t).unwrap();
            // distance on the circle
            let mut diff = (phase - base).abs();
            if diff > PI {
                diff = TAU - diff;
            }
            assert!(diff < 0.1, "phase drifted {diff} rad after {k} months");
        }
    }

    #[test]
    fn rejects_non_finite_timestamps() {
        assert!(matches!(
            phase_angle(f64::NAN),
            Err(PhaseError::NonFiniteTimestamp(_))
        ));
        assert!(matches!(
            phase_angle(f64::INFINITY),
            Err(PhaseError::NonFiniteTimestamp(_))
        ));
    }

    #[test]
    fn illuminated_fraction_endpoints() {
        assert!((illuminated_fraction(0.0) - 1.0).abs() < 1e-12);
        assert!(illuminated_fraction(PI).abs() < 1e-12);
        assert!((illuminated_fraction(PI / 2.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn phase_names_cover_the_cycle() {
        assert_eq!(phase_name(0.0), "full moon");
        assert_eq!(phase_name(PI), "new moon");
        assert_eq!(phase_name(PI / 2.0), "first quarter");
        assert_eq!(phase_name(3.0 * PI / 2.0), "last quarter");
        assert_eq!(phase_name(TAU - 1e-9), "full moon");
    }

    #[test]
    fn normalize_degrees_wraps_both_directions() {
        assert!((normalize_degrees(720.0) - 0.0).abs() < 1e-12);
        assert!((normalize_degrees(-90.0) - 270.0 * DEG2RAD).abs() < 1e-9);
        assert!((normalize_degrees(359.9) - 359.9 * DEG2RAD).abs() < 1e-9);
    }
}
