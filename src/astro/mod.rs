mod phase;

pub use phase::{
    CALIBRATION_SECS, J2000_UNIX, PhaseError, SYNODIC_MONTH_SECS, illuminated_fraction,
    phase_angle, phase_name,
};
