use log::warn;
use thiserror::Error;

use crate::io::TankSetup;
use crate::physics::SolveError;
use crate::physics::refraction::solve_with_refraction;

/// One surviving sweep sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub angle_rad: f64,
    pub distance_m: f64,
}

/// Angle dropped from a sweep, kept so callers can report what went missing.
#[derive(Debug)]
pub struct SkippedAngle {
    pub angle_rad: f64,
    pub reason: SolveError,
}

/// Distances for one setup across a sequence of viewing angles.
/// `points` keeps the input angle order.
#[derive(Debug)]
pub struct SweepResult {
    pub setup: String,
    pub points: Vec<SweepPoint>,
    pub skipped: Vec<SkippedAngle>,
}

#[derive(Debug, Error)]
#[error("sweep of '{setup}' aborted at {angle_deg:.1} deg: {source}")]
pub struct SweepError {
    pub setup: String,
    pub angle_deg: f64,
    pub source: SolveError,
}

/// Evaluates the refraction-corrected distance at every angle, in order.
///
/// Recoverable failures drop the single angle and the sweep continues; fatal
/// ones abort immediately with the offending setup and angle attached, since
/// they hold for the whole rig and every remaining angle would fail the same
/// way.
pub fn sweep(setup: &TankSetup, angles_rad: &[f64]) -> Result<SweepResult, SweepError> {
    let mut result = SweepResult {
        setup: setup.name.clone(),
        points: Vec::with_capacity(angles_rad.len()),
        skipped: Vec::new(),
    };

    for &angle_rad in angles_rad {
        match solve_with_refraction(setup, angle_rad) {
            Ok(distance_m) => result.points.push(SweepPoint {
                angle_rad,
                distance_m,
            }),
            Err(reason) if reason.is_recoverable() => {
                warn!(
                    "setup '{}': dropping {:.1} deg: {}",
                    setup.name,
                    angle_rad.to_degrees(),
                    reason
                );
                result.skipped.push(SkippedAngle { angle_rad, reason });
            }
            Err(source) => {
                return Err(SweepError {
                    setup: setup.name.clone(),
                    angle_deg: angle_rad.to_degrees(),
                    source,
                });
            }
        }
    }

    Ok(result)
}
