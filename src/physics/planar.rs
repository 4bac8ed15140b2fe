use std::f64::consts::FRAC_PI_2;

use crate::io::TankSetup;
use crate::physics::{DEGENERATE_ANGLE_EPS_RAD, SolveError};

/// Straight-ray solution of the eye/partition/stimulus triangle.
#[derive(Debug, Clone, Copy)]
pub struct PlanarSolution {
    /// Eye-to-partition distance ignoring refraction.
    pub distance_m: f64,
    /// Partition top relative to eye height.
    pub partition_rel_m: f64,
    /// Stimulus-to-partition gap projected along the viewing direction.
    pub gap_at_angle_m: f64,
}

/// Solves for the distance at which the stimulus first clears the partition
/// edge, ignoring refraction.
///
/// `beta_rad` is the horizontal viewing angle measured from the partition
/// normal; 0 puts the eye orthogonally in front of the stimulus. The heights
/// form two similar triangles sharing the partition edge, so the distance
/// falls out of the ratio of partition height to the height the stimulus
/// stands above it.
pub fn solve_no_refraction(setup: &TankSetup, beta_rad: f64) -> Result<PlanarSolution, SolveError> {
    if (beta_rad - FRAC_PI_2).abs() < DEGENERATE_ANGLE_EPS_RAD
        || (beta_rad + FRAC_PI_2).abs() < DEGENERATE_ANGLE_EPS_RAD
    {
        return Err(SolveError::DegenerateAngle { angle_rad: beta_rad });
    }

    // Hypotenuse distance between stimulus and partition at this angle.
    let gap_at_angle_m = setup.partition_stimulus_gap_m / beta_rad.cos();

    let partition_rel_m = setup.partition_height_m - setup.eye_height_m;
    let stimulus_rel_m = setup.stimulus_height_m - setup.eye_height_m;

    let height_diff_m = stimulus_rel_m - partition_rel_m;
    if height_diff_m.abs() < f64::EPSILON {
        return Err(SolveError::LevelHeights {
            height_rel_m: partition_rel_m,
        });
    }

    let distance_m = (partition_rel_m * gap_at_angle_m) / height_diff_m;

    Ok(PlanarSolution {
        distance_m,
        partition_rel_m,
        gap_at_angle_m,
    })
}
