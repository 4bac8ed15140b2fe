pub mod planar;
pub mod refraction;

use thiserror::Error;

/// Refractive index of water relative to air.
pub const WATER_AIR_INDEX_RATIO: f64 = 1.33;

/// Horizontal distance between partition and stimulus, measured once for the rig. Meters.
pub const DEFAULT_PARTITION_STIMULUS_GAP_M: f64 = 0.185;

/// Viewing angles closer than this to ±π/2 make the gap projection divide by zero.
pub const DEGENERATE_ANGLE_EPS_RAD: f64 = 1e-6;

/// Everything that can stop a single distance solve.
///
/// The first two variants are bad angles or degenerate triangles; a sweep can
/// drop that one point and keep going. The last two mean the rig itself is
/// misconfigured, so nothing downstream of them is meaningful.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("viewing angle {angle_rad:.6} rad is too close to ±π/2, gap projection is undefined")]
    DegenerateAngle { angle_rad: f64 },

    #[error(
        "stimulus and partition are level ({height_rel_m} m above the eye), sight line never clears the partition"
    )]
    LevelHeights { height_rel_m: f64 },

    #[error(
        "water surface at {water_height_m} m is at or below the eye at {eye_height_m} m, observer is not submerged"
    )]
    EyeAboveWater { water_height_m: f64, eye_height_m: f64 },

    #[error("no real refraction angle, |sin| of refracted ray is {sin_refracted:.4}")]
    TotalInternalReflection { sin_refracted: f64 },
}

impl SolveError {
    /// Recoverable failures drop one sweep point; the rest abort the sweep.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SolveError::DegenerateAngle { .. } | SolveError::LevelHeights { .. }
        )
    }
}
