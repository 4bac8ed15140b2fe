use std::f64::consts::FRAC_PI_2;

use crate::io::TankSetup;
use crate::physics::SolveError;
use crate::physics::planar::solve_no_refraction;

/// Solves for the eye-to-partition distance with refraction at the water
/// surface taken into account.
///
/// Starts from the straight-ray solution, then bends the sight ray at the
/// surface with Snell's law. The refracted ray leaves the water closer to the
/// partition, which is why the corrected distance comes out shorter than the
/// planar one for a submerged eye. The return value is the orthogonal
/// distance to the partition in meters.
pub fn solve_with_refraction(setup: &TankSetup, beta_rad: f64) -> Result<f64, SolveError> {
    let planar = solve_no_refraction(setup, beta_rad)?;

    let water_rel_m = setup.water_height_m - setup.eye_height_m;
    if water_rel_m <= 0.0 {
        return Err(SolveError::EyeAboveWater {
            water_height_m: setup.water_height_m,
            eye_height_m: setup.eye_height_m,
        });
    }

    // Straight sight ray to the partition edge, measured up from the horizontal.
    let theta_horizontal = planar.partition_rel_m.atan2(planar.distance_m);
    // Same ray against the surface normal, the incidence angle for Snell's law.
    let theta_incidence = FRAC_PI_2 - theta_horizontal;

    let sin_refracted = theta_incidence.sin() / setup.refractive_index_ratio;
    if sin_refracted.abs() > 1.0 {
        return Err(SolveError::TotalInternalReflection { sin_refracted });
    }
    let theta_refracted = sin_refracted.asin();

    // Horizontal shift at the surface between the straight and the refracted ray.
    let surface_offset_m = water_rel_m * theta_refracted.tan();

    // Hypotenuse distance along the viewing direction.
    let hypotenuse_m = planar.distance_m - water_rel_m / theta_horizontal.tan() + surface_offset_m;

    // Project back onto the axis orthogonal to the partition.
    Ok(hypotenuse_m * (FRAC_PI_2 - beta_rad).sin())
}
