use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::physics::{DEFAULT_PARTITION_STIMULUS_GAP_M, WATER_AIR_INDEX_RATIO};
use crate::sweep::SweepResult;

/// Measured geometry of one rig, one per fish size class.
/// Heights are above the tank floor, in meters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankSetup {
    pub name: String,
    pub eye_height_m: f64,       // estimated, eye of the submerged observer
    pub partition_height_m: f64, // measured
    pub stimulus_height_m: f64,  // measured, bottom of the stimulus
    pub water_height_m: f64,     // measured, varies across the tank floor
    #[serde(default = "default_gap")]
    pub partition_stimulus_gap_m: f64,
    #[serde(default = "default_index_ratio")]
    pub refractive_index_ratio: f64,
}

fn default_gap() -> f64 {
    DEFAULT_PARTITION_STIMULUS_GAP_M
}

fn default_index_ratio() -> f64 {
    WATER_AIR_INDEX_RATIO
}

pub fn load_setups_from_json(path: &str) -> anyhow::Result<Vec<TankSetup>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening setup file {path}"))?;
    let reader = std::io::BufReader::new(file);
    let setups: Vec<TankSetup> = serde_json::from_reader(reader)?;
    Ok(setups)
}

/// One exported table row. Angles leave the crate in degrees.
#[derive(Debug, Serialize)]
struct DistanceRow {
    angle_degrees: f64,
    distance_meters: f64,
}

/// Writes the surviving sweep points as CSV, header row included.
pub fn write_distances_csv<P: AsRef<Path>>(path: P, result: &SweepResult) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for point in &result.points {
        writer.serialize(DistanceRow {
            angle_degrees: point.angle_rad.to_degrees(),
            distance_meters: point.distance_m,
        })?;
    }
    writer.flush()?;
    Ok(())
}
