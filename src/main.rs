use std::process::exit;

use itertools::Itertools;

use tank_visibility::io::{self, TankSetup};
use tank_visibility::physics::{DEFAULT_PARTITION_STIMULUS_GAP_M, WATER_AIR_INDEX_RATIO};
use tank_visibility::sweep::sweep;

/// Measured rigs for the two Cymatogaster size classes.
fn builtin_setups() -> Vec<TankSetup> {
    vec![
        TankSetup {
            name: "small".to_string(),
            eye_height_m: 0.02,
            partition_height_m: 0.075, // 0.075 before trials, 0.055 after
            stimulus_height_m: 0.20,
            water_height_m: 0.07, // 0.07 before trials, 0.03 after
            partition_stimulus_gap_m: DEFAULT_PARTITION_STIMULUS_GAP_M,
            refractive_index_ratio: WATER_AIR_INDEX_RATIO,
        },
        TankSetup {
            name: "large".to_string(),
            eye_height_m: 0.03,
            partition_height_m: 0.10,
            stimulus_height_m: 0.23,
            water_height_m: 0.08,
            partition_stimulus_gap_m: DEFAULT_PARTITION_STIMULUS_GAP_M,
            refractive_index_ratio: WATER_AIR_INDEX_RATIO,
        },
    ]
}

fn usage() -> ! {
    eprintln!("Usage: tank_visibility <setup-name|all> [setups.json]");
    exit(2);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(selector) = args.get(1) else { usage() };

    let setups = match args.get(2) {
        Some(path) => io::load_setups_from_json(path)?,
        None => builtin_setups(),
    };

    let selected: Vec<&TankSetup> = setups
        .iter()
        .filter(|s| selector == "all" || s.name == *selector)
        .collect();
    if selected.is_empty() {
        eprintln!(
            "Unknown setup '{}', available: {}",
            selector,
            setups.iter().map(|s| s.name.as_str()).join(", ")
        );
        exit(2);
    }

    // -90 to 90 degrees in 10 degree steps, as in the trials. The sweep drops
    // the two degenerate endpoints itself.
    let angles_rad: Vec<f64> = (-90..=90)
        .step_by(10)
        .map(|deg| f64::from(deg).to_radians())
        .collect();

    for setup in selected {
        println!(
            "Setup '{}': eye {:.3} m, partition {:.3} m, stimulus {:.3} m, water {:.3} m, gap {:.3} m",
            setup.name,
            setup.eye_height_m,
            setup.partition_height_m,
            setup.stimulus_height_m,
            setup.water_height_m,
            setup.partition_stimulus_gap_m,
        );

        let result = sweep(setup, &angles_rad)?;

        println!("  angle(deg)  distance(cm)");
        for point in &result.points {
            println!(
                "  {:>10.0}  {:>12.1}",
                point.angle_rad.to_degrees(),
                point.distance_m * 100.0
            );
        }
        if !result.skipped.is_empty() {
            println!(
                "  dropped angles: {}",
                result
                    .skipped
                    .iter()
                    .map(|s| format!("{:.0} deg", s.angle_rad.to_degrees()))
                    .join(", ")
            );
        }

        let out_path = format!("distances_{}.csv", setup.name);
        io::write_distances_csv(&out_path, &result)?;
        println!("  wrote {out_path}");
    }

    Ok(())
}
