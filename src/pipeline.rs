//! Pipeline orchestration
//!
//! This module provides the public API of the tracker. It takes a sensor
//! package through dispatch, metric formulas and formatting.

use std::io::Write;

use tracing::{debug, warn};

use crate::dispatch::{read, read_package};
use crate::error::WorkoutError;
use crate::formulas::{calories, distance_km, mean_speed_kmh};
use crate::types::{Summary, WorkoutPackage, WorkoutSample};

/// Compute the summary of a workout sample.
///
/// Fails when a derived metric overflows, since the message could not render
/// it with three decimals.
pub fn summarize(sample: &WorkoutSample) -> Result<Summary, WorkoutError> {
    let summary = Summary {
        training_type: sample.kind().as_str().to_string(),
        duration: sample.duration_hours(),
        distance: distance_km(sample),
        speed: mean_speed_kmh(sample),
        calories: calories(sample),
    };

    for (metric, value) in [
        ("distance", summary.distance),
        ("speed", summary.speed),
        ("calories", summary.calories),
    ] {
        if !value.is_finite() {
            warn!(metric, value, "derived metric is not finite");
            return Err(WorkoutError::NonFiniteMetric { metric, value });
        }
    }

    debug!(?summary, "computed workout summary");
    Ok(summary)
}

/// Read a sensor package and compute its summary.
///
/// # Arguments
/// * `workout_type` - Sensor code (`SWM`, `RUN` or `WLK`)
/// * `data` - Positional sensor fields for that code
///
/// # Example
/// ```ignore
/// let summary = process_package("RUN", &[15000.0, 1.0, 75.0])?;
/// println!("{}", summary.message());
/// ```
pub fn process_package(workout_type: &str, data: &[f64]) -> Result<Summary, WorkoutError> {
    let sample = read_package(workout_type, data)?;
    summarize(&sample)
}

/// Parse a JSON array of packages (`[{"workout_type": "RUN", "data": [...]}]`).
pub fn parse_packages(json: &str) -> Result<Vec<WorkoutPackage>, WorkoutError> {
    Ok(serde_json::from_str(json)?)
}

/// Built-in sensor packages processed by the `tracker` binary
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Write one training message per package.
///
/// Processing stops at the first package that fails; the error is returned
/// to the caller. Returns the number of messages written.
pub fn run_packages<W: Write>(
    packages: &[WorkoutPackage],
    out: &mut W,
) -> Result<usize, WorkoutError> {
    let mut written = 0;

    for package in packages {
        let summary = summarize(&read(package)?)?;
        writeln!(out, "{}", summary.message())?;
        written += 1;
    }

    Ok(written)
}
