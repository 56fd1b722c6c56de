//! Workout dispatch
//!
//! Maps a sensor code to its workout kind and builds the matching sample from
//! positional fields. Field order per kind:
//! - `RUN`: action, duration, weight
//! - `WLK`: action, duration, weight, height
//! - `SWM`: action, duration, weight, pool length, pool laps

use tracing::{debug, warn};

use crate::error::WorkoutError;
use crate::types::{WorkoutKind, WorkoutPackage, WorkoutSample};

/// Read a sensor package into a typed workout sample.
///
/// Validation runs in a fixed order: the code must be known, no field may be
/// zero, every field must be finite and non-negative, the list must not be
/// empty, and its length must match the kind.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<WorkoutSample, WorkoutError> {
    let kind = workout_type.parse::<WorkoutKind>().inspect_err(|_| {
        warn!(code = workout_type, "unknown workout type");
    })?;

    validate_fields(data)?;

    if data.len() != kind.field_count() {
        warn!(
            code = kind.code(),
            expected = kind.field_count(),
            actual = data.len(),
            "wrong number of sensor fields"
        );
        return Err(WorkoutError::FieldCount {
            code: kind.code(),
            expected: kind.field_count(),
            actual: data.len(),
        });
    }

    let sample = build_sample(kind, data);
    debug!(code = kind.code(), ?sample, "read workout package");
    Ok(sample)
}

/// Read a deserialized package
pub fn read(package: &WorkoutPackage) -> Result<WorkoutSample, WorkoutError> {
    read_package(&package.workout_type, &package.data)
}

fn validate_fields(data: &[f64]) -> Result<(), WorkoutError> {
    if let Some(index) = data.iter().position(|&value| value == 0.0) {
        warn!(index, "null sensor field");
        return Err(WorkoutError::NullField { index });
    }

    if let Some((index, &value)) = data
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || value.is_sign_negative())
    {
        warn!(index, value, "invalid sensor field");
        return Err(WorkoutError::InvalidField { index, value });
    }

    if data.is_empty() {
        warn!("empty sensor package");
        return Err(WorkoutError::EmptyData);
    }

    Ok(())
}

/// Build a sample; `data` length has already been checked against the kind
fn build_sample(kind: WorkoutKind, data: &[f64]) -> WorkoutSample {
    match kind {
        WorkoutKind::Running => WorkoutSample::Running {
            action_units: data[0],
            duration_hours: data[1],
            weight_kg: data[2],
        },
        WorkoutKind::SportsWalking => WorkoutSample::Walking {
            action_units: data[0],
            duration_hours: data[1],
            weight_kg: data[2],
            height_cm: data[3],
        },
        WorkoutKind::Swimming => WorkoutSample::Swimming {
            action_units: data[0],
            duration_hours: data[1],
            weight_kg: data[2],
            pool_length_m: data[3],
            pool_laps: data[4],
        },
    }
}
