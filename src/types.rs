//! Core types for the workout tracker
//!
//! This module defines the data that flows through each stage: the raw package
//! read from the sensor, the typed workout sample, and the derived summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkoutError;

/// Workout kind, identified on the wire by a three-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    /// All kinds, in the order their codes are reported
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Short sensor code
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Name shown in the training summary
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional sensor fields this kind expects
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Every recognised code
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(WorkoutKind::code).collect()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType {
                code: code.to_string(),
                available: Self::codes(),
            })
    }
}

/// A single workout reconstructed from sensor fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutSample {
    Running {
        /// Step count
        action_units: f64,
        duration_hours: f64,
        weight_kg: f64,
    },
    Walking {
        /// Step count
        action_units: f64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        /// Stroke count
        action_units: f64,
        duration_hours: f64,
        weight_kg: f64,
        /// Pool length (metres)
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_laps: f64,
    },
}

impl WorkoutSample {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutSample::Running { .. } => WorkoutKind::Running,
            WorkoutSample::Walking { .. } => WorkoutKind::SportsWalking,
            WorkoutSample::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn action_units(&self) -> f64 {
        match *self {
            WorkoutSample::Running { action_units, .. }
            | WorkoutSample::Walking { action_units, .. }
            | WorkoutSample::Swimming { action_units, .. } => action_units,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match *self {
            WorkoutSample::Running { duration_hours, .. }
            | WorkoutSample::Walking { duration_hours, .. }
            | WorkoutSample::Swimming { duration_hours, .. } => duration_hours,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match *self {
            WorkoutSample::Running { weight_kg, .. }
            | WorkoutSample::Walking { weight_kg, .. }
            | WorkoutSample::Swimming { weight_kg, .. } => weight_kg,
        }
    }
}

/// Derived, read-only training summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Workout kind name (e.g. "Running")
    pub training_type: String,
    /// Duration (hours)
    pub duration: f64,
    /// Distance covered (km)
    pub distance: f64,
    /// Mean speed (km/h)
    pub speed: f64,
    /// Energy spent (kcal)
    pub calories: f64,
}

/// Raw sensor package: a workout code plus its positional fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!("SWM".parse::<WorkoutKind>().unwrap(), WorkoutKind::Swimming);
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!(
            "WLK".parse::<WorkoutKind>().unwrap(),
            WorkoutKind::SportsWalking
        );
    }

    #[test]
    fn test_unknown_code_lists_available() {
        let err = "XYZ".parse::<WorkoutKind>().unwrap_err();
        match err {
            WorkoutError::UnknownWorkoutType { code, available } => {
                assert_eq!(code, "XYZ");
                assert_eq!(available, vec!["SWM", "RUN", "WLK"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!("run".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_sample_accessors() {
        let sample = WorkoutSample::Swimming {
            action_units: 720.0,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40.0,
        };
        assert_eq!(sample.kind(), WorkoutKind::Swimming);
        assert_eq!(sample.action_units(), 720.0);
        assert_eq!(sample.duration_hours(), 1.0);
        assert_eq!(sample.weight_kg(), 80.0);
    }
}
