//! Tracker - prints a training summary for each built-in sensor package
//!
//! Summaries go to stdout; logs and errors go to stderr. Log verbosity follows
//! `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workout_tracker::{run_packages, sample_packages, WorkoutError, TRACKER_VERSION};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_logging();
    tracing::info!(version = TRACKER_VERSION, "starting tracker");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_packages(&sample_packages(), &mut out).and_then(|n| {
        out.flush()?;
        Ok(n)
    }) {
        Ok(count) => {
            tracing::info!(count, "processed workout packages");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "workout processing failed");
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

// Error report

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WorkoutError> for CliError {
    fn from(e: WorkoutError) -> Self {
        let (code, hint) = match &e {
            WorkoutError::UnknownWorkoutType { .. } => {
                ("UNKNOWN_WORKOUT_TYPE", Some("Use one of the listed codes"))
            }
            WorkoutError::EmptyData => ("EMPTY_DATA", Some("Supply the sensor fields")),
            WorkoutError::NullField { .. } => ("NULL_FIELD", Some("Sensor fields must be nonzero")),
            WorkoutError::InvalidField { .. } => {
                ("INVALID_FIELD", Some("Sensor fields must be finite and positive"))
            }
            WorkoutError::FieldCount { .. } => {
                ("FIELD_COUNT", Some("Check the field order for the workout type"))
            }
            WorkoutError::NonFiniteMetric { .. } => {
                ("METRIC_OVERFLOW", Some("Sensor fields are out of a realistic range"))
            }
            WorkoutError::Json(_) => ("JSON_ERROR", Some("Check JSON syntax")),
            WorkoutError::Io(_) => ("IO_ERROR", None),
        };

        CliError {
            code: code.to_string(),
            message: e.to_string(),
            hint: hint.map(str::to_string),
        }
    }
}
