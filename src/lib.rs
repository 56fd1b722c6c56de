//! Workout Tracker - derived fitness metrics from raw sensor readings
//!
//! The tracker turns a sensor package (a workout code plus positional numeric
//! fields) into a training summary: dispatch → metric formulas → formatting.
//!
//! ## Workout kinds
//!
//! - **RUN**: running, metrics from step count
//! - **WLK**: sports walking, calories adjusted by height
//! - **SWM**: swimming, speed derived from pool geometry

pub mod dispatch;
pub mod error;
pub mod formatter;
pub mod formulas;
pub mod pipeline;
pub mod types;

pub use dispatch::read_package;
pub use error::WorkoutError;
pub use pipeline::{parse_packages, process_package, run_packages, sample_packages, summarize};
pub use types::{Summary, WorkoutKind, WorkoutPackage, WorkoutSample};

/// Tracker version
pub const TRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");
