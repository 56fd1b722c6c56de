//! Summary rendering
//!
//! Renders a computed summary into the fixed human-readable message, or into
//! JSON for machine consumers.

use std::fmt;

use crate::error::WorkoutError;
use crate::types::Summary;

impl Summary {
    /// Human-readable training message with three decimals per metric
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Serialize the summary to a JSON object
    pub fn to_json(&self) -> Result<String, WorkoutError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
