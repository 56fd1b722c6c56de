//! Metric formulas
//!
//! Pure functions deriving metrics from a workout sample:
//! - Distance from action count and per-kind step length
//! - Mean speed (pool-derived for swimming)
//! - Calories spent, with one formula per kind
//!
//! Each kind carries its own constant set; nothing is inherited between kinds.

use crate::types::{WorkoutKind, WorkoutSample};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Constant set used by the formulas of one workout kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaSet {
    /// Distance covered per action (metres)
    pub step_length_m: f64,
    /// First calorie coefficient
    pub calorie_coeff_1: f64,
    /// Second calorie coefficient
    pub calorie_coeff_2: f64,
}

pub const RUNNING: FormulaSet = FormulaSet {
    step_length_m: 0.65,
    calorie_coeff_1: 18.0,
    calorie_coeff_2: 20.0,
};

pub const SPORTS_WALKING: FormulaSet = FormulaSet {
    step_length_m: 0.65,
    calorie_coeff_1: 0.035,
    calorie_coeff_2: 0.029,
};

pub const SWIMMING: FormulaSet = FormulaSet {
    step_length_m: 1.38,
    calorie_coeff_1: 1.1,
    calorie_coeff_2: 2.0,
};

impl FormulaSet {
    /// Look up the constant set for a workout kind
    pub fn for_kind(kind: WorkoutKind) -> &'static FormulaSet {
        match kind {
            WorkoutKind::Running => &RUNNING,
            WorkoutKind::SportsWalking => &SPORTS_WALKING,
            WorkoutKind::Swimming => &SWIMMING,
        }
    }
}

/// Floor division computed from the exact remainder.
///
/// Flooring `a / b` directly goes wrong when the rounded quotient lands on a
/// whole number the true quotient falls short of (e.g. `169.0 / 0.1`).
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    // Remainder takes the sign of the dividend; floor needs the divisor's
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0f64.copysign(a / b);
    }

    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Distance covered (km): actions times step length
pub fn distance_km(sample: &WorkoutSample) -> f64 {
    let formulas = FormulaSet::for_kind(sample.kind());
    sample.action_units() * formulas.step_length_m / M_IN_KM
}

/// Mean speed (km/h)
///
/// Swimming ignores the stroke count and uses the pool geometry instead.
pub fn mean_speed_kmh(sample: &WorkoutSample) -> f64 {
    match *sample {
        WorkoutSample::Swimming {
            duration_hours,
            pool_length_m,
            pool_laps,
            ..
        } => pool_length_m * pool_laps / M_IN_KM / duration_hours,
        _ => distance_km(sample) / sample.duration_hours(),
    }
}

/// Calories spent (kcal)
pub fn calories(sample: &WorkoutSample) -> f64 {
    let formulas = FormulaSet::for_kind(sample.kind());
    let speed = mean_speed_kmh(sample);

    match *sample {
        WorkoutSample::Running {
            duration_hours,
            weight_kg,
            ..
        } => {
            (formulas.calorie_coeff_1 * speed - formulas.calorie_coeff_2) * weight_kg / M_IN_KM
                * duration_hours
                * MIN_IN_H
        }
        WorkoutSample::Walking {
            duration_hours,
            weight_kg,
            height_cm,
            ..
        } => {
            let speed_height_ratio = floor_div(speed * speed, height_cm);
            (formulas.calorie_coeff_1 * weight_kg
                + speed_height_ratio * formulas.calorie_coeff_2 * weight_kg)
                * duration_hours
                * MIN_IN_H
        }
        WorkoutSample::Swimming { weight_kg, .. } => {
            (speed + formulas.calorie_coeff_1) * formulas.calorie_coeff_2 * weight_kg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn running() -> WorkoutSample {
        WorkoutSample::Running {
            action_units: 15000.0,
            duration_hours: 1.0,
            weight_kg: 75.0,
        }
    }

    fn walking() -> WorkoutSample {
        WorkoutSample::Walking {
            action_units: 9000.0,
            duration_hours: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        }
    }

    fn swimming() -> WorkoutSample {
        WorkoutSample::Swimming {
            action_units: 720.0,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40.0,
        }
    }

    #[test]
    fn test_running_metrics() {
        let sample = running();
        assert!((distance_km(&sample) - 9.75).abs() < EPS);
        assert!((mean_speed_kmh(&sample) - 9.75).abs() < EPS);
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((calories(&sample) - 699.75).abs() < EPS);
    }

    #[test]
    fn test_walking_metrics() {
        let sample = walking();
        assert!((distance_km(&sample) - 5.85).abs() < EPS);
        assert!((mean_speed_kmh(&sample) - 5.85).abs() < EPS);
        // 5.85^2 / 180 floors to 0, leaving only the weight term
        assert!((calories(&sample) - 157.5).abs() < EPS);
    }

    #[test]
    fn test_walking_floor_division_keeps_whole_part() {
        // 36 km in 1 h: 36^2 / 180 = 7.2, floors to 7
        let sample = WorkoutSample::Walking {
            action_units: 36000.0 / 0.65,
            duration_hours: 1.0,
            weight_kg: 70.0,
            height_cm: 180.0,
        };
        let expected = (0.035 * 70.0 + 7.0 * 0.029 * 70.0) * 60.0;
        assert!((calories(&sample) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_floor_div_uses_exact_remainder() {
        // 169 / 0.1 rounds to 1690.0, but 0.1 is stored slightly above a tenth
        assert_eq!(floor_div(169.0, 0.1), 1689.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(1296.0, 180.0), 7.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
    }

    #[test]
    fn test_walking_calories_with_inexact_height() {
        // 13 km/h: 13^2 // 0.1 == 1689
        let sample = WorkoutSample::Walking {
            action_units: 5000.0,
            duration_hours: 0.25,
            weight_kg: 70.0,
            height_cm: 0.1,
        };
        let expected = (0.035 * 70.0 + 1689.0 * 0.029 * 70.0) * 0.25 * 60.0;
        assert!((calories(&sample) - expected).abs() < 1e-6);
        assert!((calories(&sample) - 51466.8).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_metrics() {
        let sample = swimming();
        assert!((distance_km(&sample) - 0.9936).abs() < EPS);
        assert!((mean_speed_kmh(&sample) - 1.0).abs() < EPS);
        assert!((calories(&sample) - 336.0).abs() < EPS);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let a = swimming();
        let b = WorkoutSample::Swimming {
            action_units: 5.0,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40.0,
        };
        assert_eq!(mean_speed_kmh(&a), mean_speed_kmh(&b));
    }

    #[test]
    fn test_speed_scales_with_duration() {
        let sample = WorkoutSample::Running {
            action_units: 15000.0,
            duration_hours: 2.0,
            weight_kg: 75.0,
        };
        assert!((mean_speed_kmh(&sample) - 4.875).abs() < EPS);
    }

    #[test]
    fn test_formula_table_lookup() {
        assert_eq!(FormulaSet::for_kind(WorkoutKind::Running).step_length_m, 0.65);
        assert_eq!(
            FormulaSet::for_kind(WorkoutKind::SportsWalking).step_length_m,
            0.65
        );
        assert_eq!(FormulaSet::for_kind(WorkoutKind::Swimming).step_length_m, 1.38);
    }
}
