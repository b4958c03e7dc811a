//! Functions that can be sampled by a plot surface.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A unary real-to-real function evaluated once per sample.
pub trait SampleFunction {
    fn eval(&self, x: f64) -> f64;
}

impl<F> SampleFunction for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// `h(t) = 3π·exp(−5·sin(2πt))`
pub fn exercise(t: f64) -> f64 {
    3.0 * PI * (-5.0 * (2.0 * PI * t).sin()).exp()
}

/// Built-in functions selectable from configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionPreset {
    /// The exercise expression, see [`exercise`].
    #[default]
    Exercise,
    /// `sin(2πt)`
    Sine,
}

impl FunctionPreset {
    pub fn into_function(self) -> Box<dyn SampleFunction> {
        match self {
            FunctionPreset::Exercise => Box::new(exercise),
            FunctionPreset::Sine => Box::new(|t: f64| (2.0 * PI * t).sin()),
        }
    }

    /// Label shown on the Y axis by default.
    pub fn label(self) -> &'static str {
        match self {
            FunctionPreset::Exercise => "h(t)",
            FunctionPreset::Sine => "sin(2πt)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_at_zero_is_three_pi() {
        assert!((exercise(0.0) - 3.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn exercise_peaks_at_three_quarters() {
        // sin(2π·0.75) = -1, so the exponent is +5.
        let expected = 3.0 * PI * 5f64.exp();
        assert!((exercise(0.75) - expected).abs() < 1e-9);
    }

    #[test]
    fn closures_are_sample_functions() {
        let f = |x: f64| 2.0 * x;
        assert_eq!(f.eval(1.5), 3.0);
    }

    #[test]
    fn preset_round_trips_through_boxed_function() {
        let f = FunctionPreset::Sine.into_function();
        assert!(f.eval(0.0).abs() < 1e-12);
        assert!((f.eval(0.25) - 1.0).abs() < 1e-12);
    }
}
