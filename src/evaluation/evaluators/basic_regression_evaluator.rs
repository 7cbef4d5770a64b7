use crate::core::instances::Instance;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};

/// Basic online regression evaluator.
///
/// Tracks mean absolute error and root mean squared error of the
/// predictions, each weighted by the example weight, plus the number of
/// examples that were scored.
pub struct BasicRegressionEvaluator<E: Estimator + Default> {
    absolute_error: E,
    squared_error: E,
    instances: u64,
}

impl<E: Estimator + Default> BasicRegressionEvaluator<E> {
    pub fn new() -> Self {
        Self {
            absolute_error: E::default(),
            squared_error: E::default(),
            instances: 0,
        }
    }
}

impl<E: Estimator + Default> Default for BasicRegressionEvaluator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicRegressionEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn add_result(&mut self, example: &dyn Instance, prediction: f64) {
        let Some(target) = example.class_value().filter(|v| !v.is_nan()) else {
            return;
        };
        if !prediction.is_finite() {
            return;
        }
        let weight = example.weight();
        let error = target - prediction;
        self.absolute_error.add_weighted(error.abs(), weight);
        self.squared_error.add_weighted(error * error, weight);
        self.instances += 1;
    }

    fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("instances", self.instances as f64),
            Measurement::new("mae", self.absolute_error.estimation()),
            Measurement::new("rmse", self.squared_error.estimation().sqrt()),
        ]
    }
}
