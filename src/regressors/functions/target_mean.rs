use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::regressors::{Regressor, RegressorError};
use log::warn;
use std::sync::Arc;

/// Predicts the weighted mean of every target seen so far.
#[derive(Debug, Clone, Default)]
pub struct TargetMean {
    sum_of_targets: f64,
    sum_of_weights: f64,
}

impl TargetMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight_seen(&self) -> f64 {
        self.sum_of_weights
    }
}

impl Regressor for TargetMean {
    fn get_vote_for_instance(&self, _instance: &dyn Instance) -> Result<f64, RegressorError> {
        if self.sum_of_weights > 0.0 {
            Ok(self.sum_of_targets / self.sum_of_weights)
        } else {
            Ok(0.0)
        }
    }

    fn set_model_context(&mut self, _header: Arc<InstanceHeader>) {}

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), RegressorError> {
        let Some(target) = instance.class_value().filter(|v| !v.is_nan()) else {
            warn!("target mean skipped an instance with a missing class value");
            return Ok(());
        };
        let weight = instance.weight();
        if !weight.is_finite() || weight <= 0.0 {
            return Ok(());
        }
        self.sum_of_targets += target * weight;
        self.sum_of_weights += weight;
        Ok(())
    }

    fn reset_learning(&mut self) {
        self.sum_of_targets = 0.0;
        self.sum_of_weights = 0.0;
    }

    fn copy(&self) -> Box<dyn Regressor> {
        Box::new(self.clone())
    }
}
