use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::regressors::RegressorError;
use std::sync::Arc;

/// Online regressor trained one instance at a time.
///
/// Ensembles only talk to their members through this trait, so any
/// implementation can be used as a base learner.
pub trait Regressor {
    fn get_vote_for_instance(&self, instance: &dyn Instance) -> Result<f64, RegressorError>;

    fn set_model_context(&mut self, header: Arc<InstanceHeader>);

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), RegressorError>;

    /// Forgets everything learned so far, keeping the configuration.
    fn reset_learning(&mut self);

    /// Independent copy of this learner, including its learned state.
    fn copy(&self) -> Box<dyn Regressor>;
}

impl Clone for Box<dyn Regressor> {
    fn clone(&self) -> Self {
        self.copy()
    }
}
