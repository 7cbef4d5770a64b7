use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::regressors::{Regressor, RegressorError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct SpyState {
    next_id: usize,
    trained: Vec<(usize, Vec<f64>)>,
}

/// Shared record of every training call made on a spy and its copies.
#[derive(Clone, Default)]
pub struct SpyLog(Arc<Mutex<SpyState>>);

impl SpyLog {
    /// `(learner id, dense values of the instance it saw)` in call order.
    pub fn trained_rows(&self) -> Vec<(usize, Vec<f64>)> {
        self.0.lock().map(|s| s.trained.clone()).unwrap_or_default()
    }

    /// Training calls per learner id, for learners trained at least once.
    pub fn train_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for (id, _) in self.trained_rows() {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }

    fn next_id(&self) -> usize {
        let mut state = self.0.lock().expect("spy log poisoned");
        let id = state.next_id;
        state.next_id += 1;
        id
    }
}

/// Regressor that records what it is trained on. Every copy gets a fresh id
/// and shares the same [`SpyLog`]. Its vote is the number of training calls
/// it received since the last reset.
pub struct SpyRegressor {
    id: usize,
    trained: usize,
    log: SpyLog,
}

impl SpyRegressor {
    pub fn new() -> (Self, SpyLog) {
        let log = SpyLog::default();
        let spy = Self {
            id: log.next_id(),
            trained: 0,
            log: log.clone(),
        };
        (spy, log)
    }
}

impl Regressor for SpyRegressor {
    fn get_vote_for_instance(&self, _instance: &dyn Instance) -> Result<f64, RegressorError> {
        Ok(self.trained as f64)
    }

    fn set_model_context(&mut self, _header: Arc<InstanceHeader>) {}

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), RegressorError> {
        self.trained += 1;
        self.log
            .0
            .lock()
            .expect("spy log poisoned")
            .trained
            .push((self.id, instance.to_vec()));
        Ok(())
    }

    fn reset_learning(&mut self) {
        self.trained = 0;
    }

    fn copy(&self) -> Box<dyn Regressor> {
        Box::new(Self {
            id: self.log.next_id(),
            trained: self.trained,
            log: self.log.clone(),
        })
    }
}
