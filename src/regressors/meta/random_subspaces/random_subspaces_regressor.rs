use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::evaluation::Measurement;
use crate::regressors::meta::random_subspaces::{FeatureSubset, SubspaceMember};
use crate::regressors::{Regressor, RegressorError};
use crate::utils::math::poisson;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub const MAX_ENSEMBLE_SIZE: usize = 10_000;
pub const MIN_LAMBDA: f64 = 1.0;
pub const MAX_LAMBDA: f64 = 10.0;

/// Random subspaces ensemble for regression, optionally with online bagging.
///
/// Every member wraps an independent copy of the base learner restricted to a
/// random feature subset. Predictions are the mean of the member votes. With
/// bagging enabled each member trains on an instance `Poisson(lambda)` times.
///
/// All randomness comes from one `StdRng` seeded with `seed` on every reset.
/// Members receive their subset seeds from it in order at reset time, and
/// the remaining stream drives the bagging draws.
#[derive(Clone)]
pub struct RandomSubspacesRegressor {
    base_learner: Box<dyn Regressor>,
    ensemble_size: usize,
    subspace_percentage: f64,
    use_bagging: bool,
    lambda: f64,
    seed: u64,
    rng: StdRng,
    ensemble: Vec<SubspaceMember>,
    header: Option<Arc<InstanceHeader>>,
}

impl RandomSubspacesRegressor {
    pub fn new(
        base_learner: Box<dyn Regressor>,
        ensemble_size: usize,
        subspace_percentage: f64,
        use_bagging: bool,
        lambda: f64,
        seed: u64,
    ) -> Result<Self, RegressorError> {
        if !(1..=MAX_ENSEMBLE_SIZE).contains(&ensemble_size) {
            return Err(RegressorError::InvalidParameter(format!(
                "ensemble size must be in [1, {MAX_ENSEMBLE_SIZE}], got {ensemble_size}"
            )));
        }
        if !(0.0..=1.0).contains(&subspace_percentage) {
            return Err(RegressorError::InvalidParameter(format!(
                "subspace percentage must be in [0, 1], got {subspace_percentage}"
            )));
        }
        if !(MIN_LAMBDA..=MAX_LAMBDA).contains(&lambda) {
            return Err(RegressorError::InvalidParameter(format!(
                "lambda must be in [{MIN_LAMBDA}, {MAX_LAMBDA}], got {lambda}"
            )));
        }

        let mut regressor = Self {
            base_learner,
            ensemble_size,
            subspace_percentage,
            use_bagging,
            lambda,
            seed,
            rng: StdRng::seed_from_u64(seed),
            ensemble: Vec::with_capacity(ensemble_size),
            header: None,
        };
        regressor.reset_learning();
        Ok(regressor)
    }

    pub fn ensemble_size(&self) -> usize {
        self.ensemble.len()
    }

    pub fn members(&self) -> &[SubspaceMember] {
        &self.ensemble
    }

    /// Subsets of every member, `None` for members that have not seen an
    /// instance yet.
    pub fn feature_subsets(&self) -> Vec<Option<&FeatureSubset>> {
        self.ensemble.iter().map(|m| m.feature_subset()).collect()
    }

    pub fn model_measurements(&self) -> Vec<Measurement> {
        let materialized = self
            .ensemble
            .iter()
            .filter(|m| m.feature_subset().is_some())
            .count();
        vec![
            Measurement::new("ensemble size", self.ensemble.len() as f64),
            Measurement::new("members with subsets", materialized as f64),
        ]
    }

    fn replications(&mut self) -> usize {
        if self.use_bagging {
            poisson(self.lambda, &mut self.rng)
        } else {
            1
        }
    }
}

impl Regressor for RandomSubspacesRegressor {
    fn get_vote_for_instance(&self, instance: &dyn Instance) -> Result<f64, RegressorError> {
        let mut output = 0.0;
        for member in &self.ensemble {
            output += member.vote(instance)?;
        }
        Ok(output / self.ensemble.len() as f64)
    }

    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.base_learner.set_model_context(Arc::clone(&header));
        for member in &mut self.ensemble {
            member.set_model_context(Arc::clone(&header));
        }
        self.header = Some(header);
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), RegressorError> {
        for i in 0..self.ensemble.len() {
            let k = self.replications();
            trace!("member {i} trains {k} time(s)");
            let member = &mut self.ensemble[i];
            for _ in 0..k {
                member.train_one(instance)?;
            }
        }
        Ok(())
    }

    fn reset_learning(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.ensemble.clear();
        for _ in 0..self.ensemble_size {
            let subset_seed: u64 = self.rng.random();
            let mut member = SubspaceMember::new(
                self.base_learner.copy(),
                self.subspace_percentage,
                subset_seed,
            );
            if let Some(header) = &self.header {
                member.set_model_context(Arc::clone(header));
            }
            self.ensemble.push(member);
        }
        debug!(
            "random subspaces ensemble reset: {} members, subspace percentage {}, bagging {} (lambda {}), seed {}",
            self.ensemble_size, self.subspace_percentage, self.use_bagging, self.lambda, self.seed
        );
    }

    fn copy(&self) -> Box<dyn Regressor> {
        Box::new(self.clone())
    }
}
