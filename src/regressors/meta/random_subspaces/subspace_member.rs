use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::regressors::meta::random_subspaces::{FeatureSubset, project};
use crate::regressors::{Regressor, RegressorError};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, OnceLock};

/// One ensemble member: a base learner that only sees a fixed random subset
/// of the features.
///
/// The subset is drawn on the first call to [`vote`](Self::vote) or
/// [`train_one`](Self::train_one), from a private RNG seeded with
/// `subset_seed`, and never changes afterwards.
#[derive(Clone)]
pub struct SubspaceMember {
    learner: Box<dyn Regressor>,
    pct_features: f64,
    subset_seed: u64,
    subset: OnceLock<FeatureSubset>,
}

impl SubspaceMember {
    pub fn new(mut learner: Box<dyn Regressor>, pct_features: f64, subset_seed: u64) -> Self {
        learner.reset_learning();
        Self {
            learner,
            pct_features,
            subset_seed,
            subset: OnceLock::new(),
        }
    }

    pub fn feature_subset(&self) -> Option<&FeatureSubset> {
        self.subset.get()
    }

    pub fn learner(&self) -> &dyn Regressor {
        self.learner.as_ref()
    }

    pub fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.learner.set_model_context(header);
    }

    pub fn vote(&self, instance: &dyn Instance) -> Result<f64, RegressorError> {
        let subset = materialize(&self.subset, self.pct_features, self.subset_seed, instance);
        let view = project(instance, Some(subset))?;
        self.learner.get_vote_for_instance(view.as_instance())
    }

    pub fn train_one(&mut self, instance: &dyn Instance) -> Result<(), RegressorError> {
        let subset = materialize(&self.subset, self.pct_features, self.subset_seed, instance);
        let view = project(instance, Some(subset))?;
        self.learner.train_on_instance(view.as_instance())
    }
}

fn materialize<'s>(
    slot: &'s OnceLock<FeatureSubset>,
    pct_features: f64,
    subset_seed: u64,
    instance: &dyn Instance,
) -> &'s FeatureSubset {
    slot.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(subset_seed);
        let subset = FeatureSubset::select(
            pct_features,
            instance.number_of_attributes(),
            instance.class_index(),
            &mut rng,
        );
        debug!(
            "subspace member selected {} of {} features: {:?}",
            subset.len(),
            subset.number_of_features(),
            subset.indices()
        );
        subset
    })
}
