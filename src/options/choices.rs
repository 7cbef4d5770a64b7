use crate::options::BuildError;
use crate::regressors::meta::random_subspaces::{MAX_ENSEMBLE_SIZE, MAX_LAMBDA, MIN_LAMBDA};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Empty parameter object for learners without options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

fn default_learning_rate() -> f64 {
    0.01
}
fn default_l2_regularization() -> f64 {
    0.0
}
fn default_ensemble_size() -> usize {
    10
}
fn default_base_learner() -> Box<RegressorChoice> {
    Box::new(RegressorChoice::Sgd(SgdParams::default()))
}
fn default_subspace_percentage() -> f64 {
    1.0
}
fn default_lambda() -> f64 {
    1.0
}
fn default_seed() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SgdParams {
    #[serde(default = "default_learning_rate")]
    #[schemars(
        title = "Learning rate",
        description = "Step size of each gradient update (> 0)."
    )]
    pub learning_rate: f64,

    #[serde(default = "default_l2_regularization")]
    #[schemars(
        title = "L2 regularization",
        description = "Weight decay applied on every update (>= 0)."
    )]
    pub l2_regularization: f64,
}

impl Default for SgdParams {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            l2_regularization: default_l2_regularization(),
        }
    }
}

impl SgdParams {
    pub fn validate(&self) -> Result<(), BuildError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(BuildError::InvalidParameter(format!(
                "learning_rate must be > 0, got {}",
                self.learning_rate
            )));
        }
        if !(self.l2_regularization.is_finite() && self.l2_regularization >= 0.0) {
            return Err(BuildError::InvalidParameter(format!(
                "l2_regularization must be >= 0, got {}",
                self.l2_regularization
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RandomSubspacesParams {
    #[serde(default = "default_ensemble_size")]
    #[schemars(
        title = "Ensemble size",
        description = "Number of members in the ensemble.",
        range(min = 1, max = 10000)
    )]
    pub ensemble_size: usize,

    #[serde(default = "default_base_learner")]
    #[schemars(
        title = "Base learner",
        description = "Regressor copied into every member."
    )]
    pub base_learner: Box<RegressorChoice>,

    #[serde(default = "default_subspace_percentage")]
    #[schemars(
        title = "Subspace percentage",
        description = "Share of the features each member sees. 1 = all features.",
        range(min = 0.0, max = 1.0)
    )]
    pub subspace_percentage: f64,

    #[serde(default)]
    #[schemars(
        title = "Use bagging?",
        description = "Replay each instance Poisson(lambda) times per member."
    )]
    pub use_bagging: bool,

    #[serde(default = "default_lambda")]
    #[schemars(
        title = "Lambda",
        description = "Poisson rate for online bagging.",
        range(min = 1.0, max = 10.0)
    )]
    pub lambda: f64,

    #[serde(default = "default_seed")]
    #[schemars(
        title = "Random seed",
        description = "Seed for feature subsets and bagging draws."
    )]
    pub seed: u64,
}

impl Default for RandomSubspacesParams {
    fn default() -> Self {
        Self {
            ensemble_size: default_ensemble_size(),
            base_learner: default_base_learner(),
            subspace_percentage: default_subspace_percentage(),
            use_bagging: false,
            lambda: default_lambda(),
            seed: default_seed(),
        }
    }
}

impl RandomSubspacesParams {
    /// Checks every range before any ensemble is built, including the base
    /// learner's own parameters.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !(1..=MAX_ENSEMBLE_SIZE).contains(&self.ensemble_size) {
            return Err(BuildError::InvalidParameter(format!(
                "ensemble_size must be in [1, {MAX_ENSEMBLE_SIZE}], got {}",
                self.ensemble_size
            )));
        }
        if !(0.0..=1.0).contains(&self.subspace_percentage) {
            return Err(BuildError::InvalidParameter(format!(
                "subspace_percentage must be in [0, 1], got {}",
                self.subspace_percentage
            )));
        }
        if !(MIN_LAMBDA..=MAX_LAMBDA).contains(&self.lambda) {
            return Err(BuildError::InvalidParameter(format!(
                "lambda must be in [{MIN_LAMBDA}, {MAX_LAMBDA}], got {}",
                self.lambda
            )));
        }
        self.base_learner.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(RegressorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum RegressorChoice {
    #[strum_discriminants(strum(
        message = "Target Mean",
        detailed_message = "Predicts the running mean of the target."
    ))]
    TargetMean(NoParams),
    #[strum_discriminants(strum(
        message = "SGD Linear Regressor",
        detailed_message = "Online linear regression trained by stochastic gradient descent."
    ))]
    Sgd(SgdParams),
    #[strum_discriminants(strum(
        message = "Random Subspaces Regressor",
        detailed_message = "Ensemble of base regressors on random feature subsets, with optional online bagging."
    ))]
    RandomSubspaces(RandomSubspacesParams),
}

impl Default for RegressorChoice {
    fn default() -> Self {
        Self::RandomSubspaces(RandomSubspacesParams::default())
    }
}

impl RegressorChoice {
    pub fn validate(&self) -> Result<(), BuildError> {
        match self {
            RegressorChoice::TargetMean(_) => Ok(()),
            RegressorChoice::Sgd(p) => p.validate(),
            RegressorChoice::RandomSubspaces(p) => p.validate(),
        }
    }
}
