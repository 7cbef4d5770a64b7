mod feature_subset;
mod projection;
mod random_subspaces_regressor;
mod subspace_member;

pub use feature_subset::FeatureSubset;
pub use projection::{ProjectedInstance, project};
pub use random_subspaces_regressor::{
    MAX_ENSEMBLE_SIZE, MAX_LAMBDA, MIN_LAMBDA, RandomSubspacesRegressor,
};
pub use subspace_member::SubspaceMember;
