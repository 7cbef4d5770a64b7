mod sgd_regressor;
mod target_mean;

pub use sgd_regressor::SgdRegressor;
pub use target_mean::TargetMean;
