mod error;
pub mod functions;
pub mod meta;
pub mod regressor;

pub use error::RegressorError;
pub use functions::{SgdRegressor, TargetMean};
pub use meta::RandomSubspacesRegressor;
pub use regressor::Regressor;
