mod build;
mod choices;
mod error;
mod loader;

pub use build::build_regressor;
pub use choices::{NoParams, RandomSubspacesParams, RegressorChoice, RegressorKind, SgdParams};
pub use error::BuildError;
pub use loader::{regressor_from_json_file, regressor_from_json_str, regressor_schema};
