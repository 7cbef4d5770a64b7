use crate::options::{RegressorChoice, build_regressor};
use crate::regressors::Regressor;
use anyhow::{Context, Result};
use schemars::{Schema, schema_for};
use std::fs;
use std::path::Path;

/// JSON schema of every regressor configuration.
pub fn regressor_schema() -> Schema {
    schema_for!(RegressorChoice)
}

pub fn regressor_from_json_str(json: &str) -> Result<Box<dyn Regressor>> {
    let choice: RegressorChoice =
        serde_json::from_str(json).context("failed to parse regressor configuration")?;
    build_regressor(choice).context("failed to build regressor")
}

pub fn regressor_from_json_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn Regressor>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read regressor configuration {}", path.display()))?;
    regressor_from_json_str(&text)
}
