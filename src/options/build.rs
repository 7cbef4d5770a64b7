use crate::options::{BuildError, RegressorChoice, RegressorKind};
use crate::regressors::{RandomSubspacesRegressor, Regressor, SgdRegressor, TargetMean};
use log::debug;

/// Validates `choice` and builds the regressor it describes, recursing into
/// the base learner of ensembles.
pub fn build_regressor(choice: RegressorChoice) -> Result<Box<dyn Regressor>, BuildError> {
    choice.validate()?;
    let kind = RegressorKind::from(&choice);
    debug!("building {kind} regressor");

    match choice {
        RegressorChoice::TargetMean(_) => Ok(Box::new(TargetMean::new())),
        RegressorChoice::Sgd(p) => Ok(Box::new(SgdRegressor::new(
            p.learning_rate,
            p.l2_regularization,
        )?)),
        RegressorChoice::RandomSubspaces(p) => {
            let base = build_regressor(*p.base_learner)?;
            Ok(Box::new(RandomSubspacesRegressor::new(
                base,
                p.ensemble_size,
                p.subspace_percentage,
                p.use_bagging,
                p.lambda,
                p.seed,
            )?))
        }
    }
}
