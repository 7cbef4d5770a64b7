use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::regressors::{Regressor, RegressorError};
use log::{debug, warn};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Encoding {
    Numeric,
    Nominal(usize),
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    attribute: usize,
    offset: usize,
    encoding: Encoding,
}

/// Online linear regression fitted by stochastic gradient descent on the
/// squared loss.
///
/// Numeric attributes get one weight each; nominal attributes are one-hot
/// encoded using the levels declared in the header. The class attribute is
/// skipped and missing values contribute nothing.
#[derive(Debug, Clone)]
pub struct SgdRegressor {
    learning_rate: f64,
    l2_regularization: f64,
    slots: Option<Vec<Slot>>,
    weights: Vec<f64>,
    bias: f64,
    instances_seen: u64,
}

impl SgdRegressor {
    pub fn new(learning_rate: f64, l2_regularization: f64) -> Result<Self, RegressorError> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(RegressorError::InvalidParameter(format!(
                "learning rate must be > 0, got {learning_rate}"
            )));
        }
        if !(l2_regularization.is_finite() && l2_regularization >= 0.0) {
            return Err(RegressorError::InvalidParameter(format!(
                "l2 regularization must be >= 0, got {l2_regularization}"
            )));
        }
        Ok(Self {
            learning_rate,
            l2_regularization,
            slots: None,
            weights: Vec::new(),
            bias: 0.0,
            instances_seen: 0,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn instances_seen(&self) -> u64 {
        self.instances_seen
    }

    fn layout_for(header: &InstanceHeader) -> (Vec<Slot>, usize) {
        let mut slots = Vec::with_capacity(header.number_of_attributes());
        let mut offset = 0;
        for (attribute, attr) in header.attributes.iter().enumerate() {
            if attribute == header.class_index() {
                continue;
            }
            let encoding = match attr.as_any().downcast_ref::<NominalAttribute>() {
                Some(nominal) => Encoding::Nominal(nominal.number_of_values()),
                None => Encoding::Numeric,
            };
            slots.push(Slot {
                attribute,
                offset,
                encoding,
            });
            offset += match encoding {
                Encoding::Numeric => 1,
                Encoding::Nominal(n) => n,
            };
        }
        (slots, offset)
    }

    fn install_layout(&mut self, header: &InstanceHeader) {
        let (slots, width) = Self::layout_for(header);
        debug!(
            "sgd regressor sized to {width} weights for relation '{}'",
            header.relation_name()
        );
        self.slots = Some(slots);
        self.weights = vec![0.0; width];
    }

    fn features(slots: &[Slot], instance: &dyn Instance) -> Vec<(usize, f64)> {
        let mut out = Vec::with_capacity(slots.len());
        for slot in slots {
            let Some(v) = instance.value_at_index(slot.attribute) else {
                continue;
            };
            if v.is_nan() {
                continue;
            }
            match slot.encoding {
                Encoding::Numeric => out.push((slot.offset, v)),
                Encoding::Nominal(levels) => {
                    if v >= 0.0 && (v as usize) < levels {
                        out.push((slot.offset + v as usize, 1.0));
                    }
                }
            }
        }
        out
    }

    fn dot(&self, features: &[(usize, f64)]) -> f64 {
        features
            .iter()
            .fold(self.bias, |acc, &(j, x)| acc + self.weights[j] * x)
    }
}

impl Default for SgdRegressor {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            l2_regularization: 0.0,
            slots: None,
            weights: Vec::new(),
            bias: 0.0,
            instances_seen: 0,
        }
    }
}

impl Regressor for SgdRegressor {
    fn get_vote_for_instance(&self, instance: &dyn Instance) -> Result<f64, RegressorError> {
        match &self.slots {
            Some(slots) => Ok(self.dot(&Self::features(slots, instance))),
            None => Ok(self.bias),
        }
    }

    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.install_layout(&header);
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), RegressorError> {
        let Some(target) = instance.class_value().filter(|v| !v.is_nan()) else {
            warn!("sgd regressor skipped an instance with a missing class value");
            return Ok(());
        };
        if self.slots.is_none() {
            self.install_layout(instance.header());
        }
        let features = match &self.slots {
            Some(slots) => Self::features(slots, instance),
            None => Vec::new(),
        };

        let error = target - self.dot(&features);
        if !error.is_finite() {
            return Err(RegressorError::Learner(format!(
                "sgd regressor diverged after {} instances",
                self.instances_seen
            )));
        }

        let step = self.learning_rate * instance.weight();
        let decay = self.learning_rate * self.l2_regularization;
        for (j, x) in features {
            self.weights[j] += step * error * x - decay * self.weights[j];
        }
        self.bias += step * error;
        self.instances_seen += 1;
        Ok(())
    }

    fn reset_learning(&mut self) {
        self.slots = None;
        self.weights.clear();
        self.bias = 0.0;
        self.instances_seen = 0;
    }

    fn copy(&self) -> Box<dyn Regressor> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;
    use crate::testing::dummies::{header_mixed, header_numeric};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn rejects_invalid_hyperparameters() {
        assert!(matches!(
            SgdRegressor::new(0.0, 0.0),
            Err(RegressorError::InvalidParameter(_))
        ));
        assert!(matches!(
            SgdRegressor::new(f64::NAN, 0.0),
            Err(RegressorError::InvalidParameter(_))
        ));
        assert!(matches!(
            SgdRegressor::new(0.1, -1.0),
            Err(RegressorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn untrained_model_predicts_zero() {
        let sgd = SgdRegressor::default();
        let inst = DenseInstance::new(header_numeric(2), vec![1.0, 2.0, 3.0], 1.0);
        assert_eq!(sgd.get_vote_for_instance(&inst).unwrap(), 0.0);
    }

    #[test]
    fn learns_a_linear_function() {
        let header = header_numeric(2);
        let mut sgd = SgdRegressor::new(0.1, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5000 {
            let x0: f64 = rng.random();
            let x1: f64 = rng.random();
            let y = 1.0 + 2.0 * x0 + 3.0 * x1;
            sgd.train_on_instance(&DenseInstance::new(Arc::clone(&header), vec![x0, x1, y], 1.0))
                .unwrap();
        }

        let probe = DenseInstance::new(header, vec![0.5, 0.5, 0.0], 1.0);
        let got = sgd.get_vote_for_instance(&probe).unwrap();
        assert!((got - 3.5).abs() < 0.05, "got={got}");
        assert_eq!(sgd.weights().len(), 2);
        assert_eq!(sgd.instances_seen(), 5000);
    }

    #[test]
    fn one_hot_encodes_nominal_attributes_from_the_header() {
        let header = header_mixed();
        let mut sgd = SgdRegressor::new(0.1, 0.0).unwrap();
        sgd.set_model_context(Arc::clone(&header));
        assert_eq!(sgd.weights().len(), 4);

        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..3000 {
            let x: f64 = rng.random();
            let color = (i % 3) as f64;
            let y = if color == 1.0 { 10.0 } else { 0.0 };
            sgd.train_on_instance(&DenseInstance::new(Arc::clone(&header), vec![x, color, y], 1.0))
                .unwrap();
        }

        let blue = DenseInstance::new(Arc::clone(&header), vec![0.5, 1.0, 0.0], 1.0);
        let red = DenseInstance::new(header, vec![0.5, 0.0, 0.0], 1.0);
        assert!((sgd.get_vote_for_instance(&blue).unwrap() - 10.0).abs() < 0.1);
        assert!(sgd.get_vote_for_instance(&red).unwrap().abs() < 0.1);
    }

    #[test]
    fn divergence_is_reported_as_learner_error() {
        let header = header_numeric(1);
        let mut sgd = SgdRegressor::new(10.0, 0.0).unwrap();
        let failed = (0..500).any(|_| {
            sgd.train_on_instance(&DenseInstance::new(
                Arc::clone(&header),
                vec![1000.0, 1.0],
                1.0,
            ))
            .is_err()
        });
        assert!(failed);
    }

    #[test]
    fn reset_forgets_weights() {
        let header = header_numeric(1);
        let mut sgd = SgdRegressor::default();
        sgd.train_on_instance(&DenseInstance::new(Arc::clone(&header), vec![1.0, 4.0], 1.0))
            .unwrap();
        assert!(sgd.bias() != 0.0);
        sgd.reset_learning();
        assert_eq!(sgd.bias(), 0.0);
        assert!(sgd.weights().is_empty());
        assert_eq!(sgd.instances_seen(), 0);
    }
}
