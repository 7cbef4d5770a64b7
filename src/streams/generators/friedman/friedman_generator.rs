use std::f64::consts::PI;
use std::io::{Error, ErrorKind};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::core::attributes::{AttributeRef, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::stream::Stream;

const NUM_INPUTS: usize = 10;

/// Friedman #1 regression stream.
///
/// Ten inputs uniform in `[0, 1)`; only the first five are relevant:
/// `y = 10 sin(pi x1 x2) + 20 (x3 - 0.5)^2 + 10 x4 + 5 x5 + noise`.
#[derive(Debug)]
pub struct FriedmanGenerator {
    seed: u64,
    rng: StdRng,
    noise_std: f64,
    header: Arc<InstanceHeader>,
    max_instances: Option<usize>,
    produced: usize,
}

impl FriedmanGenerator {
    pub fn new(noise_std: f64, max_instances: Option<usize>, seed: u64) -> Result<Self, Error> {
        if !(noise_std.is_finite() && noise_std >= 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Noise standard deviation must be >= 0",
            ));
        }

        let mut attributes: Vec<AttributeRef> = (1..=NUM_INPUTS)
            .map(|i| Arc::new(NumericAttribute::new(format!("x{i}"))) as AttributeRef)
            .collect();
        attributes.push(Arc::new(NumericAttribute::new("y".into())) as AttributeRef);
        let header = Arc::new(InstanceHeader::new("Friedman1".into(), attributes, NUM_INPUTS));

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            noise_std,
            header,
            max_instances,
            produced: 0,
        })
    }

    pub fn target(x: &[f64]) -> f64 {
        10.0 * (PI * x[0] * x[1]).sin()
            + 20.0 * (x[2] - 0.5).powi(2)
            + 10.0 * x[3]
            + 5.0 * x[4]
    }
}

impl Stream for FriedmanGenerator {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.max_instances.is_none_or(|max| self.produced < max)
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        if !self.has_more_instances() {
            return None;
        }

        let mut values: Vec<f64> = (0..NUM_INPUTS).map(|_| self.rng.random()).collect();
        let mut y = Self::target(&values);
        if self.noise_std > 0.0 {
            let z: f64 = self.rng.sample(StandardNormal);
            y += self.noise_std * z;
        }
        values.push(y);

        self.produced += 1;
        Some(Box::new(DenseInstance::new(
            Arc::clone(&self.header),
            values,
            1.0,
        )))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
