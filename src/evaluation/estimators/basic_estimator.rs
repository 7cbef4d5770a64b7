use crate::evaluation::estimators::Estimator;

/// Streaming weighted mean estimator: `mean = sum / len`, where `len` is the
/// total weight seen. NaN observations and non-positive or non-finite weights
/// are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: f64,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add_weighted(&mut self, v: f64, weight: f64) {
        if v.is_nan() || !weight.is_finite() || weight <= 0.0 {
            return;
        }
        self.len += weight;
        self.sum += v * weight;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_estimator_is_nan() {
        assert!(BasicEstimator::default().estimation().is_nan());
    }

    #[test]
    fn averages_and_skips_nan() {
        let mut e = BasicEstimator::default();
        e.add(1.0);
        e.add(f64::NAN);
        e.add(3.0);
        assert_eq!(e.estimation(), 2.0);
    }

    #[test]
    fn weights_scale_each_observation() {
        let mut e = BasicEstimator::default();
        e.add_weighted(1.0, 3.0);
        e.add_weighted(5.0, 1.0);
        e.add_weighted(100.0, 0.0);
        e.add_weighted(100.0, f64::NAN);
        assert_eq!(e.estimation(), 2.0);
    }
}
