use rand::Rng;
use rand_distr::StandardNormal;

/// Draws from `Poisson(lambda)`.
///
/// Below `lambda = 100` this inverts the cumulative distribution by
/// multiplication, capped at `max(100, 10 * ceil(lambda))` terms. Larger rates
/// use the normal approximation, clamped at zero.
pub fn poisson<R: Rng + ?Sized>(lambda: f64, rng: &mut R) -> usize {
    if lambda < 100.0 {
        let mut product = 1.0;
        let mut sum = 1.0;
        let threshold = rng.random::<f64>() * lambda.exp();
        let max = 100.max(10 * lambda.ceil() as usize);
        let mut i = 1;
        while i < max && sum <= threshold {
            product *= lambda / i as f64;
            sum += product;
            i += 1;
        }
        return i - 1;
    }
    let z: f64 = rng.sample(StandardNormal);
    let x = lambda + lambda.sqrt() * z;
    if x < 0.0 { 0 } else { x.floor() as usize }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        (mean, var)
    }

    #[test]
    fn poisson_matches_its_rate_for_small_lambda() {
        let mut rng = StdRng::seed_from_u64(10);
        for lambda in [1.0, 3.0, 6.0, 10.0] {
            let draws: Vec<f64> = (0..20_000).map(|_| poisson(lambda, &mut rng) as f64).collect();
            let (mean, var) = mean_and_variance(&draws);
            assert!((mean - lambda).abs() < 0.05 * lambda + 0.05, "lambda={lambda} mean={mean}");
            assert!((var - lambda).abs() < 0.1 * lambda + 0.1, "lambda={lambda} var={var}");
        }
    }

    #[test]
    fn poisson_with_unit_rate_yields_zeros_and_repeats() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws: Vec<usize> = (0..5_000).map(|_| poisson(1.0, &mut rng)).collect();
        let zeros = draws.iter().filter(|&&k| k == 0).count() as f64 / draws.len() as f64;
        assert!((zeros - (-1.0f64).exp()).abs() < 0.03, "P(0)={zeros}");
        assert!(draws.iter().any(|&k| k > 1));
    }

    #[test]
    fn poisson_large_lambda_uses_normal_approximation() {
        let mut rng = StdRng::seed_from_u64(12);
        let draws: Vec<f64> = (0..10_000).map(|_| poisson(400.0, &mut rng) as f64).collect();
        let (mean, var) = mean_and_variance(&draws);
        assert!((mean - 400.0).abs() < 2.0, "mean={mean}");
        assert!((var - 400.0).abs() < 40.0, "var={var}");
    }

    #[test]
    fn poisson_is_reproducible_with_same_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let xs: Vec<usize> = (0..100).map(|_| poisson(2.5, &mut a)).collect();
        let ys: Vec<usize> = (0..100).map(|_| poisson(2.5, &mut b)).collect();
        assert_eq!(xs, ys);
    }
}
