/// Online scalar estimator (e.g., streaming mean).
pub trait Estimator {
    /// Incorporates a new observation with unit weight.
    fn add(&mut self, v: f64) {
        self.add_weighted(v, 1.0);
    }

    /// Incorporates a new observation counted `weight` times.
    fn add_weighted(&mut self, v: f64, weight: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> f64;
}
