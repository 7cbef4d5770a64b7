use crate::core::instances::Instance;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Online evaluator of regression performance.
///
/// Consumes ground-truth examples and the prediction made for them before
/// training, and exposes aggregated metrics via [`performance`].
pub trait PerformanceEvaluator {
    /// Clears internal state/metrics.
    fn reset(&mut self);

    /// Feeds one labeled example and the prediction made for it. Examples
    /// with a missing target or a non-finite prediction may be skipped.
    fn add_result(&mut self, example: &dyn Instance, prediction: f64);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map: HashMap<_, _> = self
            .performance()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
