use crate::core::instances::Instance;
use crate::regressors::RegressorError;
use rand::Rng;
use std::collections::BTreeSet;

/// Attribute positions a single ensemble member is allowed to see.
///
/// Indices are distinct, ascending, below the attribute count and never equal
/// to the class index. The attribute count and class index of the instance
/// that produced the subset are kept as the reference shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSubset {
    indices: Vec<usize>,
    number_of_attributes: usize,
    class_index: usize,
}

impl FeatureSubset {
    /// Number of features to select: `ceil(pct * num_features)`, with `pct`
    /// clamped to `[0, 1]` and at least one feature when any exists.
    pub fn subset_size(pct_features: f64, num_features: usize) -> usize {
        if num_features == 0 {
            return 0;
        }
        let pct = if pct_features.is_nan() {
            1.0
        } else {
            pct_features.clamp(0.0, 1.0)
        };
        let k = (pct * num_features as f64).ceil() as usize;
        k.clamp(1, num_features)
    }

    /// Draws a subset by rejection sampling: uniform positions over all
    /// attributes, discarding the class index, until `subset_size` distinct
    /// positions are collected. When every feature is requested the
    /// non-class positions are enumerated directly.
    pub fn select<R: Rng + ?Sized>(
        pct_features: f64,
        number_of_attributes: usize,
        class_index: usize,
        rng: &mut R,
    ) -> Self {
        let num_features = number_of_attributes.saturating_sub(1);
        let k = Self::subset_size(pct_features, num_features);

        let indices: Vec<usize> = if k == num_features {
            (0..number_of_attributes)
                .filter(|&i| i != class_index)
                .take(k)
                .collect()
        } else {
            let mut selected = BTreeSet::new();
            while selected.len() < k {
                let position = rng.random_range(0..number_of_attributes);
                if position != class_index {
                    selected.insert(position);
                }
            }
            selected.into_iter().collect()
        };

        Self {
            indices,
            number_of_attributes,
            class_index,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn number_of_attributes(&self) -> usize {
        self.number_of_attributes
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn number_of_features(&self) -> usize {
        self.number_of_attributes.saturating_sub(1)
    }

    /// True when the subset does not restrict anything.
    pub fn is_unfiltered(&self) -> bool {
        self.indices.len() >= self.number_of_features()
    }

    pub fn check_shape(&self, instance: &dyn Instance) -> Result<(), RegressorError> {
        if instance.number_of_attributes() != self.number_of_attributes
            || instance.class_index() != self.class_index
        {
            return Err(RegressorError::ShapeMismatch {
                expected_attributes: self.number_of_attributes,
                expected_class_index: self.class_index,
                found_attributes: instance.number_of_attributes(),
                found_class_index: instance.class_index(),
            });
        }
        Ok(())
    }
}
