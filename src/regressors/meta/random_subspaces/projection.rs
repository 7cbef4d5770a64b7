use crate::core::instances::{FilteredSparseInstance, Instance};
use crate::regressors::RegressorError;
use crate::regressors::meta::random_subspaces::FeatureSubset;
use std::sync::Arc;

/// View of an instance handed to a subspace member's learner.
pub enum ProjectedInstance<'a> {
    /// No restriction applies; the caller's instance is passed through.
    Unfiltered(&'a dyn Instance),
    Filtered(FilteredSparseInstance),
}

impl ProjectedInstance<'_> {
    pub fn as_instance(&self) -> &dyn Instance {
        match self {
            ProjectedInstance::Unfiltered(instance) => *instance,
            ProjectedInstance::Filtered(filtered) => filtered,
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, ProjectedInstance::Filtered(_))
    }
}

/// Restricts `instance` to the positions of `subset` plus the class.
///
/// Without a subset, or when the subset covers every feature, the instance is
/// borrowed unchanged. Otherwise a sparse copy is built that keeps the
/// original attribute count and header.
pub fn project<'a>(
    instance: &'a dyn Instance,
    subset: Option<&FeatureSubset>,
) -> Result<ProjectedInstance<'a>, RegressorError> {
    let Some(subset) = subset else {
        return Ok(ProjectedInstance::Unfiltered(instance));
    };
    subset.check_shape(instance)?;
    if subset.is_unfiltered() {
        return Ok(ProjectedInstance::Unfiltered(instance));
    }

    let class_index = instance.class_index();
    let mut indices = Vec::with_capacity(subset.len() + 1);
    let mut values = Vec::with_capacity(subset.len() + 1);
    let mut class_pending = true;
    for &index in subset.indices() {
        if class_pending && class_index < index {
            indices.push(class_index);
            values.push(value_at(instance, class_index, subset)?);
            class_pending = false;
        }
        indices.push(index);
        values.push(value_at(instance, index, subset)?);
    }
    if class_pending {
        indices.push(class_index);
        values.push(value_at(instance, class_index, subset)?);
    }

    Ok(ProjectedInstance::Filtered(
        FilteredSparseInstance::from_sorted_parts(
            Arc::clone(instance.header()),
            instance.weight(),
            indices,
            values,
            instance.number_of_attributes(),
        ),
    ))
}

fn value_at(
    instance: &dyn Instance,
    index: usize,
    subset: &FeatureSubset,
) -> Result<f64, RegressorError> {
    instance
        .value_at_index(index)
        .ok_or_else(|| RegressorError::ShapeMismatch {
            expected_attributes: subset.number_of_attributes(),
            expected_class_index: subset.class_index(),
            found_attributes: instance.number_of_attributes(),
            found_class_index: instance.class_index(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;
    use crate::testing::dummies::{header_numeric, header_with_class_at};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_subset_passes_instance_through_unchanged() {
        let inst = DenseInstance::new(header_numeric(3), vec![1.0, 2.0, 3.0, 4.0], 1.0);
        let mut rng = StdRng::seed_from_u64(0);
        let subset = FeatureSubset::select(1.0, 4, 3, &mut rng);

        let view = project(&inst, Some(&subset)).unwrap();
        assert!(!view.is_filtered());
        assert_eq!(view.as_instance().to_vec(), inst.to_vec());
    }

    #[test]
    fn missing_subset_passes_instance_through_unchanged() {
        let inst = DenseInstance::new(header_numeric(2), vec![5.0, 6.0, 7.0], 2.0);
        let view = project(&inst, None).unwrap();
        assert!(!view.is_filtered());
        assert_eq!(view.as_instance().weight(), 2.0);
        assert_eq!(view.as_instance().to_vec(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn partial_subset_keeps_selected_values_and_label_only() {
        let header = header_numeric(4);
        let inst = DenseInstance::new(Arc::clone(&header), vec![1.0, 2.0, 3.0, 4.0, 9.0], 0.5);
        let mut rng = StdRng::seed_from_u64(17);
        let subset = FeatureSubset::select(0.5, 5, 4, &mut rng);

        let view = project(&inst, Some(&subset)).unwrap();
        assert!(view.is_filtered());
        let projected = view.as_instance();
        assert_eq!(projected.number_of_attributes(), 5);
        assert_eq!(projected.class_value(), Some(9.0));
        assert_eq!(projected.weight(), 0.5);
        assert!(Arc::ptr_eq(projected.header(), &header));
        for i in 0..4 {
            let expected = if subset.indices().contains(&i) {
                inst.values[i]
            } else {
                0.0
            };
            assert_eq!(projected.value_at_index(i), Some(expected));
        }
    }

    #[test]
    fn class_in_the_middle_is_kept_in_sorted_position() {
        let header = header_with_class_at(4, 1);
        let inst = DenseInstance::new(header, vec![10.0, 99.0, 30.0, 40.0, 50.0], 1.0);
        let mut rng = StdRng::seed_from_u64(8);
        let subset = FeatureSubset::select(0.5, 5, 1, &mut rng);

        let view = project(&inst, Some(&subset)).unwrap();
        let ProjectedInstance::Filtered(filtered) = &view else {
            panic!("expected a filtered view");
        };
        assert!(filtered.indices().contains(&1));
        assert!(filtered.indices().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(filtered.class_value(), Some(99.0));
        assert_eq!(filtered.number_of_values(), 3);
    }

    #[test]
    fn mismatched_shape_fails_fast() {
        let mut rng = StdRng::seed_from_u64(4);
        let subset = FeatureSubset::select(0.5, 5, 4, &mut rng);
        let narrower = DenseInstance::new(header_numeric(2), vec![1.0, 2.0, 3.0], 1.0);

        let err = project(&narrower, Some(&subset)).err().unwrap();
        assert_eq!(
            err,
            RegressorError::ShapeMismatch {
                expected_attributes: 5,
                expected_class_index: 4,
                found_attributes: 3,
                found_class_index: 2,
            }
        );
    }
}
