use crate::core::attributes::Attribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use std::io::{Error, ErrorKind};
use std::sync::Arc;

/// Sparse instance holding only a chosen set of attribute positions.
///
/// Positions that are not stored read as `0.0`, but the instance still
/// declares the full attribute count of its header, so learners that size
/// their models from the schema see the original shape.
#[derive(Debug)]
pub struct FilteredSparseInstance {
    header: Arc<InstanceHeader>,
    indices: Vec<usize>,
    values: Vec<f64>,
    number_of_attributes: usize,
    weight: f64,
}

impl FilteredSparseInstance {
    /// `indices` must be strictly ascending and below `number_of_attributes`,
    /// with one value per index.
    pub fn new(
        header: Arc<InstanceHeader>,
        weight: f64,
        indices: Vec<usize>,
        values: Vec<f64>,
        number_of_attributes: usize,
    ) -> Result<Self, Error> {
        if indices.len() != values.len() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "indices and values must have the same length",
            ));
        }
        if indices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "indices must be strictly ascending",
            ));
        }
        if indices.last().is_some_and(|&i| i >= number_of_attributes) {
            return Err(Error::new(ErrorKind::InvalidInput, "Index out of bounds"));
        }
        Ok(Self::from_sorted_parts(
            header,
            weight,
            indices,
            values,
            number_of_attributes,
        ))
    }

    pub(crate) fn from_sorted_parts(
        header: Arc<InstanceHeader>,
        weight: f64,
        indices: Vec<usize>,
        values: Vec<f64>,
        number_of_attributes: usize,
    ) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self {
            header,
            indices,
            values,
            number_of_attributes,
            weight,
        }
    }

    /// Stored attribute positions, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn position(&self, index: usize) -> Option<usize> {
        self.indices.binary_search(&index).ok()
    }
}

impl Instance for FilteredSparseInstance {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn value_at_index(&self, index: usize) -> Option<f64> {
        if index >= self.number_of_attributes {
            return None;
        }
        Some(self.position(index).map_or(0.0, |p| self.values[p]))
    }

    fn is_missing_at_index(&self, index: usize) -> Result<bool, Error> {
        if index >= self.number_of_attributes {
            return Err(Error::new(ErrorKind::InvalidInput, "Index out of bounds"));
        }
        Ok(self
            .position(index)
            .is_some_and(|p| self.values[p].is_nan()))
    }

    fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        self.header.attribute_at_index(index)
    }

    fn number_of_attributes(&self) -> usize {
        self.number_of_attributes
    }

    fn class_index(&self) -> usize {
        self.header.class_index()
    }

    fn class_value(&self) -> Option<f64> {
        self.position(self.class_index()).map(|p| self.values[p])
    }

    fn is_class_missing(&self) -> bool {
        self.class_value().is_none_or(f64::is_nan)
    }

    fn to_vec(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.number_of_attributes];
        for (&i, &v) in self.indices.iter().zip(&self.values) {
            dense[i] = v;
        }
        dense
    }

    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::header_numeric;
    use std::io::ErrorKind;

    #[test]
    fn absent_positions_read_as_zero() {
        let header = header_numeric(4);
        let inst =
            FilteredSparseInstance::new(header, 1.0, vec![1, 4], vec![7.5, 3.0], 5).unwrap();

        assert_eq!(inst.number_of_attributes(), 5);
        assert_eq!(inst.number_of_values(), 2);
        assert_eq!(inst.value_at_index(0), Some(0.0));
        assert_eq!(inst.value_at_index(1), Some(7.5));
        assert_eq!(inst.value_at_index(5), None);
        assert_eq!(inst.class_index(), 4);
        assert_eq!(inst.class_value(), Some(3.0));
        assert_eq!(inst.to_vec(), vec![0.0, 7.5, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn class_value_is_none_when_label_not_stored() {
        let inst =
            FilteredSparseInstance::new(header_numeric(2), 1.0, vec![0], vec![1.0], 3).unwrap();
        assert_eq!(inst.class_value(), None);
        assert!(inst.is_class_missing());
    }

    #[test]
    fn missing_values_are_reported_only_for_stored_nan() {
        let inst = FilteredSparseInstance::new(
            header_numeric(3),
            1.0,
            vec![0, 3],
            vec![f64::NAN, 1.0],
            4,
        )
        .unwrap();
        assert!(inst.is_missing_at_index(0).unwrap());
        assert!(!inst.is_missing_at_index(1).unwrap());
        assert_eq!(
            inst.is_missing_at_index(9).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        let err = FilteredSparseInstance::new(header_numeric(3), 1.0, vec![0, 1], vec![1.0], 4)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err =
            FilteredSparseInstance::new(header_numeric(3), 1.0, vec![2, 1], vec![1.0, 2.0], 4)
                .err()
                .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = FilteredSparseInstance::new(header_numeric(3), 1.0, vec![4], vec![1.0], 4)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
