use crate::core::attributes::Attribute;
use std::any::Any;
use std::collections::HashMap;

/// Categorical attribute. Instances store the position of the level in
/// `values` as an `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, v: &str) -> Option<usize> {
        self.label_to_index.get(v).copied()
    }
}

impl Attribute for NominalAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn arff_representation(&self) -> String {
        format!("@attribute {} {{ {} }}", self.name, self.values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_values_builds_label_index() {
        let attr = NominalAttribute::with_values(
            "color".into(),
            vec!["red".into(), "green".into(), "blue".into()],
        );
        assert_eq!(attr.number_of_values(), 3);
        assert_eq!(attr.index_of_value("green"), Some(1));
        assert_eq!(attr.index_of_value("purple"), None);
        assert_eq!(
            attr.arff_representation(),
            "@attribute color { red, green, blue }"
        );
    }
}
