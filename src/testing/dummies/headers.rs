use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

/// `num_features` numeric attributes followed by a numeric class.
pub fn header_numeric(num_features: usize) -> Arc<InstanceHeader> {
    header_with_class_at(num_features, num_features)
}

/// `num_features + 1` numeric attributes with the class at `class_index`.
pub fn header_with_class_at(num_features: usize, class_index: usize) -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = (0..=num_features)
        .map(|i| {
            let name = if i == class_index {
                "target".to_string()
            } else {
                format!("x{i}")
            };
            Arc::new(NumericAttribute::new(name)) as AttributeRef
        })
        .collect();
    Arc::new(InstanceHeader::new("numeric".into(), attributes, class_index))
}

/// `x` numeric, `color` nominal {red, blue, green}, numeric `target` class.
pub fn header_mixed() -> Arc<InstanceHeader> {
    let attributes: Vec<AttributeRef> = vec![
        Arc::new(NumericAttribute::new("x".into())) as AttributeRef,
        Arc::new(NominalAttribute::with_values(
            "color".into(),
            vec!["red".into(), "blue".into(), "green".into()],
        )) as AttributeRef,
        Arc::new(NumericAttribute::new("target".into())) as AttributeRef,
    ];
    Arc::new(InstanceHeader::new("mixed".into(), attributes, 2))
}
