use crate::core::attributes::{Attribute, AttributeRef};

/// Schema shared by every instance of a stream: relation name, ordered
/// attributes and the position of the class (target) attribute.
#[derive(Debug)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<AttributeRef>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        self.attributes.get(index).map(|a| a.as_ref())
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> Option<&dyn Attribute> {
        self.attribute_at_index(self.class_index)
    }
}
