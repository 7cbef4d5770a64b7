use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegressorError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "instance shape mismatch: expected {expected_attributes} attributes with class index \
         {expected_class_index}, found {found_attributes} attributes with class index \
         {found_class_index}"
    )]
    ShapeMismatch {
        expected_attributes: usize,
        expected_class_index: usize,
        found_attributes: usize,
        found_class_index: usize,
    },

    #[error("base learner failure: {0}")]
    Learner(String),
}
