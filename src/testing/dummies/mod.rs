mod headers;

pub use headers::{header_mixed, header_numeric, header_with_class_at};
