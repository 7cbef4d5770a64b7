mod dense_instance;
mod filtered_sparse_instance;
mod instance;

pub use dense_instance::DenseInstance;
pub use filtered_sparse_instance::FilteredSparseInstance;
pub use instance::Instance;
