pub mod random_subspaces;

pub use random_subspaces::RandomSubspacesRegressor;
