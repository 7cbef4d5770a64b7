pub mod spy_regressor;
pub mod vec_stream;

pub use spy_regressor::{SpyLog, SpyRegressor};
pub use vec_stream::VecStream;
