pub mod summary;
pub mod thresholds;
pub mod tokens;
