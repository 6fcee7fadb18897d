pub mod quantile;
pub mod record;
pub mod scoring;
pub mod thresholds;
