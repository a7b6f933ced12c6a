pub mod filter;
pub mod ranking;
pub mod thresholds;
