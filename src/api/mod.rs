pub mod aggregator;
pub mod steam;
