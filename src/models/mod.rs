pub mod cell;
pub mod metrics;
