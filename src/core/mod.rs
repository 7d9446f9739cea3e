pub mod backup;
pub mod columns;
pub mod join;
pub mod leave;
pub mod log;
pub mod metrics;
pub mod normalize;
pub mod onleave;
pub mod process;
pub mod ranking;
pub mod state;
