mod balance_tracker;
mod builder;
mod suite;
mod tracing;

pub use {balance_tracker::*, builder::*, suite::*, tracing::*};
