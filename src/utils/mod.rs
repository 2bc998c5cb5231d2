//! Shared utilities: the injectable time source and logging helpers.

pub mod logging;
pub mod time;

pub use time::{FixedClock, SystemClock, TimeSource};
