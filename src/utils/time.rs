//! Time-source abstraction
//!
//! The generation timestamp is the only non-deterministic field in the whole
//! system, so the ambient clock read sits behind a trait: scenarios take a
//! `&dyn TimeSource`, and tests inject a fixed instant to pin file bytes.

use chrono::{NaiveDateTime, Utc};

/// Source of the report-generation timestamp
pub trait TimeSource {
    /// The current instant, naive UTC
    fn now(&self) -> NaiveDateTime;
}

/// The real system clock, in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// A clock pinned to one instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
