//! Tax computation for the self-assessment flow.
//!
//! [`SlabSchedule`] owns a progressive slab table and the cess application;
//! [`TaxCalculator`] aggregates deductions from an income profile and
//! produces the final [`crate::TaxResult`].

pub mod calculator;
pub mod common;
pub mod schedule;

pub use calculator::TaxCalculator;
pub use schedule::{ScheduleError, SlabSchedule};
