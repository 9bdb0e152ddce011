//! Core library for the TaxHelper assistant: progressive-slab income tax
//! computation and the rule-based query responder behind the chat panel.
//!
//! Everything here is synchronous, deterministic, and free of I/O. The
//! interactive surfaces (form, report, chat, export) live in `taxhelper-ui`
//! and call into this crate.

pub mod assistant;
pub mod calculations;
pub mod models;

pub use assistant::{QueryResponder, ResponseTable};
pub use calculations::{ScheduleError, SlabSchedule, TaxCalculator};
pub use models::*;
