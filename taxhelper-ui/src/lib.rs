//! Interactive surfaces for the TaxHelper core: form collection, report
//! rendering, the assistant chat panel, HTML export, and the notifier.
//!
//! Everything here is presentation plumbing around `taxhelper-core`; no
//! tax logic lives in this crate.

pub mod capabilities;
pub mod chat;
pub mod export;
pub mod form;
pub mod format;
pub mod notify;
pub mod report;

pub use capabilities::{DictationProvider, DisplayScale, NoDictation};
pub use form::Taxpayer;
pub use notify::{LogNotifier, Notifier};
