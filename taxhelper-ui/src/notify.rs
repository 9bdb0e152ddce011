//! Notification collaborator: fire-and-forget report acknowledgment.

use tracing::info;

use crate::form::Taxpayer;

/// Delivers the "your report was sent" acknowledgment.
///
/// Delivery is fire-and-forget from the surfaces' point of view; a failed
/// acknowledgment never blocks the report flow.
pub trait Notifier {
    fn acknowledge_report(&self, taxpayer: &Taxpayer) -> anyhow::Result<()>;
}

/// Notifier that records the acknowledgment in the log instead of sending
/// mail. Stands in until a delivery backend exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn acknowledge_report(&self, taxpayer: &Taxpayer) -> anyhow::Result<()> {
        info!(
            recipient = %taxpayer.email,
            "tax report acknowledgment queued"
        );
        Ok(())
    }
}
