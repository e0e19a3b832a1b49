//! Best-effort notification queue.
//!
//! Booking handlers enqueue rendered notices; a background worker delivers
//! them one at a time through the configured transport. Delivery failures
//! are logged and dropped so they never affect the request that queued
//! them. No retries in v1; the queue boundary is where retry/backoff would
//! slot in.

use async_trait::async_trait;
use domain::services::notification::BookingNotice;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::middleware::metrics::record_notice_queued;
use crate::services::email::{EmailError, EmailMessage, EmailService};

/// Transport used by the notification worker to deliver a notice.
#[async_trait]
pub trait NoticeTransport: Send + Sync + 'static {
    async fn deliver(&self, notice: &BookingNotice) -> Result<(), EmailError>;
}

#[async_trait]
impl NoticeTransport for EmailService {
    async fn deliver(&self, notice: &BookingNotice) -> Result<(), EmailError> {
        self.send(EmailMessage {
            to: notice.to.clone(),
            to_name: notice.to_name.clone(),
            subject: notice.subject.clone(),
            body_text: notice.body.clone(),
        })
        .await
    }
}

/// Handle for enqueueing notification notices.
#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<BookingNotice>,
}

impl Notifier {
    /// Spawns the delivery worker and returns the queue handle.
    pub fn spawn(transport: impl NoticeTransport) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<BookingNotice>();

        tokio::spawn(async move {
            info!("Notification worker started");
            while let Some(notice) = rx.recv().await {
                match transport.deliver(&notice).await {
                    Ok(()) => {
                        debug!(to = %notice.to, subject = %notice.subject, "Notice delivered");
                    }
                    Err(e) => {
                        // One failed recipient must not block the rest.
                        error!(
                            to = %notice.to,
                            subject = %notice.subject,
                            error = %e,
                            "Notice delivery failed"
                        );
                    }
                }
            }
            info!("Notification worker stopped");
        });

        Self { tx }
    }

    /// Enqueues a notice for best-effort delivery.
    ///
    /// Never fails from the caller's perspective: if the worker is gone
    /// the notice is logged and dropped.
    pub fn enqueue(&self, notice: BookingNotice) {
        record_notice_queued();
        if let Err(e) = self.tx.send(notice) {
            error!(to = %e.0.to, "Notification queue closed, dropping notice");
        }
    }
}
