//! Background notification polling.
//!
//! The header badge re-fetches the unread count on a fixed interval
//! independent of navigation. The task must stop when the observing
//! view goes away, so dropping the poller aborts it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use finlink_core_api::BankingApi;

/// Default poll interval of the header badge
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub struct NotificationPoller {
    handle: JoinHandle<()>,
    unread: watch::Receiver<usize>,
}

impl NotificationPoller {
    /// Starts polling immediately, then on every `period` tick.
    pub fn spawn(api: Arc<dyn BankingApi>, period: Duration) -> Self {
        let (tx, unread) = watch::channel(0usize);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                match api.notifications().await {
                    Ok(notifications) => {
                        let count = notifications.iter().filter(|n| !n.read).count();
                        if tx.send(count).is_err() {
                            break;
                        }
                    }
                    // Poll failures are terminal for that tick only
                    Err(err) => warn!(%err, "notification poll failed"),
                }
            }
        });

        Self { handle, unread }
    }

    /// Most recently observed unread count
    pub fn unread_count(&self) -> usize {
        *self.unread.borrow()
    }

    /// Receiver for views that want to await count changes
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.unread.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finlink_core_memory::{InMemoryStore, LatencyProfile, MemoryBankingService};

    fn instant_service() -> Arc<MemoryBankingService> {
        Arc::new(MemoryBankingService::with_store(
            Arc::new(InMemoryStore::seeded()),
            LatencyProfile::instant(),
        ))
    }

    async fn wait_for_count(poller: &NotificationPoller, expected: usize) {
        let observed = tokio::time::timeout(Duration::from_secs(1), async {
            while poller.unread_count() != expected {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(
            observed.is_ok(),
            "poller never observed unread count {expected}"
        );
    }

    #[tokio::test]
    async fn poller_reports_seeded_unread_count() {
        let service = instant_service();
        let poller = NotificationPoller::spawn(service, Duration::from_millis(10));

        // Seed data carries exactly one unread notification
        wait_for_count(&poller, 1).await;
        assert!(poller.is_running());
    }

    #[tokio::test]
    async fn poller_tracks_mark_all_read() {
        let service = instant_service();
        let poller = NotificationPoller::spawn(service.clone(), Duration::from_millis(10));

        use finlink_core_api::BankingApi as _;
        service.mark_notifications_read().await.unwrap();

        wait_for_count(&poller, 0).await;
    }

    #[tokio::test]
    async fn dropping_the_poller_stops_the_task() {
        let service = instant_service();
        let poller = NotificationPoller::spawn(service, Duration::from_millis(10));
        let mut rx = poller.subscribe();
        drop(poller);

        // Once the task is aborted the sender is gone and the channel
        // closes; changed() then errors instead of blocking forever.
        let outcome = tokio::time::timeout(Duration::from_secs(1), async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(outcome.is_ok(), "channel never closed after drop");
    }
}
