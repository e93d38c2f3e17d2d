//! In-memory notification fan-out for tests/dev.

use std::sync::{Mutex, mpsc};
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use printerp_alerting::{AlertNotifier, StockAlert};

/// A delivered notification: the alert plus delivery identity.
///
/// The id is assigned at delivery time (UUIDv7, time-ordered) so downstream
/// consumers have something stable to dedup on if they choose to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertNotification {
    notification_id: Uuid,
    alert: StockAlert,
}

impl AlertNotification {
    pub fn notification_id(&self) -> Uuid {
        self.notification_id
    }

    pub fn alert(&self) -> &StockAlert {
        &self.alert
    }

    pub fn into_alert(self) -> StockAlert {
        self.alert
    }
}

/// A subscription to the notification stream.
///
/// Each subscription gets a copy of every alert published after it was
/// created (broadcast semantics). Designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<AlertNotification>,
}

impl Subscription {
    /// Block until the next notification is available.
    pub fn recv(&self) -> Result<AlertNotification, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a notification without blocking.
    pub fn try_recv(&self) -> Result<AlertNotification, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a notification.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<AlertNotification, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// In-memory fan-out notifier.
///
/// - No IO / no async
/// - Best-effort broadcast; each subscriber gets a copy of every alert
/// - Dead subscribers are dropped on the next notify
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    subscribers: Mutex<Vec<mpsc::Sender<AlertNotification>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned, the subscription is still returned;
        // it just never receives notifications.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription { receiver: rx }
    }
}

impl AlertNotifier for InMemoryNotifier {
    fn notify(&self, alert: &StockAlert) {
        let notification = AlertNotification {
            notification_id: Uuid::now_v7(),
            alert: alert.clone(),
        };

        if let Ok(mut subs) = self.subscribers.lock() {
            subs.retain(|tx| tx.send(notification.clone()).is_ok());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use printerp_alerting::AlertLevel;
    use printerp_core::MaterialId;

    fn alert(id: i64, level: AlertLevel) -> StockAlert {
        StockAlert {
            material_id: MaterialId::new(id),
            material_name: "Papier mat".to_string(),
            unit: "m²".to_string(),
            level,
            total_quantity: 5.0,
            min_threshold: Some(10.0),
            summary: "Papier mat: 5 m² on hand, alert threshold 10 m² (critical)".to_string(),
            evaluated_at: Utc::now(),
        }
    }

    #[test]
    fn every_subscriber_receives_every_alert() {
        let notifier = InMemoryNotifier::new();
        let sub_a = notifier.subscribe();
        let sub_b = notifier.subscribe();

        notifier.notify(&alert(1, AlertLevel::Critical));
        notifier.notify(&alert(2, AlertLevel::Warning));

        for sub in [&sub_a, &sub_b] {
            let first = sub.try_recv().unwrap();
            let second = sub.try_recv().unwrap();
            assert_eq!(first.alert().material_id, MaterialId::new(1));
            assert_eq!(second.alert().material_id, MaterialId::new(2));
            assert!(sub.try_recv().is_err());
        }
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_notify() {
        let notifier = InMemoryNotifier::new();
        let sub_a = notifier.subscribe();
        {
            let _dropped = notifier.subscribe();
        }

        notifier.notify(&alert(3, AlertLevel::Normal));

        assert_eq!(sub_a.try_recv().unwrap().alert().material_id, MaterialId::new(3));
        assert_eq!(notifier.subscribers.lock().unwrap().len(), 1);
    }

    #[test]
    fn delivery_ids_are_unique_per_notification() {
        let notifier = InMemoryNotifier::new();
        let sub = notifier.subscribe();

        notifier.notify(&alert(1, AlertLevel::Critical));
        notifier.notify(&alert(1, AlertLevel::Critical));

        let first = sub.try_recv().unwrap();
        let second = sub.try_recv().unwrap();
        assert_ne!(first.notification_id(), second.notification_id());
        assert_eq!(first.alert().material_id, second.alert().material_id);
    }
}
