//! Fan-out of snapshots to live subscriptions

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::{QuerySnapshot, SnapshotEvent, SnapshotQuery, Subscription};
use crate::types::TicketDocument;

struct Subscriber {
    query: SnapshotQuery,
    sender: mpsc::UnboundedSender<SnapshotEvent>,
}

#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    subscribers: Mutex<Vec<Subscriber>>,
    last_published: Mutex<Option<Vec<TicketDocument>>>,
}

impl SubscriberRegistry {
    /// Register a subscriber and deliver the current result set to it.
    pub fn register(&self, query: SnapshotQuery, current: &[TicketDocument]) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let snapshot = QuerySnapshot {
            documents: query.apply(current.iter().cloned()),
        };
        let _ = sender.send(SnapshotEvent::Snapshot(snapshot));
        self.subscribers.lock().push(Subscriber { query, sender });
        Subscription::new(receiver)
    }

    /// Push the full collection to every live subscriber.
    pub fn publish(&self, documents: &[TicketDocument]) {
        *self.last_published.lock() = Some(documents.to_vec());

        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|subscriber| {
            let snapshot = QuerySnapshot {
                documents: subscriber.query.apply(documents.iter().cloned()),
            };
            subscriber
                .sender
                .send(SnapshotEvent::Snapshot(snapshot))
                .is_ok()
        });
        tracing::debug!(
            subscribers = subscribers.len(),
            documents = documents.len(),
            "published snapshot"
        );
    }

    /// Publish only if the collection differs from the last publish.
    ///
    /// Returns whether anything was sent.
    pub fn publish_if_changed(&self, documents: &[TicketDocument]) -> bool {
        let unchanged = {
            let last = self.last_published.lock();
            last.as_deref().is_some_and(|last| same_documents(last, documents))
        };
        if unchanged {
            return false;
        }
        self.publish(documents);
        true
    }

    /// Terminate every live subscription with an error.
    pub fn fail_all(&self, message: &str) {
        let mut subscribers = self.subscribers.lock();
        for subscriber in subscribers.drain(..) {
            let _ = subscriber
                .sender
                .send(SnapshotEvent::Error(message.to_string()));
        }
        tracing::warn!("subscriptions terminated: {message}");
    }

    /// Number of subscribers that have not been cancelled or dropped.
    pub fn live_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|subscriber| !subscriber.sender.is_closed());
        subscribers.len()
    }
}

fn same_documents(a: &[TicketDocument], b: &[TicketDocument]) -> bool {
    let order = SnapshotQuery::by_time_open();
    order.apply(a.iter().cloned()) == order.apply(b.iter().cloned())
}
