//! Ticket document store
//!
//! The queue talks to its backend exclusively through [`TicketStore`]:
//! add, full-field update and delete keyed by id, and a live query that
//! pushes the complete ordered collection on every change. Ordering and
//! snapshot consistency are the store's responsibility; callers trust
//! whatever they receive.
//!
//! Two implementations ship with the crate:
//! - [`memory::MemoryStore`] keeps documents in process and supports fault
//!   injection for tests.
//! - [`file::FileStore`] persists documents to a JSON file and can watch it
//!   for changes made by other processes.

pub mod file;
pub mod memory;
mod subscribers;

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;

use crate::error::{Result, SnackError};
use crate::types::{TicketDocument, TicketFields, TicketId};

pub use file::FileStore;
pub use memory::MemoryStore;

/// A live query over the tickets collection, oldest `timeOpen` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotQuery;

impl SnapshotQuery {
    /// Oldest tickets first: the queue's natural order.
    pub fn by_time_open() -> Self {
        Self
    }

    /// Order a set of documents according to this query.
    ///
    /// Documents opened at the same instant are ordered by id so repeated
    /// snapshots of the same data are identical.
    pub fn apply(&self, documents: impl IntoIterator<Item = TicketDocument>) -> Vec<TicketDocument> {
        let mut docs: Vec<TicketDocument> = documents.into_iter().collect();
        docs.sort_by(|a, b| a.time_open.cmp(&b.time_open).then_with(|| a.id.cmp(&b.id)));
        docs
    }
}

/// The complete result set of a query at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySnapshot {
    pub documents: Vec<TicketDocument>,
}

/// Something pushed down a live subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotEvent {
    Snapshot(QuerySnapshot),
    /// The subscription failed. Nothing follows an error.
    Error(String),
}

/// Handle to an open live query.
///
/// Lifecycle: open, zero or more snapshots, then either an error or close.
/// Dropping the handle or calling [`Subscription::cancel`] stops delivery;
/// the store prunes the subscriber on its next publish.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<SnapshotEvent>,
    finished: bool,
}

impl Subscription {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<SnapshotEvent>) -> Self {
        Self {
            receiver,
            finished: false,
        }
    }

    /// A subscription that fails immediately with `message`.
    pub fn failed(message: impl Into<String>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let _ = sender.send(SnapshotEvent::Error(message.into()));
        Self::new(receiver)
    }

    /// Stop receiving events. Already-queued events are discarded.
    pub fn cancel(&mut self) {
        self.receiver.close();
        while self.receiver.try_recv().is_ok() {}
        self.finished = true;
    }

    /// Whether more events may still arrive.
    pub fn is_active(&self) -> bool {
        !self.finished
    }

    /// Take the next event if one is ready, without waiting.
    pub fn try_next_event(&mut self) -> Option<SnapshotEvent> {
        if self.finished {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(event) => Some(self.observe(event)),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.finished = true;
                None
            }
        }
    }

    fn observe(&mut self, event: SnapshotEvent) -> SnapshotEvent {
        if matches!(event, SnapshotEvent::Error(_)) {
            self.receiver.close();
            self.finished = true;
        }
        event
    }
}

impl Stream for Subscription {
    type Item = SnapshotEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }
        match this.receiver.poll_recv(cx) {
            Poll::Ready(Some(event)) => Poll::Ready(Some(this.observe(event))),
            Poll::Ready(None) => {
                this.finished = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Backend operations consumed by the queue.
#[async_trait::async_trait]
pub trait TicketStore: Send + Sync {
    /// Add a new document. The store assigns the id and `timeOpen`.
    async fn add(&self, fields: TicketFields) -> Result<TicketId>;

    /// Overwrite the fields of an existing document. `timeOpen` is kept.
    async fn update(&self, id: &TicketId, fields: TicketFields) -> Result<()>;

    /// Delete a document. Deleting a missing id is not an error.
    async fn delete(&self, id: &TicketId) -> Result<()>;

    /// Open a live query. The first event is the current result set.
    fn subscribe(&self, query: SnapshotQuery) -> Result<Subscription>;

    /// Read the current result set once.
    async fn fetch(&self, query: SnapshotQuery) -> Result<Vec<TicketDocument>> {
        let mut subscription = self.subscribe(query)?;
        match subscription.next().await {
            Some(SnapshotEvent::Snapshot(snapshot)) => Ok(snapshot.documents),
            Some(SnapshotEvent::Error(message)) => Err(SnackError::Subscription(message)),
            None => Err(SnackError::Subscription(
                "subscription closed before the first snapshot".to_string(),
            )),
        }
    }
}
