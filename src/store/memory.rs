//! In-process ticket store
//!
//! Holds documents in memory and publishes a snapshot to every live
//! subscription after each write. Faults can be injected to exercise the
//! queue's error paths.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::subscribers::SubscriberRegistry;
use super::{SnapshotQuery, Subscription, TicketStore};
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, SnackError};
use crate::types::{TicketDocument, TicketFields, TicketId};

#[derive(Debug, Default)]
struct Faults {
    subscribe: Option<String>,
    write: Option<String>,
}

pub struct MemoryStore {
    clock: Arc<dyn Clock>,
    documents: Mutex<BTreeMap<TicketId, TicketDocument>>,
    subscribers: SubscriberRegistry,
    faults: Mutex<Faults>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Use `clock` for the `timeOpen` of added documents.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            documents: Mutex::new(BTreeMap::new()),
            subscribers: SubscriberRegistry::default(),
            faults: Mutex::new(Faults::default()),
        }
    }

    /// All documents, oldest first.
    pub fn documents(&self) -> Vec<TicketDocument> {
        SnapshotQuery::by_time_open().apply(self.documents.lock().values().cloned())
    }

    pub fn get(&self, id: &TicketId) -> Option<TicketDocument> {
        self.documents.lock().get(id).cloned()
    }

    /// Number of subscriptions that are still open.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.live_count()
    }

    /// Make new subscriptions fail immediately (`None` clears the fault).
    pub fn fail_subscriptions(&self, message: Option<&str>) {
        self.faults.lock().subscribe = message.map(str::to_string);
    }

    /// Make writes fail (`None` clears the fault).
    pub fn fail_writes(&self, message: Option<&str>) {
        self.faults.lock().write = message.map(str::to_string);
    }

    /// Terminate every open subscription with an error.
    pub fn break_subscriptions(&self, message: &str) {
        self.subscribers.fail_all(message);
    }

    fn check_write(&self) -> Result<()> {
        match &self.faults.lock().write {
            Some(message) => Err(SnackError::Store(message.clone())),
            None => Ok(()),
        }
    }

    fn publish(&self, docs: &BTreeMap<TicketId, TicketDocument>) {
        let all: Vec<TicketDocument> = docs.values().cloned().collect();
        self.subscribers.publish(&all);
    }
}

#[async_trait::async_trait]
impl TicketStore for MemoryStore {
    async fn add(&self, fields: TicketFields) -> Result<TicketId> {
        self.check_write()?;
        let mut docs = self.documents.lock();
        let mut id = TicketId::generate();
        while docs.contains_key(&id) {
            id = TicketId::generate();
        }
        let doc = TicketDocument {
            id: id.clone(),
            fields,
            time_open: self.clock.now(),
        };
        docs.insert(id.clone(), doc);
        tracing::debug!(%id, "added ticket");
        self.publish(&docs);
        Ok(id)
    }

    async fn update(&self, id: &TicketId, fields: TicketFields) -> Result<()> {
        self.check_write()?;
        let mut docs = self.documents.lock();
        let doc = docs
            .get_mut(id)
            .ok_or_else(|| SnackError::TicketNotFound(id.to_string()))?;
        doc.fields = fields;
        tracing::debug!(%id, "updated ticket");
        self.publish(&docs);
        Ok(())
    }

    async fn delete(&self, id: &TicketId) -> Result<()> {
        self.check_write()?;
        let mut docs = self.documents.lock();
        if docs.remove(id).is_some() {
            tracing::debug!(%id, "deleted ticket");
            self.publish(&docs);
        }
        Ok(())
    }

    fn subscribe(&self, query: SnapshotQuery) -> Result<Subscription> {
        if let Some(message) = self.faults.lock().subscribe.clone() {
            return Ok(Subscription::failed(message));
        }
        let docs = self.documents.lock();
        let current: Vec<TicketDocument> = docs.values().cloned().collect();
        Ok(self.subscribers.register(query, &current))
    }
}
