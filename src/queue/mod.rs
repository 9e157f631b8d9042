//! The ticket queue: state, transitions, and the services it runs against

pub mod control;
pub mod model;
pub mod write;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, StoreBackend};
use crate::session::{FileSession, SessionProvider, User};
use crate::store::{FileStore, MemoryStore, SnapshotQuery, TicketStore};
use crate::types::{Ticket, TicketDocument};

pub use control::TicketControl;
pub use model::{
    ActionButton, QueueAction, QueueState, Screen, VisibleView, reduce_queue_state, screen,
    visible_view,
};
pub use write::{WriteOutcome, WriteRequest};

/// How often wait times are recomputed when not configured.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Everything the queue depends on, injected rather than reached for.
#[derive(Clone)]
pub struct QueueServices {
    pub store: Arc<dyn TicketStore>,
    pub session: Arc<dyn SessionProvider>,
    pub clock: Arc<dyn Clock>,
    pub refresh_interval: Duration,
}

impl fmt::Debug for QueueServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueServices")
            .field("refresh_interval", &self.refresh_interval)
            .finish_non_exhaustive()
    }
}

impl QueueServices {
    pub fn new(store: Arc<dyn TicketStore>, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            store,
            session,
            clock: Arc::new(SystemClock),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Build the services described by the config file, signed in through
    /// the session file under the snackq root.
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn TicketStore> = match config.store.backend {
            StoreBackend::File => Arc::new(
                FileStore::new(config.store.resolved_path()).watching(config.store.watch),
            ),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        tracing::debug!(backend = ?config.store.backend, "opened ticket store");
        Self::new(store, Arc::new(FileSession::default()))
            .with_refresh_interval(config.refresh_interval())
    }

    /// The live query the queue subscribes to: oldest first.
    pub fn query(&self) -> SnapshotQuery {
        SnapshotQuery::by_time_open()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    /// Map stored documents to queue tickets with wait times as of now.
    pub fn tickets_from(&self, documents: Vec<TicketDocument>) -> Vec<Ticket> {
        let now = self.clock.now();
        documents
            .into_iter()
            .map(|doc| Ticket::from_document(doc, now))
            .collect()
    }
}
