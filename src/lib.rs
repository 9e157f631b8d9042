pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod paths;
pub mod queue;
pub mod session;
pub mod store;
pub mod tui;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, SnackError};
pub use queue::{QueueAction, QueueServices, QueueState, Screen, TicketControl, VisibleView};
pub use session::{FileSession, SessionProvider, StaticSession, User};
pub use store::{FileStore, MemoryStore, SnapshotEvent, SnapshotQuery, Subscription, TicketStore};
pub use types::{Ticket, TicketDocument, TicketFields, TicketId};
