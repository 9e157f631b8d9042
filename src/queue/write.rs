//! Store writes made on behalf of the signed-in operator
//!
//! Both the terminal UI and [`TicketControl`](super::TicketControl) go
//! through [`QueueServices::write`], then feed the outcome to the reducer.

use super::QueueServices;
use super::model::QueueAction;
use crate::error::{Result, SnackError};
use crate::types::{TicketFields, TicketId};

/// A store write requested from the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteRequest {
    Create(TicketFields),
    Edit(TicketId, TicketFields),
    Delete(TicketId),
}

/// A write the store accepted
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    pub id: TicketId,
    /// Transition to apply now that the write went through
    pub action: QueueAction,
    pub message: &'static str,
}

impl QueueServices {
    /// Send `request` to the store.
    ///
    /// Fields are trimmed before they are stored. Nothing is written while
    /// signed out.
    pub async fn write(&self, request: WriteRequest) -> Result<WriteOutcome> {
        if self.current_user().is_none() {
            return Err(SnackError::NotSignedIn);
        }

        let result = match request {
            WriteRequest::Create(fields) => {
                self.store
                    .add(fields.trimmed())
                    .await
                    .map(|id| WriteOutcome {
                        id,
                        action: QueueAction::TicketCreated,
                        message: "Snack added",
                    })
            }
            WriteRequest::Edit(id, fields) => {
                self.store
                    .update(&id, fields.trimmed())
                    .await
                    .map(|()| WriteOutcome {
                        id,
                        action: QueueAction::TicketEdited,
                        message: "Snack updated",
                    })
            }
            WriteRequest::Delete(id) => self.store.delete(&id).await.map(|()| WriteOutcome {
                id,
                action: QueueAction::TicketDeleted,
                message: "Snack deleted",
            }),
        };

        match &result {
            Ok(outcome) => tracing::info!(id = %outcome.id, "{}", outcome.message),
            Err(e) => tracing::warn!("write failed: {e}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::session::{StaticSession, User};
    use crate::store::MemoryStore;

    fn services(store: &Arc<MemoryStore>, signed_in: bool) -> QueueServices {
        let session = if signed_in {
            StaticSession::signed_in(User::new("u1", "ops@example.com"))
        } else {
            StaticSession::signed_out()
        };
        QueueServices::new(store.clone(), Arc::new(session))
    }

    #[tokio::test]
    async fn test_signed_out_write_is_refused() {
        let store = Arc::new(MemoryStore::new());
        let result = services(&store, false)
            .write(WriteRequest::Create(TicketFields::new("Chips", "", "")))
            .await;
        assert!(matches!(result, Err(SnackError::NotSignedIn)));
        assert!(store.documents().is_empty());
    }

    #[tokio::test]
    async fn test_create_trims_and_reports_transition() {
        let store = Arc::new(MemoryStore::new());
        let services = services(&store, true);

        let outcome = services
            .write(WriteRequest::Create(TicketFields::new(" Chips ", "Room 4\t", "")))
            .await
            .unwrap();
        assert_eq!(outcome.action, QueueAction::TicketCreated);
        assert_eq!(outcome.message, "Snack added");
        let doc = store.get(&outcome.id).unwrap();
        assert_eq!(doc.fields, TicketFields::new("Chips", "Room 4", ""));

        let outcome = services
            .write(WriteRequest::Edit(
                outcome.id.clone(),
                TicketFields::new("Chips  ", "Room 5", "Stale"),
            ))
            .await
            .unwrap();
        assert_eq!(outcome.action, QueueAction::TicketEdited);
        assert_eq!(store.get(&outcome.id).unwrap().fields.name, "Chips");

        let outcome = services
            .write(WriteRequest::Delete(outcome.id))
            .await
            .unwrap();
        assert_eq!(outcome.action, QueueAction::TicketDeleted);
        assert!(store.documents().is_empty());
    }

    #[tokio::test]
    async fn test_store_error_is_returned() {
        let store = Arc::new(MemoryStore::new());
        store.fail_writes(Some("offline"));
        let result = services(&store, true)
            .write(WriteRequest::Delete(TicketId::new("abc").unwrap()))
            .await;
        assert!(matches!(result, Err(SnackError::Store(m)) if m == "offline"));
    }
}
