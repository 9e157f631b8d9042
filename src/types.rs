use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::error::SnackError;

/// Length of store-generated document ids.
pub const AUTO_ID_LEN: usize = 20;

/// Opaque, store-assigned ticket identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId(String);

impl TicketId {
    /// Validate and wrap an existing id.
    ///
    /// Ids are non-empty and limited to ASCII letters, digits, `-` and `_`.
    pub fn new(id: impl Into<String>) -> Result<Self, SnackError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(TicketId(id))
        } else {
            Err(SnackError::InvalidId(id))
        }
    }

    /// Generate a fresh random id, as the store does for new documents.
    pub fn generate() -> Self {
        let id: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(AUTO_ID_LEN)
            .map(char::from)
            .collect();
        TicketId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TicketId {
    type Err = SnackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketId::new(s)
    }
}

impl TryFrom<String> for TicketId {
    type Error = SnackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TicketId::new(value)
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The operator-supplied fields of a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFields {
    pub name: String,
    pub origin: String,
    pub issue: String,
}

impl TicketFields {
    pub fn new(
        name: impl Into<String>,
        origin: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            issue: issue.into(),
        }
    }

    /// Copy of the fields with surrounding whitespace removed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            origin: self.origin.trim().to_string(),
            issue: self.issue.trim().to_string(),
        }
    }
}

/// A ticket document as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDocument {
    pub id: TicketId,
    #[serde(flatten)]
    pub fields: TicketFields,
    /// Assigned by the store clock when the document is added.
    pub time_open: Timestamp,
}

/// A ticket as held in the queue's in-memory list.
///
/// `formatted_wait_time` is derived from `time_open` and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub name: String,
    pub origin: String,
    pub issue: String,
    pub time_open: Timestamp,
    pub formatted_wait_time: String,
}

impl Ticket {
    /// Map a stored document, computing its wait time as of `now`.
    pub fn from_document(doc: TicketDocument, now: Timestamp) -> Self {
        let formatted_wait_time = crate::formatting::format_distance(doc.time_open, now);
        Self {
            id: doc.id,
            name: doc.fields.name,
            origin: doc.fields.origin,
            issue: doc.fields.issue,
            time_open: doc.time_open,
            formatted_wait_time,
        }
    }

    /// Recompute the derived wait time in place.
    pub fn refresh_wait_time(&mut self, now: Timestamp) {
        self.formatted_wait_time = crate::formatting::format_distance(self.time_open, now);
    }

    pub fn fields(&self) -> TicketFields {
        TicketFields {
            name: self.name.clone(),
            origin: self.origin.clone(),
            issue: self.issue.clone(),
        }
    }
}
