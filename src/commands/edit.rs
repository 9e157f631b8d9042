use owo_colors::OwoColorize;

use super::{signed_in_services, validate_fields};
use crate::error::{Result, SnackError};
use crate::queue::TicketControl;
use crate::types::{TicketFields, TicketId};

/// Overwrite the given fields of a ticket, keeping the rest
pub async fn cmd_edit(
    id: &str,
    name: Option<&str>,
    origin: Option<&str>,
    issue: Option<&str>,
) -> Result<()> {
    let id = TicketId::new(id)?;
    let services = signed_in_services(false)?;

    let documents = services.store.fetch(services.query()).await?;
    let existing = documents
        .into_iter()
        .find(|doc| doc.id == id)
        .ok_or_else(|| SnackError::TicketNotFound(id.to_string()))?;

    let fields = validate_fields(&merge_fields(existing.fields, name, origin, issue))?;

    let mut control = TicketControl::new(services);
    control.edit(&id, fields).await?;
    println!("Updated {}", id.to_string().cyan());
    Ok(())
}

fn merge_fields(
    mut fields: TicketFields,
    name: Option<&str>,
    origin: Option<&str>,
    issue: Option<&str>,
) -> TicketFields {
    if let Some(name) = name {
        fields.name = name.to_string();
    }
    if let Some(origin) = origin {
        fields.origin = origin.to_string();
    }
    if let Some(issue) = issue {
        fields.issue = issue.to_string();
    }
    fields.trimmed()
}
