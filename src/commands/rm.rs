use owo_colors::OwoColorize;

use super::signed_in_services;
use crate::error::Result;
use crate::queue::TicketControl;
use crate::types::TicketId;

/// Delete a ticket. Deleting an id that is already gone succeeds.
pub async fn cmd_rm(id: &str) -> Result<()> {
    let id = TicketId::new(id)?;
    let mut control = TicketControl::new(signed_in_services(false)?);
    control.delete(&id).await?;
    println!("Deleted {}", id.to_string().cyan());
    Ok(())
}
