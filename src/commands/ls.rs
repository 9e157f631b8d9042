use owo_colors::OwoColorize;

use super::{format_ticket_line, signed_in_services, ticket_to_json};
use crate::error::Result;

/// List open tickets, oldest first
pub async fn cmd_ls(output_json: bool) -> Result<()> {
    let services = signed_in_services(false)?;
    let documents = services.store.fetch(services.query()).await?;
    let tickets = services.tickets_from(documents);

    if output_json {
        let json_tickets: Vec<_> = tickets.iter().map(ticket_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&json_tickets)?);
        return Ok(());
    }

    if tickets.is_empty() {
        println!("{}", "No snack requests.".dimmed());
        return Ok(());
    }

    for ticket in &tickets {
        println!("{}", format_ticket_line(ticket));
    }

    Ok(())
}
