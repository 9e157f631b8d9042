mod add;
mod config;
mod edit;
mod ls;
mod queue;
mod rm;
mod session;
mod watch;

pub use add::cmd_add;
pub use config::cmd_config_show;
pub use edit::cmd_edit;
pub use ls::cmd_ls;
pub use queue::cmd_queue;
pub use rm::cmd_rm;
pub use session::{cmd_login, cmd_logout, cmd_whoami};
pub use watch::cmd_watch;

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::Config;
use crate::error::{Result, SnackError};
use crate::queue::QueueServices;
use crate::tui::services::TicketFormValidator;
use crate::types::{Ticket, TicketFields};

/// Services for a command that talks to the store, refusing to run signed out.
///
/// One-shot commands never watch the tickets file; `watch` asks for it.
pub(crate) fn signed_in_services(watch: bool) -> Result<QueueServices> {
    let mut config = Config::load()?;
    config.store.watch = watch && config.store.watch;
    let services = QueueServices::from_config(&config);
    if services.current_user().is_none() {
        return Err(SnackError::NotSignedIn);
    }
    Ok(services)
}

/// Trim and check fields the same way the forms do.
pub(crate) fn validate_fields(fields: &TicketFields) -> Result<TicketFields> {
    TicketFormValidator::validate(fields).map_err(|e| SnackError::InvalidTicket(e.to_string()))
}

/// Format a ticket for single-line display
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let mut line = format!("{} {}", ticket.id.to_string().cyan(), ticket.name.bold());
    if !ticket.origin.is_empty() {
        line.push_str(&format!(" from {}", ticket.origin.yellow()));
    }
    if !ticket.issue.is_empty() {
        line.push_str(&format!(" - {}", ticket.issue));
    }
    line.push_str(&format!(
        " {}",
        format!("(waiting {})", ticket.formatted_wait_time).dimmed()
    ));
    line
}

pub fn ticket_to_json(ticket: &Ticket) -> serde_json::Value {
    json!({
        "id": ticket.id.to_string(),
        "name": ticket.name,
        "origin": ticket.origin,
        "issue": ticket.issue,
        "time_open": ticket.time_open.to_string(),
        "wait": ticket.formatted_wait_time,
    })
}
