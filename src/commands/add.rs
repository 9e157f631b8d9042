use owo_colors::OwoColorize;
use serde_json::json;

use super::{signed_in_services, validate_fields};
use crate::error::Result;
use crate::queue::TicketControl;
use crate::types::TicketFields;

/// Add a snack request and print its id
pub async fn cmd_add(name: &str, origin: &str, issue: &str, output_json: bool) -> Result<()> {
    let fields = validate_fields(&TicketFields::new(name, origin, issue))?;

    let mut control = TicketControl::new(signed_in_services(false)?);
    let id = control.create(fields).await?;

    if output_json {
        println!("{}", json!({ "id": id.to_string() }));
    } else {
        println!("Added {}", id.to_string().cyan());
    }
    Ok(())
}
