//! Live queue on stdout (`snackq watch`)
//!
//! Runs the headless [`TicketControl`] and reprints the list whenever the
//! rendered output changes, until Ctrl-C.

use owo_colors::OwoColorize;

use super::{format_ticket_line, signed_in_services};
use crate::error::Result;
use crate::queue::{QueueState, TicketControl};

pub async fn cmd_watch() -> Result<()> {
    let mut control = TicketControl::new(signed_in_services(true)?);
    let mut last = String::new();

    control
        .run(
            |state| {
                let rendered = render_state(state);
                if rendered != last {
                    println!("{rendered}");
                    last = rendered;
                }
            },
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
        )
        .await;

    Ok(())
}

fn render_state(state: &QueueState) -> String {
    if let Some(error) = &state.error {
        return format!("{} {}", "Subscription failed:".red().bold(), error);
    }

    let mut out = format!(
        "{}",
        format!("--- {} open ---", ticket_count_label(state.tickets.len())).dimmed()
    );
    for ticket in &state.tickets {
        out.push('\n');
        out.push_str(&format_ticket_line(ticket));
    }
    out
}

fn ticket_count_label(count: usize) -> String {
    match count {
        1 => "1 ticket".to_string(),
        n => format!("{n} tickets"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ticket, TicketId};

    #[test]
    fn test_render_error_replaces_list() {
        let state = QueueState {
            error: Some("permission denied".to_string()),
            ..QueueState::default()
        };
        let rendered = render_state(&state);
        assert!(rendered.contains("permission denied"));
        assert!(!rendered.contains("open"));
    }

    #[test]
    fn test_render_lists_every_ticket() {
        let ticket = |id: &str, name: &str| Ticket {
            id: TicketId::new(id).unwrap(),
            name: name.to_string(),
            origin: String::new(),
            issue: String::new(),
            time_open: "2024-01-01T12:00:00Z".parse().unwrap(),
            formatted_wait_time: "1 minute".to_string(),
        };
        let state = QueueState {
            tickets: vec![ticket("a", "Chips"), ticket("b", "Gum")],
            ..QueueState::default()
        };
        let rendered = render_state(&state);
        assert!(rendered.contains("2 tickets open"));
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("Gum"));
    }
}
