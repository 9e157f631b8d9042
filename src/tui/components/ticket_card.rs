//! Ticket card component
//!
//! One ticket summary: who wants a snack, where they are, what they asked
//! for, and how long they have been waiting.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Ticket;

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: usize = 6;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The ticket to display
    pub ticket: Option<Ticket>,
    /// Whether the list cursor is on this card
    pub is_selected: bool,
}

/// Layout:
/// ```text
/// +---------------------------------+
/// |> Chips                          |
/// |  Room 4                         |
/// |  Spicy please                   |
/// |  Snack Added: 5 minutes ago     |
/// +---------------------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.as_ref() else {
        return element!(View).into_any();
    };

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            height: CARD_HEIGHT as u32,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row) {
                Text(content: indicator, color: theme.highlight, weight: Weight::Bold)
                Text(content: format!(" {}", ticket.name), color: theme.name, weight: Weight::Bold)
            }
            Text(content: format!("  {}", ticket.origin), color: theme.origin)
            Text(content: format!("  {}", ticket.issue), color: theme.issue)
            Text(content: format!("  {}", wait_label(ticket)), color: theme.wait_time)
        }
    }
    .into_any()
}

/// "Snack Added: 5 minutes ago"
pub fn wait_label(ticket: &Ticket) -> String {
    format!("Snack Added: {} ago", ticket.formatted_wait_time)
}
