//! Ticket detail component
//!
//! Full view of the selected ticket with its update and delete actions.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Ticket;

/// Props for the TicketDetail component
#[derive(Default, Props)]
pub struct TicketDetailProps {
    /// The ticket to display (None shows empty state)
    pub ticket: Option<Ticket>,
}

#[component]
pub fn TicketDetail(props: &TicketDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(ticket) = props.ticket.clone() else {
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No ticket selected", color: theme.text_dimmed)
            }
        };
    };

    let rows = detail_rows(&ticket);

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
            padding_left: 1,
            padding_right: 1,
            gap: 1,
        ) {
            Text(content: ticket.name.clone(), color: theme.name, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Column) {
                #(rows.into_iter().map(|(label, value)| element! {
                    View(flex_direction: FlexDirection::Row) {
                        View(width: 10) {
                            Text(content: label, color: theme.text_dimmed)
                        }
                        Text(content: value, color: theme.text)
                    }
                }))
            }
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(content: "[e] Update Snack", color: theme.button, weight: Weight::Bold)
                Text(content: "[d] Delete Snack", color: theme.error, weight: Weight::Bold)
            }
        }
    }
}

/// Label/value pairs shown under the ticket name.
pub fn detail_rows(ticket: &Ticket) -> Vec<(&'static str, String)> {
    vec![
        ("Origin", ticket.origin.clone()),
        ("Issue", ticket.issue.clone()),
        ("Opened", ticket.time_open.strftime("%Y-%m-%d %H:%M UTC").to_string()),
        ("Waiting", ticket.formatted_wait_time.clone()),
        ("Id", ticket.id.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketId;

    #[test]
    fn test_detail_rows() {
        let ticket = Ticket {
            id: TicketId::new("abc").unwrap(),
            name: "Chips".to_string(),
            origin: "Room 4".to_string(),
            issue: "Spicy".to_string(),
            time_open: "2024-01-01T12:00:00Z".parse().unwrap(),
            formatted_wait_time: "about 1 hour".to_string(),
        };
        let rows = detail_rows(&ticket);
        assert_eq!(rows[0], ("Origin", "Room 4".to_string()));
        assert_eq!(rows[2], ("Opened", "2024-01-01 12:00 UTC".to_string()));
        assert_eq!(rows[3], ("Waiting", "about 1 hour".to_string()));
    }
}
