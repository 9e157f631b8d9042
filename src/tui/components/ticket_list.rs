//! Scrollable ticket list component
//!
//! Stacks ticket cards with a keyboard cursor and "more above/below"
//! indicators.

use iocraft::prelude::*;

use super::ticket_card::TicketCard;
use crate::tui::theme::theme;
use crate::types::Ticket;

/// Props for the TicketList component
#[derive(Default, Props)]
pub struct TicketListProps {
    pub tickets: Vec<Ticket>,
    /// Index of the card under the cursor
    pub cursor: usize,
    /// First visible card
    pub scroll_offset: usize,
    /// Number of cards that fit
    pub visible_cards: usize,
}

#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if props.tickets.is_empty() {
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No snack requests. Press [a] to add one.", color: theme.text_dimmed)
            }
        };
    }

    let window = visible_window(props.tickets.len(), props.scroll_offset, props.visible_cards);
    let has_more_above = window.start > 0;
    let more_below = props.tickets.len() - window.end;

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Hidden,
        ) {
            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more above", window.start),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            #(props.tickets[window.clone()].iter().enumerate().map(|(i, ticket)| {
                let is_selected = window.start + i == props.cursor;
                element! {
                    TicketCard(ticket: Some(ticket.clone()), is_selected: is_selected)
                }
            }))

            #(if more_below > 0 {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more below", more_below),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

/// Range of tickets to render for a given scroll position.
pub fn visible_window(total: usize, scroll_offset: usize, visible: usize) -> std::ops::Range<usize> {
    let start = scroll_offset.min(total);
    let end = (start + visible.max(1)).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window() {
        assert_eq!(visible_window(10, 0, 3), 0..3);
        assert_eq!(visible_window(10, 8, 3), 8..10);
        assert_eq!(visible_window(2, 5, 3), 2..2);
        // Always show at least the cursor card
        assert_eq!(visible_window(4, 1, 0), 1..2);
    }
}
