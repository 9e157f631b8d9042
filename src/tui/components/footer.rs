//! Key hint bar at the bottom of the queue
//!
//! Each view has a fixed set of hints; [`shortcuts_for`] picks the set for
//! whatever the queue is showing.

use iocraft::prelude::*;

use crate::queue::model::{Screen, VisibleView};
use crate::tui::theme::theme;

/// One key and what it does in the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> Shortcut {
    Shortcut { key, action }
}

const QUIT: Shortcut = hint("q", "Quit");

pub const LIST_SHORTCUTS: &[Shortcut] = &[
    hint("j/k", "Up/Down"),
    hint("g/G", "Top/Bottom"),
    hint("Enter", "Open"),
    hint("a", "Add Snack"),
    QUIT,
];

pub const DETAIL_SHORTCUTS: &[Shortcut] = &[
    hint("e", "Edit"),
    hint("d", "Delete"),
    hint("Esc", "Return to Snack List"),
    QUIT,
];

// q is an ordinary letter inside a form
pub const FORM_SHORTCUTS: &[Shortcut] = &[
    hint("Tab", "Next Field"),
    hint("S-Tab", "Prev Field"),
    hint("C-s", "Save"),
    hint("Esc", "Cancel"),
];

const QUIT_ONLY: &[Shortcut] = &[QUIT];

/// Hints for whatever the queue is currently showing
pub fn shortcuts_for(screen: &Screen) -> &'static [Shortcut] {
    match screen {
        Screen::SignInRequired | Screen::Queue(VisibleView::Error(_)) => QUIT_ONLY,
        Screen::Queue(VisibleView::List) => LIST_SHORTCUTS,
        Screen::Queue(VisibleView::Detail(_)) => DETAIL_SHORTCUTS,
        Screen::Queue(VisibleView::Editing(_) | VisibleView::Creating) => FORM_SHORTCUTS,
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: &'static [Shortcut],
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| element! {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: shortcut.key, color: theme.highlight, weight: Weight::Bold)
                    Text(content: format!(" {}", shortcut.action), color: theme.text)
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ticket, TicketId};

    fn ticket() -> Ticket {
        Ticket {
            id: TicketId::new("a").unwrap(),
            name: "Chips".to_string(),
            origin: String::new(),
            issue: String::new(),
            time_open: "2024-01-01T00:00:00Z".parse().unwrap(),
            formatted_wait_time: String::new(),
        }
    }

    fn keys(shortcuts: &[Shortcut]) -> Vec<&str> {
        shortcuts.iter().map(|s| s.key).collect()
    }

    #[test]
    fn test_shortcuts_follow_view() {
        assert_eq!(
            keys(shortcuts_for(&Screen::Queue(VisibleView::List))),
            vec!["j/k", "g/G", "Enter", "a", "q"]
        );
        assert_eq!(
            keys(shortcuts_for(&Screen::Queue(VisibleView::Detail(ticket())))),
            vec!["e", "d", "Esc", "q"]
        );
        assert_eq!(
            shortcuts_for(&Screen::Queue(VisibleView::Editing(ticket()))),
            FORM_SHORTCUTS
        );
        assert_eq!(
            shortcuts_for(&Screen::Queue(VisibleView::Creating)),
            FORM_SHORTCUTS
        );
    }

    #[test]
    fn test_dead_ends_only_offer_quit() {
        for screen in [
            Screen::SignInRequired,
            Screen::Queue(VisibleView::Error("denied".to_string())),
        ] {
            assert_eq!(shortcuts_for(&screen), &[QUIT]);
        }
    }

    #[test]
    fn test_forms_do_not_advertise_quit() {
        assert!(!FORM_SHORTCUTS.contains(&QUIT));
    }
}
