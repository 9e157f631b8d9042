//! App header bar component
//!
//! Displays the application title, who is signed in, and the queue length.

use iocraft::prelude::*;

use crate::tui::theme::theme;

const TITLE: &str = "Snack Queue";

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Signed-in operator, shown after the title
    pub user_email: Option<String>,

    /// Number of open tickets
    pub ticket_count: usize,
}

/// App header bar showing title and ticket count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let left_text = match &props.user_email {
        Some(email) => format!("{TITLE} - {email}"),
        None => TITLE.to_string(),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.text,
                weight: Weight::Bold,
            )
            Text(
                content: ticket_count_label(props.ticket_count),
                color: theme.text,
            )
        }
    }
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

    #[test]
    fn test_ticket_count_label() {
        assert_eq!(ticket_count_label(0), "0 tickets");
        assert_eq!(ticket_count_label(1), "1 ticket");
        assert_eq!(ticket_count_label(12), "12 tickets");
    }
}
