//! Queue state and transitions
//!
//! Everything the queue shows is a function of [`QueueState`] plus the
//! current user. Transitions go through [`reduce_queue_state`]; the headless
//! [`TicketControl`](super::control::TicketControl) and the terminal
//! `QueueScreen` share this module so both behave identically.

use iocraft::prelude::{KeyCode, KeyModifiers};
use jiff::Timestamp;

use crate::session::User;
use crate::types::{Ticket, TicketId};

/// Raw state owned by the queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueState {
    /// Tickets from the latest snapshot, in store order
    pub tickets: Vec<Ticket>,
    /// Ticket shown in the detail or edit view
    pub selected: Option<Ticket>,
    /// Whether the selected ticket is being edited
    pub editing: bool,
    /// Subscription failure; terminal until restart
    pub error: Option<String>,
    /// Whether the new-ticket form is open
    pub form_visible: bool,
    /// Keyboard cursor in the list
    pub cursor: usize,
    pub scroll_offset: usize,
    /// Last failed write, cleared by the next success or navigation
    pub write_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueAction {
    // Subscription
    SnapshotReceived(Vec<Ticket>),
    SubscriptionFailed(String),
    RefreshWaitTimes(Timestamp),

    // Navigation
    SelectTicket(TicketId),
    MoveDown,
    MoveUp,
    GoToTop,
    GoToBottom,
    /// Select the ticket under the cursor
    OpenSelected,
    /// The "Add Snack" / "Return to Snack List" button
    ButtonPressed,
    BeginEdit,
    /// Esc inside a form
    CancelForm,

    // Writes (the store call itself happens outside the reducer)
    DeleteSelected,
    TicketCreated,
    TicketEdited,
    TicketDeleted,
    WriteFailed(String),
    DismissNotice,

    Quit,
}

/// Which child the queue renders. First match wins, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibleView {
    Error(String),
    Editing(Ticket),
    Detail(Ticket),
    Creating,
    List,
}

/// Top-level screen: the queue is only reachable when signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    SignInRequired,
    Queue(VisibleView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    AddSnack,
    ReturnToList,
}

impl ActionButton {
    pub fn label(self) -> &'static str {
        match self {
            ActionButton::AddSnack => "Add Snack",
            ActionButton::ReturnToList => "Return to Snack List",
        }
    }
}

pub const SIGN_IN_PROMPT: &str = "You must be signed in to access the queue.";

pub fn visible_view(state: &QueueState) -> VisibleView {
    if let Some(error) = &state.error {
        return VisibleView::Error(error.clone());
    }
    match &state.selected {
        Some(ticket) if state.editing => VisibleView::Editing(ticket.clone()),
        Some(ticket) => VisibleView::Detail(ticket.clone()),
        None if state.form_visible => VisibleView::Creating,
        None => VisibleView::List,
    }
}

pub fn screen(user: Option<&User>, state: &QueueState) -> Screen {
    match user {
        Some(_) => Screen::Queue(visible_view(state)),
        None => Screen::SignInRequired,
    }
}

/// The button shown under the current view, if any.
pub fn action_button(view: &VisibleView) -> Option<ActionButton> {
    match view {
        VisibleView::Error(_) => None,
        VisibleView::List => Some(ActionButton::AddSnack),
        VisibleView::Editing(_) | VisibleView::Detail(_) | VisibleView::Creating => {
            Some(ActionButton::ReturnToList)
        }
    }
}

pub fn reduce_queue_state(
    mut state: QueueState,
    action: QueueAction,
    list_height: usize,
) -> QueueState {
    match action {
        QueueAction::SnapshotReceived(tickets) => {
            state.tickets = tickets;
            if let Some(selected) = state.selected.take() {
                state.selected = match state.tickets.iter().find(|t| t.id == selected.id) {
                    Some(fresh) => Some(fresh.clone()),
                    // Keep a half-edited ticket so the operator's input survives.
                    None if state.editing => Some(selected),
                    None => None,
                };
            }
            if state.selected.is_none() {
                state.editing = false;
            }
            state.cursor = state.cursor.min(state.tickets.len().saturating_sub(1));
            state.scroll_offset = adjust_scroll(state.scroll_offset, state.cursor, list_height);
        }
        QueueAction::SubscriptionFailed(message) => {
            state.error = Some(message);
        }
        QueueAction::RefreshWaitTimes(now) => {
            for ticket in &mut state.tickets {
                ticket.refresh_wait_time(now);
            }
            if let Some(selected) = &mut state.selected {
                selected.refresh_wait_time(now);
            }
        }

        QueueAction::SelectTicket(id) => {
            if let Some(index) = state.tickets.iter().position(|t| t.id == id) {
                state = select_index(state, index, list_height);
            }
        }
        QueueAction::MoveDown => {
            if !state.tickets.is_empty() {
                state.cursor = (state.cursor + 1).min(state.tickets.len() - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.cursor, list_height);
            }
        }
        QueueAction::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
            state.scroll_offset = adjust_scroll(state.scroll_offset, state.cursor, list_height);
        }
        QueueAction::GoToTop => {
            state.cursor = 0;
            state.scroll_offset = 0;
        }
        QueueAction::GoToBottom => {
            if !state.tickets.is_empty() {
                state.cursor = state.tickets.len() - 1;
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.cursor, list_height);
            }
        }
        QueueAction::OpenSelected => {
            if state.cursor < state.tickets.len() {
                let cursor = state.cursor;
                state = select_index(state, cursor, list_height);
            }
        }
        QueueAction::ButtonPressed => {
            if state.selected.is_some() {
                state.form_visible = false;
                state.selected = None;
                state.editing = false;
            } else {
                state.form_visible = !state.form_visible;
            }
            state.write_error = None;
        }
        QueueAction::BeginEdit => {
            if state.selected.is_some() {
                state.editing = true;
                state.write_error = None;
            }
        }
        QueueAction::CancelForm => {
            if state.editing {
                state.editing = false;
            } else {
                state.form_visible = false;
            }
            state.write_error = None;
        }

        QueueAction::TicketCreated => {
            state.form_visible = false;
            state.write_error = None;
        }
        QueueAction::TicketEdited | QueueAction::TicketDeleted => {
            state.editing = false;
            state.selected = None;
            state.write_error = None;
        }
        QueueAction::WriteFailed(message) => {
            state.write_error = Some(message);
        }
        QueueAction::DismissNotice => {
            state.write_error = None;
        }

        // Need the store or the terminal; handled by the caller
        QueueAction::DeleteSelected | QueueAction::Quit => {}
    }
    state
}

fn select_index(mut state: QueueState, index: usize, list_height: usize) -> QueueState {
    state.selected = state.tickets.get(index).cloned();
    state.cursor = index;
    state.scroll_offset = adjust_scroll(state.scroll_offset, index, list_height);
    state.write_error = None;
    state
}

/// Scroll offset that keeps `cursor` inside a window of `list_height` rows.
pub fn adjust_scroll(scroll_offset: usize, cursor: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }
    if cursor < scroll_offset {
        return cursor;
    }
    if cursor >= scroll_offset + list_height {
        return cursor + 1 - list_height;
    }
    scroll_offset
}

/// Map a key press to a queue action for the current screen.
///
/// Forms own their keys (text input, Tab, Ctrl-S, Esc), so the editing and
/// creating views only react to Ctrl-C here.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, screen: &Screen) -> Option<QueueAction> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(QueueAction::Quit);
    }

    let view = match screen {
        Screen::SignInRequired => {
            return matches!(code, KeyCode::Char('q') | KeyCode::Esc).then_some(QueueAction::Quit);
        }
        Screen::Queue(view) => view,
    };

    match view {
        VisibleView::Error(_) => {
            matches!(code, KeyCode::Char('q') | KeyCode::Esc).then_some(QueueAction::Quit)
        }
        VisibleView::List => match code {
            KeyCode::Char('j') | KeyCode::Down => Some(QueueAction::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(QueueAction::MoveUp),
            KeyCode::Char('g') | KeyCode::Home => Some(QueueAction::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(QueueAction::GoToBottom),
            KeyCode::Enter => Some(QueueAction::OpenSelected),
            KeyCode::Char('a') | KeyCode::Char('n') => Some(QueueAction::ButtonPressed),
            KeyCode::Char('x') => Some(QueueAction::DismissNotice),
            KeyCode::Char('q') | KeyCode::Esc => Some(QueueAction::Quit),
            _ => None,
        },
        VisibleView::Detail(_) => match code {
            KeyCode::Char('e') => Some(QueueAction::BeginEdit),
            KeyCode::Char('d') => Some(QueueAction::DeleteSelected),
            KeyCode::Esc | KeyCode::Char('b') => Some(QueueAction::ButtonPressed),
            KeyCode::Char('x') => Some(QueueAction::DismissNotice),
            KeyCode::Char('q') => Some(QueueAction::Quit),
            _ => None,
        },
        VisibleView::Editing(_) | VisibleView::Creating => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, name: &str) -> Ticket {
        Ticket {
            id: TicketId::new(id).unwrap(),
            name: name.to_string(),
            origin: "Room 4".to_string(),
            issue: "Hungry".to_string(),
            time_open: "2024-01-01T12:00:00Z".parse().unwrap(),
            formatted_wait_time: "less than a minute".to_string(),
        }
    }

    fn state_with_tickets(count: usize) -> QueueState {
        QueueState {
            tickets: (0..count)
                .map(|i| ticket(&format!("t{i}"), &format!("Snack {i}")))
                .collect(),
            ..QueueState::default()
        }
    }

    fn id(s: &str) -> TicketId {
        TicketId::new(s).unwrap()
    }

    // ------------------------------------------------------------------
    // View selection
    // ------------------------------------------------------------------

    #[test]
    fn test_default_view_is_list() {
        assert_eq!(visible_view(&QueueState::default()), VisibleView::List);
    }

    #[test]
    fn test_error_wins_over_everything() {
        let state = QueueState {
            error: Some("denied".to_string()),
            selected: Some(ticket("a", "Chips")),
            editing: true,
            form_visible: true,
            ..state_with_tickets(1)
        };
        assert_eq!(visible_view(&state), VisibleView::Error("denied".to_string()));
    }

    #[test]
    fn test_editing_wins_over_detail_and_form() {
        let state = QueueState {
            selected: Some(ticket("a", "Chips")),
            editing: true,
            form_visible: true,
            ..QueueState::default()
        };
        assert_eq!(visible_view(&state), VisibleView::Editing(ticket("a", "Chips")));
    }

    #[test]
    fn test_editing_without_selection_falls_through() {
        let state = QueueState {
            editing: true,
            form_visible: true,
            ..QueueState::default()
        };
        assert_eq!(visible_view(&state), VisibleView::Creating);
    }

    #[test]
    fn test_detail_wins_over_form() {
        let state = QueueState {
            selected: Some(ticket("a", "Chips")),
            form_visible: true,
            ..QueueState::default()
        };
        assert_eq!(visible_view(&state), VisibleView::Detail(ticket("a", "Chips")));
    }

    #[test]
    fn test_signed_out_screen_ignores_state() {
        let state = QueueState {
            error: Some("denied".to_string()),
            form_visible: true,
            ..state_with_tickets(3)
        };
        assert_eq!(screen(None, &state), Screen::SignInRequired);

        let user = User::new("u1", "ops@example.com");
        assert_eq!(
            screen(Some(&user), &state),
            Screen::Queue(VisibleView::Error("denied".to_string()))
        );
    }

    #[test]
    fn test_action_button_labels() {
        assert_eq!(action_button(&VisibleView::List), Some(ActionButton::AddSnack));
        assert_eq!(action_button(&VisibleView::Creating), Some(ActionButton::ReturnToList));
        assert_eq!(
            action_button(&VisibleView::Detail(ticket("a", "Chips"))),
            Some(ActionButton::ReturnToList)
        );
        assert_eq!(action_button(&VisibleView::Error("x".to_string())), None);
        assert_eq!(ActionButton::AddSnack.label(), "Add Snack");
        assert_eq!(ActionButton::ReturnToList.label(), "Return to Snack List");
    }

    // ------------------------------------------------------------------
    // Reducer: subscription
    // ------------------------------------------------------------------

    #[test]
    fn test_snapshot_replaces_list() {
        let state = state_with_tickets(3);
        let next = reduce_queue_state(
            state,
            QueueAction::SnapshotReceived(vec![ticket("z", "Gum")]),
            10,
        );
        assert_eq!(next.tickets, vec![ticket("z", "Gum")]);
    }

    #[test]
    fn test_snapshot_refreshes_selected_ticket() {
        let mut state = state_with_tickets(2);
        state.selected = Some(ticket("t1", "Snack 1"));

        let mut updated = ticket("t1", "Snack 1");
        updated.issue = "Still hungry".to_string();
        let next = reduce_queue_state(
            state,
            QueueAction::SnapshotReceived(vec![ticket("t0", "Snack 0"), updated.clone()]),
            10,
        );
        assert_eq!(next.selected, Some(updated));
    }

    #[test]
    fn test_snapshot_drops_vanished_selection() {
        let mut state = state_with_tickets(2);
        state.selected = Some(ticket("t1", "Snack 1"));
        let next = reduce_queue_state(
            state,
            QueueAction::SnapshotReceived(vec![ticket("t0", "Snack 0")]),
            10,
        );
        assert_eq!(next.selected, None);
        assert_eq!(visible_view(&next), VisibleView::List);
    }

    #[test]
    fn test_snapshot_keeps_selection_while_editing() {
        let mut state = state_with_tickets(2);
        state.selected = Some(ticket("t1", "Snack 1"));
        state.editing = true;
        let next = reduce_queue_state(state, QueueAction::SnapshotReceived(vec![]), 10);
        assert_eq!(next.selected, Some(ticket("t1", "Snack 1")));
        assert!(next.editing);
    }

    #[test]
    fn test_snapshot_clamps_cursor() {
        let mut state = state_with_tickets(5);
        state.cursor = 4;
        let next = reduce_queue_state(
            state,
            QueueAction::SnapshotReceived(vec![ticket("a", "A"), ticket("b", "B")]),
            10,
        );
        assert_eq!(next.cursor, 1);

        let next = reduce_queue_state(next, QueueAction::SnapshotReceived(vec![]), 10);
        assert_eq!(next.cursor, 0);
    }

    #[test]
    fn test_subscription_failure_sets_error() {
        let next = reduce_queue_state(
            QueueState::default(),
            QueueAction::SubscriptionFailed("permission denied".to_string()),
            10,
        );
        assert_eq!(next.error.as_deref(), Some("permission denied"));
        assert_eq!(action_button(&visible_view(&next)), None);
    }

    #[test]
    fn test_refresh_wait_times_in_place() {
        let mut state = state_with_tickets(1);
        state.selected = Some(state.tickets[0].clone());
        let now: Timestamp = "2024-01-01T14:00:00Z".parse().unwrap();
        let next = reduce_queue_state(state, QueueAction::RefreshWaitTimes(now), 10);
        assert_eq!(next.tickets[0].formatted_wait_time, "about 2 hours");
        assert_eq!(
            next.selected.map(|t| t.formatted_wait_time),
            Some("about 2 hours".to_string())
        );
    }

    // ------------------------------------------------------------------
    // Reducer: navigation and the action button
    // ------------------------------------------------------------------

    #[test]
    fn test_select_ticket_by_id() {
        let state = state_with_tickets(3);
        let next = reduce_queue_state(state, QueueAction::SelectTicket(id("t2")), 10);
        assert_eq!(next.selected.as_ref().map(|t| t.name.as_str()), Some("Snack 2"));
        assert_eq!(next.cursor, 2);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let state = state_with_tickets(3);
        let next = reduce_queue_state(state.clone(), QueueAction::SelectTicket(id("nope")), 10);
        assert_eq!(next, state);
    }

    #[test]
    fn test_cursor_movement() {
        let state = state_with_tickets(5);
        let state = reduce_queue_state(state, QueueAction::MoveDown, 10);
        assert_eq!(state.cursor, 1);
        let state = reduce_queue_state(state, QueueAction::GoToBottom, 10);
        assert_eq!(state.cursor, 4);
        let state = reduce_queue_state(state, QueueAction::MoveDown, 10);
        assert_eq!(state.cursor, 4);
        let state = reduce_queue_state(state, QueueAction::GoToTop, 10);
        assert_eq!(state.cursor, 0);
        let state = reduce_queue_state(state, QueueAction::MoveUp, 10);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_move_down_on_empty_list() {
        let next = reduce_queue_state(QueueState::default(), QueueAction::MoveDown, 10);
        assert_eq!(next.cursor, 0);
    }

    #[test]
    fn test_cursor_scrolls_list() {
        let mut state = state_with_tickets(10);
        for _ in 0..5 {
            state = reduce_queue_state(state, QueueAction::MoveDown, 3);
        }
        assert_eq!(state.cursor, 5);
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_open_selected_uses_cursor() {
        let mut state = state_with_tickets(3);
        state.cursor = 1;
        let next = reduce_queue_state(state, QueueAction::OpenSelected, 10);
        assert_eq!(next.selected, Some(ticket("t1", "Snack 1")));

        let next = reduce_queue_state(QueueState::default(), QueueAction::OpenSelected, 10);
        assert_eq!(next.selected, None);
    }

    #[test]
    fn test_button_toggles_form_from_list() {
        let state = reduce_queue_state(QueueState::default(), QueueAction::ButtonPressed, 10);
        assert!(state.form_visible);
        assert_eq!(visible_view(&state), VisibleView::Creating);
        let state = reduce_queue_state(state, QueueAction::ButtonPressed, 10);
        assert!(!state.form_visible);
    }

    #[test]
    fn test_button_returns_to_list_from_detail_and_edit() {
        let state = QueueState {
            selected: Some(ticket("a", "Chips")),
            editing: true,
            form_visible: true,
            ..QueueState::default()
        };
        let next = reduce_queue_state(state, QueueAction::ButtonPressed, 10);
        assert_eq!(next.selected, None);
        assert!(!next.editing);
        assert!(!next.form_visible);
        assert_eq!(visible_view(&next), VisibleView::List);
    }

    #[test]
    fn test_begin_edit_requires_selection() {
        let next = reduce_queue_state(QueueState::default(), QueueAction::BeginEdit, 10);
        assert!(!next.editing);

        let state = reduce_queue_state(state_with_tickets(1), QueueAction::SelectTicket(id("t0")), 10);
        let next = reduce_queue_state(state, QueueAction::BeginEdit, 10);
        assert!(next.editing);
    }

    #[test]
    fn test_cancel_form_steps_back_one_level() {
        let state = QueueState {
            selected: Some(ticket("a", "Chips")),
            editing: true,
            ..QueueState::default()
        };
        let next = reduce_queue_state(state, QueueAction::CancelForm, 10);
        assert_eq!(visible_view(&next), VisibleView::Detail(ticket("a", "Chips")));

        let state = QueueState {
            form_visible: true,
            ..QueueState::default()
        };
        let next = reduce_queue_state(state, QueueAction::CancelForm, 10);
        assert_eq!(visible_view(&next), VisibleView::List);
    }

    // ------------------------------------------------------------------
    // Reducer: write outcomes
    // ------------------------------------------------------------------

    #[test]
    fn test_created_hides_form() {
        let state = QueueState {
            form_visible: true,
            write_error: Some("old".to_string()),
            ..QueueState::default()
        };
        let next = reduce_queue_state(state, QueueAction::TicketCreated, 10);
        assert!(!next.form_visible);
        assert_eq!(next.write_error, None);
    }

    #[test]
    fn test_edited_and_deleted_clear_selection() {
        for action in [QueueAction::TicketEdited, QueueAction::TicketDeleted] {
            let state = QueueState {
                selected: Some(ticket("a", "Chips")),
                editing: true,
                ..QueueState::default()
            };
            let next = reduce_queue_state(state, action, 10);
            assert_eq!(next.selected, None);
            assert!(!next.editing);
        }
    }

    #[test]
    fn test_write_failure_keeps_view() {
        let state = QueueState {
            form_visible: true,
            ..QueueState::default()
        };
        let next = reduce_queue_state(state, QueueAction::WriteFailed("offline".to_string()), 10);
        assert_eq!(visible_view(&next), VisibleView::Creating);
        assert_eq!(next.write_error.as_deref(), Some("offline"));

        let next = reduce_queue_state(next, QueueAction::DismissNotice, 10);
        assert_eq!(next.write_error, None);
    }

    #[test]
    fn test_delete_selected_is_external() {
        let state = QueueState {
            selected: Some(ticket("a", "Chips")),
            ..QueueState::default()
        };
        let next = reduce_queue_state(state.clone(), QueueAction::DeleteSelected, 10);
        assert_eq!(next, state);
    }

    // ------------------------------------------------------------------
    // Scrolling and keys
    // ------------------------------------------------------------------

    #[test]
    fn test_adjust_scroll() {
        assert_eq!(adjust_scroll(0, 3, 10), 0);
        assert_eq!(adjust_scroll(0, 12, 10), 3);
        assert_eq!(adjust_scroll(5, 2, 10), 2);
        assert_eq!(adjust_scroll(5, 2, 0), 0);
    }

    #[test]
    fn test_list_keys() {
        let list = Screen::Queue(VisibleView::List);
        let none = KeyModifiers::NONE;
        assert_eq!(key_to_action(KeyCode::Char('j'), none, &list), Some(QueueAction::MoveDown));
        assert_eq!(key_to_action(KeyCode::Up, none, &list), Some(QueueAction::MoveUp));
        assert_eq!(key_to_action(KeyCode::Char('G'), none, &list), Some(QueueAction::GoToBottom));
        assert_eq!(key_to_action(KeyCode::Enter, none, &list), Some(QueueAction::OpenSelected));
        assert_eq!(key_to_action(KeyCode::Char('a'), none, &list), Some(QueueAction::ButtonPressed));
        assert_eq!(key_to_action(KeyCode::Char('q'), none, &list), Some(QueueAction::Quit));
        assert_eq!(key_to_action(KeyCode::Char('e'), none, &list), None);
    }

    #[test]
    fn test_detail_keys() {
        let detail = Screen::Queue(VisibleView::Detail(ticket("a", "Chips")));
        let none = KeyModifiers::NONE;
        assert_eq!(key_to_action(KeyCode::Char('e'), none, &detail), Some(QueueAction::BeginEdit));
        assert_eq!(
            key_to_action(KeyCode::Char('d'), none, &detail),
            Some(QueueAction::DeleteSelected)
        );
        assert_eq!(key_to_action(KeyCode::Esc, none, &detail), Some(QueueAction::ButtonPressed));
        assert_eq!(key_to_action(KeyCode::Char('j'), none, &detail), None);
    }

    #[test]
    fn test_forms_leave_keys_alone() {
        let none = KeyModifiers::NONE;
        for screen in [
            Screen::Queue(VisibleView::Creating),
            Screen::Queue(VisibleView::Editing(ticket("a", "Chips"))),
        ] {
            assert_eq!(key_to_action(KeyCode::Char('q'), none, &screen), None);
            assert_eq!(key_to_action(KeyCode::Esc, none, &screen), None);
            assert_eq!(
                key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, &screen),
                Some(QueueAction::Quit)
            );
        }
    }

    #[test]
    fn test_error_and_sign_in_only_quit() {
        let none = KeyModifiers::NONE;
        for screen in [
            Screen::SignInRequired,
            Screen::Queue(VisibleView::Error("x".to_string())),
        ] {
            assert_eq!(key_to_action(KeyCode::Char('q'), none, &screen), Some(QueueAction::Quit));
            assert_eq!(key_to_action(KeyCode::Esc, none, &screen), Some(QueueAction::Quit));
            assert_eq!(key_to_action(KeyCode::Char('a'), none, &screen), None);
        }
    }
}
