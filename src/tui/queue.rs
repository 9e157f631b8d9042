//! Snack queue screen (`snackq queue`)
//!
//! Root component of the terminal UI. It owns the [`QueueState`], subscribes
//! to the ticket store once on mount, re-ages wait times on a timer, and
//! routes keys through [`key_to_action`].

use futures::StreamExt;
use iocraft::prelude::*;
use tokio::time::{Instant, MissedTickBehavior};

use crate::queue::model::{
    QueueAction, QueueState, Screen, VisibleView, action_button, key_to_action,
    reduce_queue_state, screen,
};
use crate::queue::{QueueServices, WriteRequest};
use crate::session::User;
use crate::store::SnapshotEvent;
use crate::tui::components::{
    CARD_HEIGHT, EditTicketForm, Footer, Header, NewTicketForm, SignInPrompt, TicketDetail,
    TicketList, Toast, render_toast, shortcuts_for,
};
use crate::tui::theme::theme;
use crate::types::TicketFields;

/// Rows used by everything except the ticket list: header, button bar,
/// footer, and the two "more above/below" lines.
const CHROME_ROWS: usize = 5;

/// Props for the QueueScreen component
#[derive(Default, Props)]
pub struct QueueScreenProps {
    pub services: Option<QueueServices>,
}

/// Apply `action` to the queue state held by the component.
pub fn dispatch(queue: &mut State<QueueState>, action: QueueAction, list_height: usize) {
    let current = queue.read().clone();
    queue.set(reduce_queue_state(current, action, list_height));
}

/// How many ticket cards fit in a terminal of `height` rows.
pub fn list_rows_for_height(height: u16) -> usize {
    ((height as usize).saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1)
}

async fn perform_write(
    services: Option<QueueServices>,
    request: WriteRequest,
    mut queue: State<QueueState>,
    mut notice: State<Option<Toast>>,
    list_rows: State<usize>,
) {
    let Some(services) = services else {
        return;
    };

    match services.write(request).await {
        Ok(outcome) => {
            dispatch(&mut queue, outcome.action, list_rows.get());
            notice.set(Some(Toast::success(outcome.message)));
        }
        Err(e) => {
            notice.set(None);
            dispatch(&mut queue, QueueAction::WriteFailed(e.to_string()), list_rows.get());
        }
    }
}

/// Main queue component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Snack Queue - ops@example.com  3 tickets |
/// +------------------------------------------+
/// | list / detail / form / error / sign-in   |
/// +------------------------------------------+
/// | [a] Add Snack                            |
/// | toast                                    |
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn QueueScreen<'a>(props: &QueueScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let services = props.services.clone();

    let user: State<Option<User>> =
        hooks.use_state(|| services.as_ref().and_then(QueueServices::current_user));
    let mut queue: State<QueueState> = hooks.use_state(QueueState::default);
    let mut notice: State<Option<Toast>> = hooks.use_state(|| None);
    let mut should_exit = hooks.use_state(|| false);
    let mut list_rows = hooks.use_state(|| list_rows_for_height(height));

    let rows = list_rows_for_height(height);
    if list_rows.get() != rows {
        list_rows.set(rows);
    }

    // Live query: runs until the subscription ends or the screen goes away
    let pump_handler: Handler<()> = hooks.use_async_handler({
        let services = services.clone();
        move |()| {
            let services = services.clone();
            let mut queue = queue;
            async move {
                let Some(services) = services else {
                    return;
                };
                let mut subscription = match services.store.subscribe(services.query()) {
                    Ok(subscription) => subscription,
                    Err(e) => {
                        tracing::error!("ticket subscription failed: {e}");
                        dispatch(
                            &mut queue,
                            QueueAction::SubscriptionFailed(e.to_string()),
                            list_rows.get(),
                        );
                        return;
                    }
                };
                while let Some(event) = subscription.next().await {
                    let action = match event {
                        SnapshotEvent::Snapshot(snapshot) => {
                            tracing::debug!(tickets = snapshot.documents.len(), "snapshot received");
                            QueueAction::SnapshotReceived(services.tickets_from(snapshot.documents))
                        }
                        SnapshotEvent::Error(message) => {
                            tracing::error!("ticket subscription failed: {message}");
                            QueueAction::SubscriptionFailed(message)
                        }
                    };
                    dispatch(&mut queue, action, list_rows.get());
                }
            }
        }
    });

    // Wait times age without any store traffic
    let refresh_handler: Handler<()> = hooks.use_async_handler({
        let services = services.clone();
        move |()| {
            let services = services.clone();
            let mut queue = queue;
            async move {
                let Some(services) = services else {
                    return;
                };
                let period = services.refresh_interval;
                let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    dispatch(
                        &mut queue,
                        QueueAction::RefreshWaitTimes(services.clock.now()),
                        list_rows.get(),
                    );
                }
            }
        }
    });

    // Start both loops once, and only for a signed-in operator
    let mut mounted = hooks.use_state(|| false);
    if !mounted.get() {
        mounted.set(true);
        if user.read().is_some() {
            pump_handler.clone()(());
            refresh_handler.clone()(());
        }
    }

    let write_handler: Handler<WriteRequest> = hooks.use_async_handler({
        let services = services.clone();
        move |request: WriteRequest| {
            let services = services.clone();
            perform_write(services, request, queue, notice, list_rows)
        }
    });

    let create_handler: Handler<TicketFields> = hooks.use_async_handler({
        let services = services.clone();
        move |fields: TicketFields| {
            let services = services.clone();
            perform_write(services, WriteRequest::Create(fields), queue, notice, list_rows)
        }
    });

    let edit_handler: Handler<TicketFields> = hooks.use_async_handler({
        let services = services.clone();
        move |fields: TicketFields| {
            let services = services.clone();
            async move {
                let selected = queue.read().selected.as_ref().map(|t| t.id.clone());
                if let Some(id) = selected {
                    perform_write(services, WriteRequest::Edit(id, fields), queue, notice, list_rows)
                        .await;
                }
            }
        }
    });

    let cancel_handler: Handler<()> = hooks.use_async_handler(move |()| {
        let mut queue = queue;
        async move {
            dispatch(&mut queue, QueueAction::CancelForm, list_rows.get());
        }
    });

    let current_user = user.read().clone();
    let state = queue.read().clone();
    let current_screen = screen(current_user.as_ref(), &state);

    hooks.use_terminal_events({
        let current_screen = current_screen.clone();
        let write_handler = write_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let Some(action) = key_to_action(code, modifiers, &current_screen) else {
                    return;
                };
                match action {
                    QueueAction::Quit => should_exit.set(true),
                    QueueAction::DeleteSelected => {
                        let selected = queue.read().selected.as_ref().map(|t| t.id.clone());
                        if let Some(id) = selected {
                            write_handler(WriteRequest::Delete(id));
                        }
                    }
                    action => {
                        notice.set(None);
                        dispatch(&mut queue, action, list_rows.get());
                    }
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let theme = theme();

    // Signed out: the prompt and nothing else
    let view = match &current_screen {
        Screen::SignInRequired => {
            return element! {
                View(width, height, background_color: theme.background) {
                    SignInPrompt
                }
            };
        }
        Screen::Queue(view) => view,
    };

    let body = match view {
        VisibleView::Error(message) => element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                gap: 1,
            ) {
                Text(content: "Could not load the snack queue", color: theme.error, weight: Weight::Bold)
                Text(content: message.clone(), color: theme.text_dimmed)
            }
        }
        .into_any(),
        VisibleView::Editing(ticket) => element! {
            EditTicketForm(
                ticket: Some(ticket.clone()),
                on_submit: Some(edit_handler.clone()),
                on_cancel: Some(cancel_handler.clone()),
            )
        }
        .into_any(),
        VisibleView::Detail(ticket) => element! {
            TicketDetail(ticket: Some(ticket.clone()))
        }
        .into_any(),
        VisibleView::Creating => element! {
            NewTicketForm(
                on_submit: Some(create_handler.clone()),
                on_cancel: Some(cancel_handler.clone()),
            )
        }
        .into_any(),
        VisibleView::List => element! {
            TicketList(
                tickets: state.tickets.clone(),
                cursor: state.cursor,
                scroll_offset: state.scroll_offset,
                visible_cards: rows,
            )
        }
        .into_any(),
    };

    let button_bar = action_button(view).map(|button| {
        let key = match view {
            VisibleView::List => "a",
            _ => "Esc",
        };
        element! {
            View(
                width: 100pct,
                height: 1,
                flex_shrink: 0.0,
                padding_left: 1,
            ) {
                Text(
                    content: format!("[{key}] {}", button.label()),
                    color: theme.button,
                    weight: Weight::Bold,
                )
            }
        }
    });

    let toast = state
        .write_error
        .clone()
        .map(Toast::error)
        .or_else(|| notice.read().clone());
    let shortcuts = shortcuts_for(&current_screen);
    let ticket_count = state.tickets.len();
    let user_email = current_user.map(|u| u.email);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(user_email: user_email, ticket_count: ticket_count)
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(Some(body))
            }
            #(button_bar)
            #(render_toast(toast.as_ref()))
            Footer(shortcuts: shortcuts)
        }
    }
}
