//! New and edit ticket forms
//!
//! Both forms edit the same three fields. Keys are handled here; the parent
//! only hears about a validated submit or a cancel.

use iocraft::prelude::*;

use crate::tui::services::TicketFormValidator;
use crate::tui::theme::theme;
use crate::types::{Ticket, TicketFields};

/// Which field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Origin,
    Issue,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Origin,
            FormField::Origin => FormField::Issue,
            FormField::Issue => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Issue,
            FormField::Origin => FormField::Name,
            FormField::Issue => FormField::Origin,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name:",
            FormField::Origin => "Origin:",
            FormField::Issue => "Issue:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Submit,
    Cancel,
}

/// Field values plus focus, independent of rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: TicketFields,
    pub focused: FormField,
}

impl FormState {
    pub fn new(fields: TicketFields) -> Self {
        Self {
            fields,
            focused: FormField::default(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Origin => &self.fields.origin,
            FormField::Issue => &self.fields.issue,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.fields.name,
            FormField::Origin => &mut self.fields.origin,
            FormField::Issue => &mut self.fields.issue,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> FormOutcome {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('s') => FormOutcome::Submit,
                _ => FormOutcome::Continue,
            };
        }

        match code {
            KeyCode::Esc => return FormOutcome::Cancel,
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                self.focused = self.focused.prev();
            }
            KeyCode::BackTab => self.focused = self.focused.prev(),
            KeyCode::Tab => self.focused = self.focused.next(),
            KeyCode::Enter if self.focused == FormField::Issue => return FormOutcome::Submit,
            KeyCode::Enter => self.focused = self.focused.next(),
            KeyCode::Char(c) => self.value_mut(self.focused).push(c),
            KeyCode::Backspace => {
                self.value_mut(self.focused).pop();
            }
            _ => {}
        }
        FormOutcome::Continue
    }
}

/// Props for the ticket forms
#[derive(Default, Props)]
pub struct TicketFormProps {
    /// Ticket being edited; `None` creates a new one
    pub ticket: Option<Ticket>,
    /// Receives trimmed, validated fields
    pub on_submit: Option<Handler<TicketFields>>,
    pub on_cancel: Option<Handler<()>>,
}

#[component]
pub fn TicketForm(props: &TicketFormProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let initial = props
        .ticket
        .as_ref()
        .map(Ticket::fields)
        .unwrap_or_default();
    let mut form = hooks.use_state(|| FormState::new(initial));
    let mut error_text: State<Option<String>> = hooks.use_state(|| None);

    hooks.use_terminal_events({
        let on_submit = props.on_submit.clone();
        let on_cancel = props.on_cancel.clone();
        move |event| {
            let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }

            let outcome = form.write().handle_key(code, modifiers);
            match outcome {
                FormOutcome::Continue => {}
                FormOutcome::Cancel => {
                    if let Some(ref handler) = on_cancel {
                        handler(());
                    }
                }
                FormOutcome::Submit => {
                    let validated = TicketFormValidator::validate(&form.read().fields);
                    match validated {
                        Ok(fields) => {
                            error_text.set(None);
                            if let Some(ref handler) = on_submit {
                                handler(fields);
                            }
                        }
                        Err(e) => {
                            form.write().focused = e.field;
                            error_text.set(Some(e.to_string()));
                        }
                    }
                }
            }
        }
    });

    let title = match &props.ticket {
        Some(ticket) => format!("Update Snack: {}", ticket.name),
        None => "Add Snack".to_string(),
    };
    let snapshot = form.read().clone();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
        ) {
            View(
                width: 100pct,
                height: 1,
                padding_left: 1,
                background_color: theme.border,
            ) {
                Text(content: title, color: theme.text, weight: Weight::Bold)
            }

            #(error_text.read().clone().map(|message| element! {
                View(padding_left: 1, margin_top: 1) {
                    Text(content: message, color: theme.error)
                }
            }))

            View(
                flex_grow: 1.0,
                width: 100pct,
                padding: 1,
                flex_direction: FlexDirection::Column,
                gap: 1,
            ) {
                #([FormField::Name, FormField::Origin, FormField::Issue].into_iter().map(|field| {
                    let focused = snapshot.focused == field;
                    let value = snapshot.value(field);
                    let content = if focused { format!("{value}_") } else { value.to_string() };
                    let color = if focused { theme.border_focused } else { theme.border };
                    element! {
                        View(flex_direction: FlexDirection::Column) {
                            Text(
                                content: field.label(),
                                color: if focused { theme.border_focused } else { theme.text_dimmed },
                            )
                            View(
                                border_style: BorderStyle::Round,
                                border_color: color,
                                padding_left: 1,
                                padding_right: 1,
                                width: 100pct,
                            ) {
                                Text(content: content, color: theme.text)
                            }
                        }
                    }
                }))
            }
        }
    }
}

/// Props for NewTicketForm
#[derive(Default, Props)]
pub struct NewTicketFormProps {
    pub on_submit: Option<Handler<TicketFields>>,
    pub on_cancel: Option<Handler<()>>,
}

#[component]
pub fn NewTicketForm(props: &NewTicketFormProps) -> impl Into<AnyElement<'static>> {
    element! {
        TicketForm(
            ticket: None,
            on_submit: props.on_submit.clone(),
            on_cancel: props.on_cancel.clone(),
        )
    }
}

/// Props for EditTicketForm
#[derive(Default, Props)]
pub struct EditTicketFormProps {
    pub ticket: Option<Ticket>,
    pub on_submit: Option<Handler<TicketFields>>,
    pub on_cancel: Option<Handler<()>>,
}

/// Form prefilled from an existing ticket
#[component]
pub fn EditTicketForm(props: &EditTicketFormProps) -> impl Into<AnyElement<'static>> {
    element! {
        TicketForm(
            ticket: props.ticket.clone(),
            on_submit: props.on_submit.clone(),
            on_cancel: props.on_cancel.clone(),
        )
    }
}
