//! Shared TUI components
//!
//! Building blocks for the queue screen: chrome (header, footer, toast),
//! the ticket views, and the new/edit forms.

pub mod footer;
pub mod header;
pub mod sign_in;
pub mod ticket_card;
pub mod ticket_detail;
pub mod ticket_form;
pub mod ticket_list;
pub mod toast;

pub use footer::{
    DETAIL_SHORTCUTS, FORM_SHORTCUTS, Footer, FooterProps, LIST_SHORTCUTS, Shortcut, shortcuts_for,
};
pub use header::{Header, HeaderProps};
pub use sign_in::{SignInPrompt, SignInPromptProps};
pub use ticket_card::{CARD_HEIGHT, TicketCard, TicketCardProps};
pub use ticket_detail::{TicketDetail, TicketDetailProps};
pub use ticket_form::{
    EditTicketForm, EditTicketFormProps, FormField, FormOutcome, FormState, NewTicketForm,
    NewTicketFormProps, TicketForm, TicketFormProps,
};
pub use ticket_list::{TicketList, TicketListProps};
pub use toast::{Toast, ToastLevel, render_toast};
