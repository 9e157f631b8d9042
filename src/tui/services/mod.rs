//! Services backing the TUI forms

pub mod validator;

pub use validator::{FieldError, TicketFormValidator};
