//! Terminal UI for the snack queue
//!
//! - `queue` - the `QueueScreen` root component
//! - `components` - header, footer, ticket views and forms
//! - `services` - form validation

pub mod components;
pub mod queue;
pub mod services;
pub mod theme;

pub use queue::{QueueScreen, QueueScreenProps};
pub use theme::Theme;
