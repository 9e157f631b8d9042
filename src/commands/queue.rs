//! Interactive queue command (`snackq queue`, the default)
//!
//! Opens the queue TUI against the configured store. The TUI owns the
//! terminal, so logs go to the configured log file.

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{Result, SnackError};
use crate::logging::{LogTarget, init_logging};
use crate::queue::QueueServices;
use crate::tui::QueueScreen;

/// Launch the queue TUI
pub async fn cmd_queue() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config.log, LogTarget::File(config.log.resolved_file()))?;

    let services = QueueServices::from_config(&config);
    tracing::info!(signed_in = services.current_user().is_some(), "opening snack queue");

    element!(QueueScreen(services: Some(services)))
        .fullscreen()
        .await
        .map_err(|e| SnackError::Other(format!("TUI error: {e}")))
}
