//! Session commands
//!
//! - `login`: sign in as an operator
//! - `logout`: remove the session
//! - `whoami`: show who is signed in

use owo_colors::OwoColorize;
use serde_json::json;

use crate::error::{Result, SnackError};
use crate::paths::format_relative_path;
use crate::session::FileSession;

pub fn cmd_login(email: &str) -> Result<()> {
    let session = FileSession::default();
    let user = session.sign_in(email)?;
    println!("Signed in as {}", user.email.green());
    Ok(())
}

pub fn cmd_logout() -> Result<()> {
    if FileSession::default().sign_out()? {
        println!("Signed out");
    } else {
        println!("{}", "Not signed in".dimmed());
    }
    Ok(())
}

pub fn cmd_whoami(output_json: bool) -> Result<()> {
    let session = FileSession::default();
    let user = session.load()?.ok_or(SnackError::NotSignedIn)?;

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "uid": user.uid,
                "email": user.email,
                "session_file": format_relative_path(session.path()),
            }))?
        );
    } else {
        println!("{} ({})", user.email.green(), user.uid.dimmed());
    }
    Ok(())
}
