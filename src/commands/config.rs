//! `config show`: display the effective configuration

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::{Config, StoreBackend};
use crate::error::Result;
use crate::paths::{config_path, format_relative_path};

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    if output_json {
        let json_output = json!({
            "store": {
                "backend": backend_name(config.store.backend),
                "path": config.store.resolved_path().to_string_lossy(),
                "watch": config.store.watch,
            },
            "refresh_interval_secs": config.refresh_interval_secs,
            "log": {
                "level": config.log.level,
                "file": config.log.resolved_file().to_string_lossy(),
            },
            "config_file": config_path().to_string_lossy(),
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    println!("{}", render_text(&config));
    Ok(())
}

fn backend_name(backend: StoreBackend) -> &'static str {
    match backend {
        StoreBackend::File => "file",
        StoreBackend::Memory => "memory",
    }
}

fn render_text(config: &Config) -> String {
    let mut text_output = String::new();

    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text_output.push_str(&format!("{}:\n", "store".cyan()));
    text_output.push_str(&format!("  backend: {}\n", backend_name(config.store.backend)));
    if config.store.backend == StoreBackend::File {
        text_output.push_str(&format!(
            "  path: {}\n",
            format_relative_path(&config.store.resolved_path())
        ));
        text_output.push_str(&format!("  watch: {}\n", config.store.watch));
    }

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}: {}s\n",
        "refresh_interval".cyan(),
        config.refresh_interval_secs
    ));

    text_output.push('\n');
    text_output.push_str(&format!("{}:\n", "log".cyan()));
    text_output.push_str(&format!("  level: {}\n", config.log.level));
    text_output.push_str(&format!(
        "  file: {}\n",
        format_relative_path(&config.log.resolved_file())
    ));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", config_path().display()).dimmed()
    ));
    text_output
}
