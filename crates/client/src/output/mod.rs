//! Rendering of API responses and notifications for the terminal.

pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a response value as compact (`json`) or indented (`pretty`) JSON.
pub fn format_output<T: Serialize>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_default()
}
