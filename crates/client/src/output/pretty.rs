//! Pretty output formatting.

use industrias_core::notifications::{AdminNotification, NotificationKind};

fn kind_label(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Catalog => "catalog",
        NotificationKind::Order => "order",
        NotificationKind::Quotation => "quotation",
        NotificationKind::Contact => "contact",
        NotificationKind::Other => "other",
    }
}

/// Format a notification as one line.
pub fn format_notification(notification: &AdminNotification) -> String {
    let mut output = format!(
        "[{}] {}",
        kind_label(notification.kind()),
        notification.event
    );
    if let Some(timestamp) = notification.timestamp {
        output.push_str(&format!(" at {}", timestamp.to_rfc3339()));
    }
    if !notification.data.is_null() {
        output.push_str(&format!("\n  {}", notification.data));
    }
    output
}

/// Format the stored-token status.
pub fn format_auth_status(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("Logged in (token {})", mask_token(token)),
        None => "Not logged in.".to_string(),
    }
}

/// Show only the last four characters of a token.
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(8), tail)
}
