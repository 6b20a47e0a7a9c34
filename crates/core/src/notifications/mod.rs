//! Admin notification channel payloads.
//!
//! The backend pushes a JSON text frame on `/ws/admin` whenever the catalog,
//! an order, a quotation or a contact ticket changes. Frames are
//! fire-and-forget; nothing is acknowledged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Path of the admin notification channel.
pub const ADMIN_CHANNEL_PATH: &str = "/ws/admin";

/// One pushed notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminNotification {
    /// Dotted event name, e.g. `order.created`.
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Area of the system a notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Catalog,
    Order,
    Quotation,
    Contact,
    Other,
}

impl AdminNotification {
    pub fn kind(&self) -> NotificationKind {
        let scope = self.event.split('.').next().unwrap_or_default();
        match scope {
            "product" | "category" => NotificationKind::Catalog,
            "order" => NotificationKind::Order,
            "quotation" => NotificationKind::Quotation,
            "contact" => NotificationKind::Contact,
            _ => NotificationKind::Other,
        }
    }
}

/// Base URLs that cannot be turned into a channel URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelUrlError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
}

/// Parse a text frame received on the admin channel.
pub fn parse_notification(text: &str) -> Result<AdminNotification, serde_json::Error> {
    serde_json::from_str(text)
}

/// Build the WebSocket URL of the admin channel.
///
/// `http` maps to `ws` and `https` to `wss`; the token travels in the query
/// string because browsers cannot set headers on WebSocket upgrades. Any
/// other scheme is rejected.
///
/// # Examples
///
/// ```
/// use industrias_core::notifications::admin_channel_url;
///
/// let url = admin_channel_url("https://api.example.com/", "tok").unwrap();
/// assert_eq!(url.as_str(), "wss://api.example.com/ws/admin?token=tok");
/// ```
pub fn admin_channel_url(base_url: &str, token: &str) -> Result<Url, ChannelUrlError> {
    let mut url = Url::parse(base_url)?;

    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(ChannelUrlError::UnsupportedScheme(other.to_string())),
    };
    url.set_scheme(scheme)
        .map_err(|()| ChannelUrlError::UnsupportedScheme(url.scheme().to_string()))?;

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}{}", base_path, ADMIN_CHANNEL_PATH));
    url.set_query(None);
    url.query_pairs_mut().append_pair("token", token);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_order_notification() {
        let text = r#"{"event":"order.created","data":{"id":42,"total":"1500.00"},"timestamp":"2024-05-01T10:00:00Z"}"#;
        let notification = parse_notification(text).unwrap();

        assert_eq!(notification.event, "order.created");
        assert_eq!(notification.data["id"], 42);
        assert_eq!(notification.kind(), NotificationKind::Order);
        assert!(notification.timestamp.is_some());
    }

    #[test]
    fn missing_data_defaults_to_null() {
        let notification = parse_notification(r#"{"event":"category.deleted"}"#).unwrap();
        assert!(notification.data.is_null());
        assert_eq!(notification.kind(), NotificationKind::Catalog);
    }

    #[test]
    fn kinds_by_event_scope() {
        let kind = |event: &str| AdminNotification {
            event: event.to_string(),
            data: serde_json::Value::Null,
            timestamp: None,
        }
        .kind();

        assert_eq!(kind("product.updated"), NotificationKind::Catalog);
        assert_eq!(kind("quotation.status_changed"), NotificationKind::Quotation);
        assert_eq!(kind("contact.created"), NotificationKind::Contact);
        assert_eq!(kind("audit.logged"), NotificationKind::Other);
    }

    #[test]
    fn rejects_frames_without_event() {
        assert!(parse_notification(r#"{"data":{}}"#).is_err());
        assert!(parse_notification("ping").is_err());
    }

    #[test]
    fn channel_url_from_http_base() {
        let url = admin_channel_url("http://localhost:3001", "a b").unwrap();
        assert_eq!(url.as_str(), "ws://localhost:3001/ws/admin?token=a+b");
    }

    #[test]
    fn channel_url_keeps_base_path() {
        let url = admin_channel_url("https://example.com/api/", "t").unwrap();
        assert_eq!(url.as_str(), "wss://example.com/api/ws/admin?token=t");
    }

    #[test]
    fn channel_url_rejects_garbage() {
        assert!(matches!(
            admin_channel_url("not a url", "t"),
            Err(ChannelUrlError::Parse(_))
        ));
    }

    #[test]
    fn channel_url_rejects_non_http_schemes() {
        assert_eq!(
            admin_channel_url("foo://host", "t"),
            Err(ChannelUrlError::UnsupportedScheme("foo".to_string()))
        );
        assert_eq!(
            admin_channel_url("ftp://files.example.com", "t"),
            Err(ChannelUrlError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn channel_url_accepts_ws_base() {
        let url = admin_channel_url("wss://push.example.com", "t").unwrap();
        assert_eq!(url.as_str(), "wss://push.example.com/ws/admin?token=t");
    }
}
