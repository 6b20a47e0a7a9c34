//! Admin notification channel over WebSocket.

use futures_util::StreamExt;
use industrias_core::notifications::{admin_channel_url, parse_notification, AdminNotification};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::{ClientError, Result};

/// Subscriber for `/ws/admin` push notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminChannel;

impl AdminChannel {
    /// Connect to the admin channel and stream notifications.
    ///
    /// Unparsable frames are logged and skipped. A close frame ends the
    /// stream; a transport error yields once and ends it.
    pub async fn connect(
        base_url: &str,
        token: &str,
    ) -> Result<impl futures_core::Stream<Item = Result<AdminNotification>>> {
        let url = admin_channel_url(base_url, token)
            .map_err(|e| ClientError::InvalidInput(format!("invalid base URL: {}", e)))?;

        let (mut socket, _) = tokio_tungstenite::connect_async(url.as_str())
            .await
            .map_err(|e| ClientError::WebSocket(e.to_string()))?;
        info!(base_url, "Connected to admin notification channel");

        let stream = async_stream::stream! {
            while let Some(message) = socket.next().await {
                match message {
                    Ok(Message::Text(text)) => match parse_notification(text.as_str()) {
                        Ok(notification) => yield Ok(notification),
                        Err(e) => warn!(error = %e, "Skipping malformed notification"),
                    },
                    Ok(Message::Close(frame)) => {
                        debug!(?frame, "Admin channel closed by server");
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        yield Err(ClientError::WebSocket(e.to_string()));
                        break;
                    }
                }
            }
        };

        Ok(stream)
    }
}

impl ApiClient {
    /// Subscribe to admin notifications with the stored token.
    pub async fn admin_notifications(
        &self,
    ) -> Result<impl futures_core::Stream<Item = Result<AdminNotification>>> {
        let token = self.session().require_token().await?;
        AdminChannel::connect(self.base_url(), &token).await
    }
}
