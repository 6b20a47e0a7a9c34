/// Longest response body excerpt carried in an error message.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Truncate `body` to at most `max` characters, appending `...` when cut.
pub fn truncate_body(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Format an HTTP failure with its status, URL and a body excerpt.
///
/// # Examples
///
/// ```
/// use industrias_core::error::format_http_error;
///
/// let error = format_http_error(400, "http://api.local/orders", "Invalid quantity");
/// assert_eq!(error, "Request failed: 400 http://api.local/orders - Invalid quantity");
/// ```
pub fn format_http_error(status: u16, url: &str, body: &str) -> String {
    format!(
        "Request failed: {} {} - {}",
        status,
        url,
        truncate_body(body.trim(), MAX_ERROR_BODY_CHARS)
    )
}
