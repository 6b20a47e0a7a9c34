use super::{HeaderList, RequestBody, JSON_CONTENT_TYPE};

/// Returns true for `http://` and `https://` URLs.
fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Normalize a request path so it begins with `/`.
///
/// Absolute URLs are returned untouched.
///
/// # Examples
///
/// ```
/// use industrias_core::request::normalize_path;
///
/// assert_eq!(normalize_path("products"), "/products");
/// assert_eq!(normalize_path("/orders/7"), "/orders/7");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    if is_absolute(path) || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Join the configured base URL with a request path.
///
/// # Examples
///
/// ```
/// use industrias_core::request::join_url;
///
/// assert_eq!(join_url("http://api.local/", "products"), "http://api.local/products");
/// assert_eq!(join_url("http://api.local", "https://cdn.local/x"), "https://cdn.local/x");
/// ```
pub fn join_url(base_url: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    format!("{}{}", base_url.trim_end_matches('/'), normalize_path(path))
}

/// Format a bearer credential for the `Authorization` header.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Build the final header list for a request.
///
/// Caller headers override the JSON default, the bearer token overrides any
/// caller `Authorization`, and multipart bodies carry no `Content-Type` at
/// all so the transport can set the boundary.
pub fn merge_headers(user: &HeaderList, token: Option<&str>, body: &RequestBody) -> HeaderList {
    let mut headers = HeaderList::new();
    headers.insert("Content-Type", JSON_CONTENT_TYPE);

    for (name, value) in user.iter() {
        headers.insert(name, value);
    }

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.insert("Authorization", bearer(token));
    }

    if body.is_multipart() {
        headers.remove("Content-Type");
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MultipartForm;

    #[test]
    fn normalize_keeps_leading_slash() {
        assert_eq!(normalize_path("/auth/login"), "/auth/login");
    }

    #[test]
    fn normalize_adds_leading_slash() {
        assert_eq!(normalize_path("quotations?page=2"), "/quotations?page=2");
    }

    #[test]
    fn normalize_leaves_absolute_urls() {
        assert_eq!(
            normalize_path("https://files.local/a.pdf"),
            "https://files.local/a.pdf"
        );
    }

    #[test]
    fn join_trims_trailing_slashes_on_base() {
        assert_eq!(
            join_url("http://localhost:3001//", "/products"),
            "http://localhost:3001/products"
        );
    }

    #[test]
    fn join_preserves_base_path_prefix() {
        assert_eq!(
            join_url("https://api.example.com/api", "orders"),
            "https://api.example.com/api/orders"
        );
    }

    #[test]
    fn merge_defaults_to_json() {
        let headers = merge_headers(&HeaderList::new(), None, &RequestBody::Empty);
        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert!(!headers.contains("Authorization"));
    }

    #[test]
    fn merge_attaches_bearer_token() {
        let headers = merge_headers(&HeaderList::new(), Some("abc"), &RequestBody::Empty);
        assert_eq!(headers.get("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn merge_ignores_empty_token() {
        let headers = merge_headers(&HeaderList::new(), Some(""), &RequestBody::Empty);
        assert!(!headers.contains("Authorization"));
    }

    #[test]
    fn merge_lets_caller_override_content_type() {
        let user: HeaderList = [("content-type", "text/csv")].into_iter().collect();
        let headers = merge_headers(&user, None, &RequestBody::Text("a,b".into()));
        assert_eq!(headers.get("Content-Type"), Some("text/csv"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn merge_token_wins_over_caller_authorization() {
        let user: HeaderList = [("Authorization", "Basic xyz")].into_iter().collect();
        let headers = merge_headers(&user, Some("tok"), &RequestBody::Empty);
        assert_eq!(headers.get("authorization"), Some("Bearer tok"));
    }

    #[test]
    fn merge_strips_content_type_for_multipart() {
        let user: HeaderList = [("Content-Type", "application/json"), ("X-Client", "admin")]
            .into_iter()
            .collect();
        let body = RequestBody::Multipart(MultipartForm::new().text("a", "b"));
        let headers = merge_headers(&user, Some("tok"), &body);

        assert!(!headers.contains("Content-Type"));
        assert_eq!(headers.get("X-Client"), Some("admin"));
        assert_eq!(headers.get("Authorization"), Some("Bearer tok"));
    }
}
