/// Validate a return path before placing it in a login redirect.
///
/// Only local paths are accepted: they must start with a single `/`, must not
/// carry a scheme, and must not contain control characters. Anything else
/// would turn the login page into an open redirect.
///
/// # Examples
///
/// ```
/// use industrias_core::auth::validate_return_to;
///
/// assert_eq!(validate_return_to("/admin/orders"), Some("/admin/orders"));
/// assert_eq!(validate_return_to("//evil.example"), None);
/// assert_eq!(validate_return_to("https://evil.example"), None);
/// ```
pub fn validate_return_to(path: &str) -> Option<&str> {
    let local = path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\");
    let clean = !path.chars().any(char::is_control) && !path.contains("://");

    (local && clean).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_admin_path() {
        assert_eq!(
            validate_return_to("/admin/quotations/12"),
            Some("/admin/quotations/12")
        );
    }

    #[test]
    fn accepts_root() {
        assert_eq!(validate_return_to("/"), Some("/"));
    }

    #[test]
    fn accepts_query_and_fragment() {
        let path = "/catalog?category=valves&page=2#grid";
        assert_eq!(validate_return_to(path), Some(path));
    }

    #[test]
    fn rejects_relative_without_slash() {
        assert_eq!(validate_return_to("admin"), None);
        assert_eq!(validate_return_to(""), None);
    }

    #[test]
    fn rejects_protocol_relative() {
        assert_eq!(validate_return_to("//evil.example/path"), None);
    }

    #[test]
    fn rejects_backslash_host_trick() {
        assert_eq!(validate_return_to("/\\evil.example"), None);
    }

    #[test]
    fn rejects_embedded_scheme() {
        assert_eq!(validate_return_to("/redirect?to=https://evil.example"), None);
    }

    #[test]
    fn rejects_script_urls() {
        assert_eq!(validate_return_to("javascript:alert(1)"), None);
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(validate_return_to("/admin\r\nSet-Cookie: x=1"), None);
        assert_eq!(validate_return_to("/admin\0"), None);
    }
}
