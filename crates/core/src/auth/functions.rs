use chrono::Duration;

use super::{validate_return_to, GuardConfig, GuardDecision, AUTH_COOKIE, RETURN_TO_PARAM};

/// True when `path` is `prefix` itself or a sub-path, query or fragment of it.
fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => {
            rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#')
        }
        None => false,
    }
}

/// Whether `current` already points at the login route.
pub fn is_login_route(current: &str, login_path: &str) -> bool {
    is_under(current, login_path)
}

/// Build the login redirect location.
///
/// The return path is attached only when it is a valid local path that is
/// not the login route itself.
///
/// # Examples
///
/// ```
/// use industrias_core::auth::login_redirect;
///
/// assert_eq!(
///     login_redirect("/login", Some("/admin/orders?page=2")),
///     "/login?return_to=%2Fadmin%2Forders%3Fpage%3D2"
/// );
/// assert_eq!(login_redirect("/login", None), "/login");
/// ```
pub fn login_redirect(login_path: &str, return_to: Option<&str>) -> String {
    match return_to
        .and_then(validate_return_to)
        .filter(|path| !is_login_route(path, login_path))
    {
        Some(path) => format!(
            "{}?{}={}",
            login_path,
            RETURN_TO_PARAM,
            urlencoding::encode(path)
        ),
        None => login_path.to_string(),
    }
}

/// `Set-Cookie` value mirroring the bearer token.
pub fn auth_cookie(token: &str, max_age: Duration) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        AUTH_COOKIE,
        urlencoding::encode(token),
        max_age.num_seconds().max(0)
    )
}

/// `Set-Cookie` value that removes the mirrored token.
pub fn clear_auth_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", AUTH_COOKIE)
}

/// Extract the mirrored bearer token from a `Cookie` request header.
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// Decide whether a server-rendered route may be served.
///
/// Protected routes without the `auth_token` cookie go to the login route
/// with a return path; the login route with a cookie present goes to `/`.
pub fn evaluate_route(path: &str, cookie_header: Option<&str>, config: &GuardConfig) -> GuardDecision {
    let authenticated = cookie_header
        .and_then(token_from_cookie_header)
        .is_some();

    if is_login_route(path, &config.login_path) {
        return if authenticated {
            GuardDecision::Redirect("/".to_string())
        } else {
            GuardDecision::Allow
        };
    }

    let protected = config
        .protected_prefixes
        .iter()
        .any(|prefix| is_under(path, prefix));

    if protected && !authenticated {
        GuardDecision::Redirect(login_redirect(&config.login_path, Some(path)))
    } else {
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_route_matches_exact_and_query() {
        assert!(is_login_route("/login", "/login"));
        assert!(is_login_route("/login?return_to=%2F", "/login"));
        assert!(is_login_route("/login/", "/login"));
    }

    #[test]
    fn login_route_does_not_match_lookalikes() {
        assert!(!is_login_route("/loginhelp", "/login"));
        assert!(!is_login_route("/admin/login-audit", "/login"));
    }

    #[test]
    fn redirect_drops_invalid_return_path() {
        assert_eq!(login_redirect("/login", Some("https://evil.example")), "/login");
    }

    #[test]
    fn redirect_drops_login_as_return_path() {
        assert_eq!(login_redirect("/login", Some("/login?x=1")), "/login");
    }

    #[test]
    fn redirect_supports_custom_login_path() {
        assert_eq!(
            login_redirect("/admin/login", Some("/admin")),
            "/admin/login?return_to=%2Fadmin"
        );
    }

    #[test]
    fn cookie_round_trips_token() {
        let cookie = auth_cookie("abc.def", Duration::days(1));
        assert_eq!(cookie, "auth_token=abc.def; Path=/; Max-Age=86400; SameSite=Lax");

        let header = "darkMode=true; auth_token=abc.def; other=1";
        assert_eq!(token_from_cookie_header(header), Some("abc.def".to_string()));
    }

    #[test]
    fn cookie_header_without_token() {
        assert_eq!(token_from_cookie_header("darkMode=true"), None);
        assert_eq!(token_from_cookie_header("auth_token="), None);
        assert_eq!(token_from_cookie_header(""), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert_eq!(clear_auth_cookie(), "auth_token=; Path=/; Max-Age=0; SameSite=Lax");
    }

    #[test]
    fn negative_max_age_is_clamped() {
        assert!(auth_cookie("t", Duration::seconds(-5)).contains("Max-Age=0"));
    }

    #[test]
    fn protected_route_without_cookie_redirects() {
        let config = GuardConfig::default();
        assert_eq!(
            evaluate_route("/admin/products", None, &config),
            GuardDecision::Redirect("/login?return_to=%2Fadmin%2Fproducts".to_string())
        );
    }

    #[test]
    fn protected_route_with_cookie_is_allowed() {
        let config = GuardConfig::default();
        assert_eq!(
            evaluate_route("/admin", Some("auth_token=tok"), &config),
            GuardDecision::Allow
        );
    }

    #[test]
    fn public_route_is_allowed_without_cookie() {
        let config = GuardConfig::default();
        assert_eq!(evaluate_route("/catalog", None, &config), GuardDecision::Allow);
        assert_eq!(evaluate_route("/administration-info", None, &config), GuardDecision::Allow);
    }

    #[test]
    fn login_with_cookie_redirects_home() {
        let config = GuardConfig::default();
        assert_eq!(
            evaluate_route("/login", Some("auth_token=tok"), &config),
            GuardDecision::Redirect("/".to_string())
        );
        assert_eq!(evaluate_route("/login", None, &config), GuardDecision::Allow);
    }
}
