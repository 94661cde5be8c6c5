//! CSRF Token
//!
//! Reads the CSRF token the server issues as a cookie.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Value of cookie `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// CSRF token from the current document's cookies
pub fn csrf_token(cookie_name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, cookie_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=Tk3n; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("Tk3n"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_prefix_is_not_a_match() {
        let cookies = "csrftoken2=wrong; csrftoken=right";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("right"));
    }

    #[test]
    fn test_cookie_is_decoded() {
        assert_eq!(cookie_value("csrftoken=a%2Bb%3D", "csrftoken").as_deref(), Some("a+b="));
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
