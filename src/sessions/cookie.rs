use axum::http::{header::SET_COOKIE, HeaderMap};
use uuid::Uuid;

/// Pull a single cookie's value out of a `Cookie` request header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.trim() == name).then(|| v.trim())
    })
}

/// Attach the session cookie to a response.
pub fn set_session_cookie(headers: &mut HeaderMap, name: &str, session_id: Uuid) {
    let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, session_id);
    headers.insert(SET_COOKIE, cookie.parse().expect("valid cookie header"));
}

/// Expire the session cookie on the client.
pub fn clear_session_cookie(headers: &mut HeaderMap, name: &str) {
    let cookie = format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name);
    headers.insert(SET_COOKIE, cookie.parse().expect("valid cookie header"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_several() {
        let header = "theme=dark; linkshelf_session=abc123; other=1";
        assert_eq!(cookie_value(header, "linkshelf_session"), Some("abc123"));
    }

    #[test]
    fn tolerates_whitespace() {
        assert_eq!(cookie_value("  a = 1 ;b=2", "a"), Some("1"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(cookie_value("theme=dark", "linkshelf_session"), None);
        assert_eq!(cookie_value("", "linkshelf_session"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        assert_eq!(cookie_value("linkshelf_session2=abc", "linkshelf_session"), None);
    }

    #[test]
    fn set_and_clear_emit_one_header() {
        let sid = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        set_session_cookie(&mut headers, "s", sid);
        let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(value.starts_with(&format!("s={}", sid)));
        assert!(value.contains("HttpOnly"));

        clear_session_cookie(&mut headers, "s");
        let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(value.starts_with("s=;"));
        assert!(value.contains("Max-Age=0"));
    }
}
