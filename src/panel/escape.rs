//! Context-specific output encoding.
//!
//! The panel writes the same label into three positions with three distinct
//! encoders: option text ([`escape_text`]), the searchable `data-label`
//! attribute ([`escape_attr`]), and the navigation URL in `value`
//! ([`escape_url`]). None of them is interchangeable with another.

/// Escape for HTML text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape for a double-quoted HTML attribute value.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Sanitize a navigation target for embedding in an attribute.
///
/// Returns `None` for targets that must not be rendered at all: empty
/// strings and absolute URLs with a scheme other than http/https
/// (`javascript:`, `data:`, ...). Accepted targets are percent-encoded
/// where needed and then attribute-escaped.
pub fn escape_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() || has_disallowed_scheme(url) {
        return None;
    }

    let mut encoded = String::with_capacity(url.len());
    for c in url.chars() {
        if is_url_safe(c) {
            encoded.push(c);
        } else {
            let ch = c.to_string();
            encoded.push_str(&urlencoding::encode(&ch));
        }
    }

    Some(escape_attr(&encoded))
}

/// A colon introduces a scheme only when it appears before any path,
/// query, or fragment delimiter.
fn has_disallowed_scheme(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return false;
    };
    let delimiter = url.find(['/', '?', '#']).unwrap_or(url.len());
    if colon > delimiter {
        return false;
    }

    let scheme = &url[..colon];
    !(scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
}

/// RFC 3986 unreserved characters plus the reserved set that carries
/// meaning inside a URL. Everything else (spaces, quotes, angle brackets,
/// non-ASCII) gets percent-encoded. Existing `%XX` sequences pass through
/// untouched so already-encoded URLs are not double-encoded.
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_'
                | '.'
                | '~'
                | '/'
                | ':'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '%'
        )
}
