//! Web URL validation

use url::Url;

use super::ValidationError;

/// A URL accepted at creation time: absolute, `http` or `https`, with a host.
///
/// The original text is kept as-is; parsing is only used for validation so
/// the stored value is exactly what the client sent. Because of that, only
/// RFC 3986 characters are allowed: `Url::parse` would quietly percent-encode
/// `"`, `<` or `>` and the raw text would reach clients unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebUrl(String);

impl WebUrl {
    /// Validate a web URL.
    ///
    /// # Example
    /// ```
    /// use bookmarks_server::models::WebUrl;
    ///
    /// assert!(WebUrl::new("http://www.apple.com").is_ok());
    /// assert!(WebUrl::new("ftp://files.example.com").is_err());
    /// assert!(WebUrl::new("not a url").is_err());
    /// assert!(WebUrl::new("http://example.com/<script>").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() || !s.bytes().all(is_uri_byte) || !has_valid_escapes(s) {
            return Err(ValidationError::InvalidUrl);
        }

        let parsed = Url::parse(s).map_err(|_| ValidationError::InvalidUrl)?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidUrl);
        }

        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(Self(s.to_owned())),
            _ => Err(ValidationError::InvalidUrl),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Unreserved, reserved, and `%` characters from RFC 3986.
fn is_uri_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=%".contains(&b)
}

/// Every `%` must start a two-digit hex escape.
fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_urls() {
        assert!(WebUrl::new("http://www.apple.com").is_ok());
        assert!(WebUrl::new("https://example.com/path?q=1#frag").is_ok());
        assert!(WebUrl::new("https://localhost:8080").is_ok());
    }

    #[test]
    fn keeps_original_text() {
        let url = WebUrl::new("http://www.apple.com").unwrap();
        assert_eq!(url.as_str(), "http://www.apple.com");
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(
            WebUrl::new("ftp://example.com").unwrap_err(),
            ValidationError::InvalidUrl
        );
        assert!(WebUrl::new("mailto:someone@example.com").is_err());
        assert!(WebUrl::new("javascript:alert(1)").is_err());
    }

    #[test]
    fn rejects_malformed() {
        assert!(WebUrl::new("").is_err());
        assert!(WebUrl::new("www.apple.com").is_err());
        assert!(WebUrl::new("http://").is_err());
        assert!(WebUrl::new("http://exa mple.com").is_err());
        assert!(WebUrl::new(" http://example.com").is_err());
    }

    #[test]
    fn rejects_characters_outside_rfc3986() {
        for url in [
            r#"http://example.com/"><script>alert(1)</script>"#,
            "http://example.com/<script>",
            "http://example.com/a>b",
            r#"http://example.com/"quoted""#,
            "http://example.com/{x}",
            "http://example.com/a|b",
            "http://example.com/caf\u{e9}",
            "http://example.com/back\\slash",
        ] {
            assert_eq!(
                WebUrl::new(url).unwrap_err(),
                ValidationError::InvalidUrl,
                "{}",
                url
            );
        }
    }

    #[test]
    fn percent_escapes_must_be_complete() {
        assert!(WebUrl::new("http://example.com/a%20b").is_ok());
        assert!(WebUrl::new("http://example.com/a%2").is_err());
        assert!(WebUrl::new("http://example.com/a%zz").is_err());
        assert!(WebUrl::new("http://example.com/100%").is_err());
    }
}
