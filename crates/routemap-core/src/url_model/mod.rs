//! URL sanitizing for arbitrary text pulled from content metadata.
//!
//! Callers that need a well-formed URL must never fail on bad input, so a
//! parse failure is absorbed and replaced with a known-good fallback URL.

use anyhow::{Context, Result};
use url::{ParseError, Url};

/// Fallback used when no `fallback_url` is configured.
pub const DEFAULT_FALLBACK_URL: &str = "https://gitlab.com";

/// Parses `input` as an absolute URL. Relative references are an error
/// (`RelativeUrlWithoutBase`), as is anything the URL standard rejects.
pub fn parse_absolute(input: &str) -> Result<Url, ParseError> {
    Url::parse(input)
}

/// Parses candidates into absolute URLs, substituting a fixed fallback on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSanitizer {
    fallback: Url,
}

impl UrlSanitizer {
    /// Builds a sanitizer around `fallback`, which must itself be an absolute URL.
    pub fn new(fallback: &str) -> Result<Self> {
        let fallback = parse_absolute(fallback)
            .with_context(|| format!("invalid fallback URL: {fallback:?}"))?;
        Ok(Self { fallback })
    }

    pub fn fallback(&self) -> &Url {
        &self.fallback
    }

    /// Parses `candidate`, or returns a copy of the fallback if it is not an absolute URL.
    pub fn sanitize(&self, candidate: &str) -> Url {
        match parse_absolute(candidate) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(candidate, error = %e, "using fallback URL");
                self.fallback.clone()
            }
        }
    }
}

impl Default for UrlSanitizer {
    fn default() -> Self {
        Self {
            fallback: Url::parse(DEFAULT_FALLBACK_URL).expect("built-in fallback URL is valid"),
        }
    }
}

/// Sanitizes `candidate` with the built-in fallback URL.
///
/// # Examples
///
/// - `to_url("https://example.com/x")` → host `example.com`
/// - `to_url("not a url")` → `https://gitlab.com/`
pub fn to_url(candidate: &str) -> Url {
    UrlSanitizer::default().sanitize(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_absolute_rejects_relative_and_bad_hosts() {
        assert!(parse_absolute("mailto:someone@example.com").is_ok());
        assert_eq!(
            parse_absolute("blog/post-1"),
            Err(ParseError::RelativeUrlWithoutBase)
        );
        assert_eq!(parse_absolute(""), Err(ParseError::RelativeUrlWithoutBase));
        assert!(parse_absolute("https://exa mple.com").is_err());
    }

    #[test]
    fn valid_url_is_parsed() {
        let url = to_url("https://example.com/x");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/x");
    }

    #[test]
    fn garbage_falls_back() {
        let fallback = Url::parse(DEFAULT_FALLBACK_URL).unwrap();
        assert_eq!(to_url("not a url"), fallback);
        assert_eq!(to_url(""), fallback);
        assert_eq!(to_url("/relative/path"), fallback);
        assert_eq!(to_url("http://"), fallback);
    }

    #[test]
    fn configured_fallback_is_used() {
        let sanitizer = UrlSanitizer::new("https://example.org/home").unwrap();
        assert_eq!(sanitizer.sanitize("::nope::").as_str(), "https://example.org/home");
        assert_eq!(sanitizer.fallback().host_str(), Some("example.org"));
    }

    #[test]
    fn invalid_configured_fallback_is_rejected() {
        let err = UrlSanitizer::new("not a url").unwrap_err();
        assert!(format!("{err:#}").contains("invalid fallback URL"));
    }

    #[test]
    fn default_fallback_has_trailing_root_path() {
        assert_eq!(UrlSanitizer::default().fallback().as_str(), "https://gitlab.com/");
    }
}
