//! Resource URL construction.
//!
//! Every request URL is `<host>/api/v1/<segment>/<segment>...[?query]`. Segments are
//! percent-encoded exactly once; the query string is appended only when at least one
//! pair is present.

use crate::error::{Error, Result};
use crate::types::API_PREFIX;
use url::Url;

/// Builds resource URLs relative to a fixed API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: Url,
}

impl UrlBuilder {
    /// Create a builder for a Taiga host (e.g. `https://api.taiga.io`).
    ///
    /// The `api/v1` prefix is appended unless the path already ends with those two segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or cannot carry a path.
    pub fn new(host: impl AsRef<str>) -> Result<Self> {
        let mut base = Url::parse(host.as_ref())?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint(format!(
                "`{}` cannot be used as a base URL",
                host.as_ref()
            )));
        }

        let trimmed = base.path().trim_end_matches('/').to_string();
        let prefixed = trimmed
            .strip_suffix(API_PREFIX)
            .is_some_and(|mount| mount.is_empty() || mount.ends_with('/'));
        if prefixed {
            base.set_path(&trimmed);
        } else {
            base.set_path(&format!("{trimmed}/{API_PREFIX}"));
        }

        Ok(Self { base })
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Join path segments onto the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments.
    pub fn join<S>(&self, segments: &[S]) -> Result<Url>
    where
        S: AsRef<str>,
    {
        self.build(segments, &[])
    }

    /// Join path segments and append the query pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments.
    pub fn build<S>(&self, segments: &[S], query: &[(&str, String)]) -> Result<Url>
    where
        S: AsRef<str>,
    {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::InvalidEndpoint(format!("`{}` cannot carry path segments", self.base))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> UrlBuilder {
        UrlBuilder::new("https://taiga.example.com").unwrap()
    }

    #[test]
    fn appends_api_prefix() {
        assert_eq!(
            builder().base().as_str(),
            "https://taiga.example.com/api/v1"
        );
        let explicit = UrlBuilder::new("https://taiga.example.com/api/v1/").unwrap();
        assert_eq!(explicit.base().as_str(), "https://taiga.example.com/api/v1");
    }

    #[test]
    fn api_prefix_matches_whole_segments() {
        let lookalike = UrlBuilder::new("https://example.com/legacyapi/v1").unwrap();
        assert_eq!(
            lookalike.base().as_str(),
            "https://example.com/legacyapi/v1/api/v1"
        );

        let mounted = UrlBuilder::new("https://example.com/taiga/api/v1").unwrap();
        assert_eq!(mounted.base().as_str(), "https://example.com/taiga/api/v1");

        let subpath = UrlBuilder::new("https://example.com/taiga").unwrap();
        assert_eq!(subpath.base().as_str(), "https://example.com/taiga/api/v1");
    }

    #[test]
    fn joins_segments_without_query() {
        let url = builder().join(&["issues", "42"]).unwrap();
        assert_eq!(url.as_str(), "https://taiga.example.com/api/v1/issues/42");
    }

    #[test]
    fn appends_query_pairs() {
        let url = builder()
            .build(&["issues", "42"], &[("project", "5".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://taiga.example.com/api/v1/issues/42?project=5"
        );
    }

    #[test]
    fn encodes_query_values_once() {
        let url = builder()
            .build(&["projects", "by_slug"], &[("slug", "my project".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://taiga.example.com/api/v1/projects/by_slug?slug=my+project"
        );
    }

    #[test]
    fn empty_segment_is_kept() {
        let url = builder().join(&["history", "", "42"]).unwrap();
        assert_eq!(url.as_str(), "https://taiga.example.com/api/v1/history//42");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(UrlBuilder::new("mailto:ops@example.com").is_err());
        assert!(UrlBuilder::new("not a url").is_err());
    }
}
