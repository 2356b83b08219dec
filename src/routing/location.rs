//! Navigation targets split into path, query and fragment.

use std::fmt;

/// A parsed navigation target.
///
/// Only `path` takes part in route matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    /// Parse a raw target such as `/faq?ref=nav#top`.
    ///
    /// A missing leading slash is added; an empty target means `/`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            query: query.filter(|q| !q.is_empty()),
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    /// Location for redirecting `self` to `target`.
    ///
    /// A target without its own query and fragment keeps the ones from `self`.
    pub fn redirect_to(&self, target: &str) -> Self {
        let mut next = Self::parse(target);
        if next.query.is_none() && next.hash.is_none() {
            next.query = self.query.clone();
            next.hash = self.hash.clone();
        }
        next
    }

    /// Path plus query and fragment, as it would appear in the address bar.
    pub fn full_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_query_and_hash() {
        let loc = Location::parse("/faq?ref=nav#top");
        assert_eq!(loc.path, "/faq");
        assert_eq!(loc.query.as_deref(), Some("ref=nav"));
        assert_eq!(loc.hash.as_deref(), Some("top"));
        assert_eq!(loc.full_path(), "/faq?ref=nav#top");
    }

    #[test]
    fn test_parse_normalizes_leading_slash() {
        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("faq").path, "/faq");
        assert_eq!(Location::parse("?x=1").path, "/");
    }

    #[test]
    fn test_question_mark_inside_fragment() {
        let loc = Location::parse("/a#b?c");
        assert_eq!(loc.path, "/a");
        assert_eq!(loc.query, None);
        assert_eq!(loc.hash.as_deref(), Some("b?c"));
    }

    #[test]
    fn test_redirect_keeps_query_and_hash() {
        let from = Location::parse("/nope?utm_source=x#top");
        assert_eq!(from.redirect_to("/").full_path(), "/?utm_source=x#top");
    }

    #[test]
    fn test_redirect_target_with_query_wins() {
        let from = Location::parse("/nope?utm_source=x#top");
        assert_eq!(from.redirect_to("/faq?ref=moved").full_path(), "/faq?ref=moved");
    }
}
