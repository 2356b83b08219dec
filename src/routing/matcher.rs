//! Path pattern matching.
//!
//! # Design Decisions
//! - Literal matching is ASCII case-insensitive
//! - One trailing slash is tolerated (`/faq/` matches `/faq`)
//! - The catch-all matches every path, so it must be declared last

use std::fmt;

use serde::{Serialize, Serializer};

/// Display form of the catch-all pattern.
pub const CATCH_ALL_PATTERN: &str = "/:pathMatch(.*)*";

/// A route's path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// A fixed path such as `/` or `/youtube-downloader`.
    Literal(String),
    /// Matches any path.
    CatchAll,
}

impl PathPattern {
    pub fn literal(path: impl Into<String>) -> Self {
        PathPattern::Literal(path.into())
    }

    /// Returns true if `path` is matched by this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Literal(expected) => {
                normalize(path).eq_ignore_ascii_case(normalize(expected))
            }
            PathPattern::CatchAll => true,
        }
    }

    /// The literal path, if this is not the catch-all.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            PathPattern::Literal(path) => Some(path),
            PathPattern::CatchAll => None,
        }
    }
}

fn normalize(path: &str) -> &str {
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Literal(path) => f.write_str(path),
            PathPattern::CatchAll => f.write_str(CATCH_ALL_PATTERN),
        }
    }
}

impl Serialize for PathPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_matcher() {
        let pattern = PathPattern::literal("/faq");
        assert!(pattern.matches("/faq"));
        assert!(pattern.matches("/faq/"));
        assert!(pattern.matches("/FAQ")); // Case insensitive
        assert!(!pattern.matches("/faq/more"));
        assert!(!pattern.matches("/faqs"));
        assert!(!pattern.matches("/"));
    }

    #[test]
    fn test_root_matcher() {
        let pattern = PathPattern::literal("/");
        assert!(pattern.matches("/"));
        assert!(pattern.matches(""));
        assert!(!pattern.matches("//x"));
    }

    #[test]
    fn test_catch_all_matches_everything() {
        let pattern = PathPattern::CatchAll;
        assert!(pattern.matches("/"));
        assert!(pattern.matches("/anything/at/all"));
        assert_eq!(pattern.to_string(), CATCH_ALL_PATTERN);
        assert_eq!(pattern.as_literal(), None);
    }
}
