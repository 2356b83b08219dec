//! Platform descriptors and the validated registry that holds them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slugs that would collide with a static route.
const RESERVED_SLUGS: &[&str] = &["faq"];

/// A single question/answer pair shown on a platform page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Faq {
    #[serde(alias = "q")]
    pub question: String,
    #[serde(alias = "a")]
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Everything the application knows about one supported platform.
///
/// Only `slug`, `title` and `description` matter to routing; the rest is
/// carried through to the rendered view untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformDescriptor {
    /// URL-safe identifier; the platform page lives at `/{slug}`.
    pub slug: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub domain: String,
    /// Document title for the platform page.
    pub title: String,
    /// Meta description for the platform page.
    pub description: String,
    pub placeholder: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl PlatformDescriptor {
    /// Route path derived from the slug.
    pub fn route_path(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// A registry construction defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate platform slug '{0}'")]
    DuplicateSlug(String),

    #[error("duplicate platform name '{0}'")]
    DuplicateName(String),

    #[error("platform '{slug}' is missing required field '{field}'")]
    MissingField { slug: String, field: &'static str },

    #[error("platform slug '{0}' is not URL-safe (lowercase letters, digits and inner '-' only)")]
    InvalidSlug(String),

    #[error("platform slug '{0}' collides with a built-in route")]
    ReservedSlug(String),
}

/// Immutable, ordered collection of platform descriptors.
///
/// Construction validates every entry; a `PlatformRegistry` value is
/// therefore always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlatformRegistry {
    platforms: Vec<PlatformDescriptor>,
}

impl PlatformRegistry {
    /// Validate `platforms` and freeze them in their declared order.
    pub fn new(platforms: Vec<PlatformDescriptor>) -> Result<Self, Vec<RegistryError>> {
        validate_platforms(&platforms)?;
        Ok(Self { platforms })
    }

    /// The built-in registry published on viddl.me.
    pub fn reference() -> Result<Self, Vec<RegistryError>> {
        Self::new(super::reference::platforms())
    }

    /// Look up a platform by slug.
    pub fn get(&self, slug: &str) -> Option<&PlatformDescriptor> {
        self.platforms.iter().find(|p| p.slug == slug)
    }

    /// Iterate platforms in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformDescriptor> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlatformRegistry {
    type Item = &'a PlatformDescriptor;
    type IntoIter = std::slice::Iter<'a, PlatformDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.platforms.iter()
    }
}

/// Check every descriptor, collecting all problems.
pub fn validate_platforms(platforms: &[PlatformDescriptor]) -> Result<(), Vec<RegistryError>> {
    let mut errors = Vec::new();
    let mut slugs = HashSet::new();
    let mut names = HashSet::new();

    for platform in platforms {
        if !is_url_safe_slug(&platform.slug) {
            errors.push(RegistryError::InvalidSlug(platform.slug.clone()));
        } else if RESERVED_SLUGS.contains(&platform.slug.as_str()) {
            errors.push(RegistryError::ReservedSlug(platform.slug.clone()));
        }

        if !slugs.insert(platform.slug.as_str()) {
            errors.push(RegistryError::DuplicateSlug(platform.slug.clone()));
        }

        let required = [
            ("name", &platform.name),
            ("title", &platform.title),
            ("description", &platform.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(RegistryError::MissingField {
                    slug: platform.slug.clone(),
                    field,
                });
            }
        }

        if !platform.name.trim().is_empty() && !names.insert(platform.name.as_str()) {
            errors.push(RegistryError::DuplicateName(platform.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
