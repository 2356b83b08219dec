//! Document metadata sink.

use std::fmt;

use thiserror::Error;

/// The document elements the interceptor writes to, besides the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataElement {
    Description,
    Canonical,
}

impl MetadataElement {
    /// CSS selector locating the element in the document.
    pub fn selector(&self) -> &'static str {
        match self {
            MetadataElement::Description => r#"meta[name="description"]"#,
            MetadataElement::Canonical => r#"link[rel="canonical"]"#,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataElement::Description => "description",
            MetadataElement::Canonical => "canonical",
        }
    }
}

impl fmt::Display for MetadataElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("document has no element matching {0}")]
    MissingElement(MetadataElement),
}

/// Write access to the document-level SEO metadata.
///
/// Setting the title always succeeds. The other two setters report
/// `MissingElement` when the document has no such element.
pub trait MetadataSink {
    fn set_title(&mut self, title: &str);

    fn set_description_content(&mut self, content: &str) -> Result<(), SinkError>;

    fn set_canonical_href(&mut self, href: &str) -> Result<(), SinkError>;
}

impl<S: MetadataSink + ?Sized> MetadataSink for &mut S {
    fn set_title(&mut self, title: &str) {
        (**self).set_title(title)
    }

    fn set_description_content(&mut self, content: &str) -> Result<(), SinkError> {
        (**self).set_description_content(content)
    }

    fn set_canonical_href(&mut self, href: &str) -> Result<(), SinkError> {
        (**self).set_canonical_href(href)
    }
}
