//! In-memory document.

use crate::navigation::sink::{MetadataElement, MetadataSink, SinkError};

/// Document metadata held in plain fields.
///
/// `None` for the description or canonical field means the element does
/// not exist; writes to it then report `MissingElement`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    pub title: String,
    pub description_content: Option<String>,
    pub canonical_href: Option<String>,
}

impl MemoryDocument {
    /// A document without description or canonical elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with empty description and canonical elements.
    pub fn with_elements() -> Self {
        Self {
            title: String::new(),
            description_content: Some(String::new()),
            canonical_href: Some(String::new()),
        }
    }
}

impl MetadataSink for MemoryDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_description_content(&mut self, content: &str) -> Result<(), SinkError> {
        match self.description_content.as_mut() {
            Some(slot) => {
                *slot = content.to_string();
                Ok(())
            }
            None => Err(SinkError::MissingElement(MetadataElement::Description)),
        }
    }

    fn set_canonical_href(&mut self, href: &str) -> Result<(), SinkError> {
        match self.canonical_href.as_mut() {
            Some(slot) => {
                *slot = href.to_string();
                Ok(())
            }
            None => Err(SinkError::MissingElement(MetadataElement::Canonical)),
        }
    }
}
