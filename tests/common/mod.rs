//! Shared utilities for integration tests.

#![allow(dead_code)]

use viddl_nav::navigation::{MetadataElement, MetadataSink, SinkError};
use viddl_nav::registry::{Faq, PlatformDescriptor};
use viddl_nav::{Site, SiteConfig};

/// One write the interceptor attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    Title(String),
    Description(String),
    Canonical(String),
}

/// A sink that records every write and can pretend elements are missing.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<Write>,
    pub missing: Vec<MetadataElement>,
}

impl RecordingSink {
    pub fn without(missing: &[MetadataElement]) -> Self {
        Self {
            writes: Vec::new(),
            missing: missing.to_vec(),
        }
    }

    fn check(&self, element: MetadataElement) -> Result<(), SinkError> {
        if self.missing.contains(&element) {
            Err(SinkError::MissingElement(element))
        } else {
            Ok(())
        }
    }
}

impl MetadataSink for RecordingSink {
    fn set_title(&mut self, title: &str) {
        self.writes.push(Write::Title(title.to_string()));
    }

    fn set_description_content(&mut self, content: &str) -> Result<(), SinkError> {
        self.check(MetadataElement::Description)?;
        self.writes.push(Write::Description(content.to_string()));
        Ok(())
    }

    fn set_canonical_href(&mut self, href: &str) -> Result<(), SinkError> {
        self.check(MetadataElement::Canonical)?;
        self.writes.push(Write::Canonical(href.to_string()));
        Ok(())
    }
}

/// Site built from the default configuration.
pub fn reference_site() -> Site {
    Site::bootstrap(SiteConfig::default()).unwrap()
}

pub fn sample_platform(slug: &str, name: &str) -> PlatformDescriptor {
    PlatformDescriptor {
        slug: slug.to_string(),
        name: name.to_string(),
        color: "#123456".to_string(),
        icon: "*".to_string(),
        domain: format!("{}.example", slug),
        title: format!("{} Downloader | viddl.me", name),
        description: format!("Download {} videos.", name),
        placeholder: format!("Paste {} URL here...", name),
        features: vec!["Fast".to_string()],
        faqs: vec![Faq::new("Is it free?", "Yes.")],
    }
}
