//! HTML shell document.
//!
//! Locates the `<title>`, `meta[name="description"]` and
//! `link[rel="canonical"]` elements in a served HTML shell and rewrites
//! them in place. Comments and the content of `<script>`, `<style>` and
//! `<template>` are skipped; the first matching element wins.

use std::ops::Range;

use crate::navigation::sink::{MetadataElement, MetadataSink, SinkError};

/// Shell used when no template is configured.
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>viddl.me - Free Video Downloader</title>
  <meta name="description" content="" />
  <link rel="canonical" href="https://viddl.me/" />
</head>
<body>
  <div id="app"></div>
</body>
</html>
"#;

/// An HTML document whose metadata elements can be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Current title text, unescaped.
    pub fn title(&self) -> Option<String> {
        let content = self.title_content_range()?;
        Some(unescape(&self.html[content]))
    }

    /// Current meta description content, unescaped.
    pub fn description_content(&self) -> Option<String> {
        self.element_attribute(MetadataElement::Description, "content")
    }

    /// Current canonical link href, unescaped.
    pub fn canonical_href(&self) -> Option<String> {
        self.element_attribute(MetadataElement::Canonical, "href")
    }

    fn title_content_range(&self) -> Option<Range<usize>> {
        let tag = find_start_tag(&self.html, "title", |_, _| true)?;
        let end = find_ignore_case(&self.html[tag.end..], "</title")
            .map(|offset| tag.end + offset)
            .unwrap_or(self.html.len());
        Some(tag.end..end)
    }

    fn element_attribute(&self, element: MetadataElement, attribute: &str) -> Option<String> {
        let tag = find_element(&self.html, element)?;
        let value = tag.attribute(&self.html, attribute)?.value.clone()?;
        Some(unescape(&self.html[value]))
    }

    fn set_element_attribute(
        &mut self,
        element: MetadataElement,
        attribute: &str,
        value: &str,
    ) -> Result<(), SinkError> {
        let tag = find_element(&self.html, element).ok_or(SinkError::MissingElement(element))?;
        let rendered = format!(r#"{}="{}""#, attribute, escape_attribute(value));

        match tag.attribute(&self.html, attribute) {
            Some(existing) => self.html.replace_range(existing.span.clone(), &rendered),
            None => self
                .html
                .insert_str(tag.insert_at, &format!(" {}", rendered)),
        }
        Ok(())
    }
}

impl MetadataSink for HtmlDocument {
    fn set_title(&mut self, title: &str) {
        let text = escape_text(title);

        if let Some(content) = self.title_content_range() {
            if content.end == self.html.len() {
                self.html.replace_range(content, &format!("{}</title>", text));
            } else {
                self.html.replace_range(content, &text);
            }
            return;
        }

        let element = format!("<title>{}</title>", text);
        let at = find_ignore_case(&self.html, "</head").unwrap_or(0);
        self.html.insert_str(at, &element);
    }

    fn set_description_content(&mut self, content: &str) -> Result<(), SinkError> {
        self.set_element_attribute(MetadataElement::Description, "content", content)
    }

    fn set_canonical_href(&mut self, href: &str) -> Result<(), SinkError> {
        self.set_element_attribute(MetadataElement::Canonical, "href", href)
    }
}

struct Attribute {
    name: Range<usize>,
    /// Value without its quotes.
    value: Option<Range<usize>>,
    /// Name through the end of the value, quotes included.
    span: Range<usize>,
}

struct StartTag {
    /// Index just past the closing `>`.
    end: usize,
    /// Where a new attribute is inserted: after the last attribute.
    insert_at: usize,
    attributes: Vec<Attribute>,
}

impl StartTag {
    fn attribute(&self, html: &str, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| html[a.name.clone()].eq_ignore_ascii_case(name))
    }

    fn attribute_is(&self, html: &str, name: &str, expected: &str) -> bool {
        self.attribute(html, name)
            .and_then(|a| a.value.clone())
            .map(|v| html[v].trim().eq_ignore_ascii_case(expected))
            .unwrap_or(false)
    }
}

fn find_element(html: &str, element: MetadataElement) -> Option<StartTag> {
    match element {
        MetadataElement::Description => {
            find_start_tag(html, "meta", |h, t| t.attribute_is(h, "name", "description"))
        }
        MetadataElement::Canonical => {
            find_start_tag(html, "link", |h, t| t.attribute_is(h, "rel", "canonical"))
        }
    }
}

/// Elements whose content is never scanned for tags.
const RAW_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

fn find_start_tag<F>(html: &str, tag: &str, accept: F) -> Option<StartTag>
where
    F: Fn(&str, &StartTag) -> bool,
{
    let bytes = html.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        if html[i..].starts_with("<!--") {
            i = i + 4 + html[i + 4..].find("-->")? + 3;
            continue;
        }

        let name_start = i + 1;
        let name_len = bytes[name_start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        let name_end = name_start + name_len;
        let terminated = matches!(bytes.get(name_end), Some(b) if b.is_ascii_whitespace() || *b == b'/' || *b == b'>');

        if name_len == 0 || !terminated {
            i += 1;
            continue;
        }

        let name = &html[name_start..name_end];
        if name.eq_ignore_ascii_case(tag) {
            let parsed = parse_start_tag(bytes, name_end)?;
            if accept(html, &parsed) {
                return Some(parsed);
            }
            i = parsed.end;
        } else if RAW_TEXT_ELEMENTS.iter().any(|raw| name.eq_ignore_ascii_case(raw)) {
            // Markup inside these is text; resume after the close tag.
            let end = parse_start_tag(bytes, name_end)?.end;
            let close = format!("</{}", name);
            i = end + find_ignore_case(&html[end..], &close)? + close.len();
        } else {
            i += 1;
        }
    }
    None
}

fn parse_start_tag(bytes: &[u8], mut pos: usize) -> Option<StartTag> {
    let len = bytes.len();
    let mut attributes = Vec::new();

    loop {
        pos = skip_whitespace(bytes, pos);
        match bytes.get(pos)? {
            b'>' => {
                return Some(StartTag {
                    end: pos + 1,
                    insert_at: trim_back(bytes, pos),
                    attributes,
                })
            }
            b'/' if bytes.get(pos + 1) == Some(&b'>') => {
                return Some(StartTag {
                    end: pos + 2,
                    insert_at: trim_back(bytes, pos),
                    attributes,
                })
            }
            b'/' => {
                pos += 1;
                continue;
            }
            _ => {}
        }

        let name_start = pos;
        while pos < len && !bytes[pos].is_ascii_whitespace() && !matches!(bytes[pos], b'=' | b'>' | b'/') {
            pos += 1;
        }
        let name = name_start..pos;

        let mut value = None;
        let after_name = skip_whitespace(bytes, pos);
        if bytes.get(after_name) == Some(&b'=') {
            let value_start = skip_whitespace(bytes, after_name + 1);
            match *bytes.get(value_start)? {
                quote @ (b'"' | b'\'') => {
                    let inner = value_start + 1;
                    let close = inner + bytes[inner..].iter().position(|&b| b == quote)?;
                    value = Some(inner..close);
                    pos = close + 1;
                }
                _ => {
                    let mut end = value_start;
                    while end < len && !bytes[end].is_ascii_whitespace() && bytes[end] != b'>' {
                        end += 1;
                    }
                    value = Some(value_start..end);
                    pos = end;
                }
            }
        }

        attributes.push(Attribute {
            span: name_start..pos,
            name,
            value,
        });
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn trim_back(bytes: &[u8], mut pos: usize) -> usize {
    while pos > 0 && bytes[pos - 1].is_ascii_whitespace() {
        pos -= 1;
    }
    pos
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
