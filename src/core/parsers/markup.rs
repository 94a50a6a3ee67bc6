//! Structural parser for Vue single-file components.
//!
//! Produces a small element tree that is faithful enough to tell which tags
//! and attributes a template uses. Text, comments and interpolations are kept
//! as opaque nodes; nothing is decoded or evaluated.
//!
//! Parsing is strict: an unterminated construct or an end tag that does not
//! close the innermost open element fails the whole file.

use anyhow::{Result, bail};
use memchr::{memchr, memchr2};

use crate::core::html_tags::is_void_tag;

/// Root-level block holding the template.
pub const TEMPLATE_TAG: &str = "template";

/// Elements whose content is raw text inside a template.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "textarea", "title"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    /// Byte offset of the opening `<`.
    pub offset: usize,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    Interpolation(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// A parsed markup file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    /// The root-level `<template>` block, if the file has one.
    pub fn template(&self) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.tag == TEMPLATE_TAG)
    }
}

/// Parse a single-file component.
pub fn parse_markup(source: &str) -> Result<Document> {
    let mut parser = MarkupParser::new(source);
    let children = parser.parse_children(None)?;
    Ok(Document { children })
}

struct OpenElement<'t> {
    tag: &'t str,
    offset: usize,
    /// Inside a `v-pre` subtree, where `{{` is plain text.
    pre: bool,
}

struct MarkupParser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> MarkupParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn parse_children(&mut self, parent: Option<OpenElement<'_>>) -> Result<Vec<Node>> {
        let mut children = Vec::new();
        let interpolate = parent.as_ref().is_some_and(|open| !open.pre);

        loop {
            if self.at_end() {
                if let Some(parent) = &parent {
                    return self.fail(
                        parent.offset,
                        format!("Element <{}> is missing end tag", parent.tag),
                    );
                }
                return Ok(children);
            }

            if self.starts_with("<!--") {
                children.push(self.parse_comment()?);
            } else if self.starts_with("</") {
                let offset = self.pos;
                let name = self.parse_end_tag()?;
                match &parent {
                    Some(open) if open.tag.eq_ignore_ascii_case(&name) => return Ok(children),
                    Some(open) => {
                        return self.fail(
                            offset,
                            format!("Unexpected end tag </{}>, expected </{}>", name, open.tag),
                        );
                    }
                    None => return self.fail(offset, format!("Unexpected end tag </{}>", name)),
                }
            } else if self.starts_with("<!") || self.starts_with("<?") {
                self.skip_declaration()?;
            } else if self.starts_with("<") && self.peek(1).is_some_and(|b| b.is_ascii_alphabetic())
            {
                let root = parent.is_none();
                let pre = parent.as_ref().is_some_and(|open| open.pre);
                children.push(Node::Element(self.parse_element(root, pre)?));
            } else if self.starts_with("{{") && interpolate {
                children.push(self.parse_interpolation()?);
            } else {
                children.push(Node::Text(self.parse_text(interpolate)));
            }
        }
    }

    fn parse_element(&mut self, root: bool, pre: bool) -> Result<Element> {
        let offset = self.pos;
        self.pos += 1;

        let tag = self.take_while(|b| !is_whitespace(b) && b != b'/' && b != b'>');
        let (attributes, self_closing) = self.parse_attributes(offset, &tag)?;

        let mut element = Element {
            tag,
            attributes,
            children: Vec::new(),
            offset,
        };

        if self_closing || is_void_tag(&element.tag) {
            return Ok(element);
        }

        let raw_text = if root {
            element.tag != TEMPLATE_TAG
        } else {
            RAW_TEXT_TAGS.contains(&element.tag.to_ascii_lowercase().as_str())
        };

        if raw_text {
            let text = self.parse_raw_text(&element.tag, offset)?;
            if !text.is_empty() {
                element.children.push(Node::Text(text));
            }
        } else {
            let open = OpenElement {
                tag: &element.tag,
                offset,
                pre: pre || element.has_attribute("v-pre"),
            };
            element.children = self.parse_children(Some(open))?;
        }

        Ok(element)
    }

    /// Parse attributes up to the end of the start tag.
    /// Returns the attributes and whether the tag was self-closing.
    fn parse_attributes(&mut self, offset: usize, tag: &str) -> Result<(Vec<Attribute>, bool)> {
        let mut attributes = Vec::new();

        loop {
            self.skip_whitespace();

            if self.at_end() {
                return self.fail(offset, format!("Start tag <{}> is not closed", tag));
            }
            if self.starts_with(">") {
                self.pos += 1;
                return Ok((attributes, false));
            }
            if self.starts_with("/>") {
                self.pos += 2;
                return Ok((attributes, true));
            }
            if self.starts_with("/") {
                self.pos += 1;
                continue;
            }

            let name = self.take_while(|b| !is_whitespace(b) && !matches!(b, b'=' | b'>' | b'/'));
            if name.is_empty() {
                // stray `=`
                self.pos += 1;
                continue;
            }

            self.skip_whitespace();
            let value = if self.starts_with("=") {
                self.pos += 1;
                self.skip_whitespace();
                Some(self.parse_attribute_value(offset, tag)?)
            } else {
                None
            };

            attributes.push(Attribute { name, value });
        }
    }

    fn parse_attribute_value(&mut self, offset: usize, tag: &str) -> Result<String> {
        match self.peek(0) {
            Some(quote @ (b'"' | b'\'')) => {
                let start = self.pos + 1;
                let Some(len) = memchr(quote, &self.bytes[start..]) else {
                    return self.fail(
                        offset,
                        format!("Unterminated attribute value in <{}>", tag),
                    );
                };
                self.pos = start + len + 1;
                Ok(self.source[start..start + len].to_string())
            }
            _ => Ok(self.take_while(|b| !is_whitespace(b) && b != b'>')),
        }
    }

    fn parse_end_tag(&mut self) -> Result<String> {
        let offset = self.pos;
        self.pos += 2;
        let name = self.take_while(|b| !is_whitespace(b) && b != b'>');
        if name.is_empty() {
            return self.fail(offset, "Missing end tag name".to_string());
        }
        match memchr(b'>', &self.bytes[self.pos..]) {
            Some(len) => {
                self.pos += len + 1;
                Ok(name)
            }
            None => self.fail(offset, format!("End tag </{}> is not closed", name)),
        }
    }

    fn parse_comment(&mut self) -> Result<Node> {
        let offset = self.pos;
        let start = self.pos + 4;
        match self.source[start..].find("-->") {
            Some(len) => {
                self.pos = start + len + 3;
                Ok(Node::Comment(self.source[start..start + len].to_string()))
            }
            None => self.fail(offset, "Unterminated comment".to_string()),
        }
    }

    fn parse_interpolation(&mut self) -> Result<Node> {
        let offset = self.pos;
        let start = self.pos + 2;
        match self.source[start..].find("}}") {
            Some(len) => {
                self.pos = start + len + 2;
                Ok(Node::Interpolation(
                    self.source[start..start + len].trim().to_string(),
                ))
            }
            None => self.fail(offset, "Interpolation is missing closing \"}}\"".to_string()),
        }
    }

    fn skip_declaration(&mut self) -> Result<()> {
        let offset = self.pos;
        match memchr(b'>', &self.bytes[self.pos..]) {
            Some(len) => {
                self.pos += len + 1;
                Ok(())
            }
            None => self.fail(offset, "Unterminated declaration".to_string()),
        }
    }

    /// Consume everything up to the matching end tag of a raw-text element.
    fn parse_raw_text(&mut self, tag: &str, offset: usize) -> Result<String> {
        let start = self.pos;
        let mut cursor = start;

        while let Some(len) = memchr(b'<', &self.bytes[cursor..]) {
            let lt = cursor + len;
            if self.is_end_tag_of(lt, tag) {
                let text = self.source[start..lt].to_string();
                self.pos = lt;
                self.parse_end_tag()?;
                return Ok(text);
            }
            cursor = lt + 1;
        }

        self.fail(offset, format!("Element <{}> is missing end tag", tag))
    }

    fn is_end_tag_of(&self, at: usize, tag: &str) -> bool {
        let name_start = at + 2;
        let name_end = name_start + tag.len();
        self.bytes.get(at + 1) == Some(&b'/')
            && self
                .bytes
                .get(name_start..name_end)
                .is_some_and(|name| name.eq_ignore_ascii_case(tag.as_bytes()))
            && self
                .bytes
                .get(name_end)
                .is_none_or(|&b| is_whitespace(b) || b == b'>' || b == b'/')
    }

    /// Text runs until the next tag-like `<` (or `{{` inside elements).
    fn parse_text(&mut self, interpolate: bool) -> String {
        let start = self.pos;
        // The current byte is text even if it looks like a delimiter.
        let mut cursor = start + 1;

        while cursor < self.bytes.len() {
            let Some(len) = memchr2(b'<', b'{', &self.bytes[cursor..]) else {
                cursor = self.bytes.len();
                break;
            };
            cursor += len;
            if self.bytes[cursor] == b'<' && self.starts_tag_like(cursor) {
                break;
            }
            if interpolate && self.bytes[cursor..].starts_with(b"{{") {
                break;
            }
            cursor += 1;
        }

        self.pos = cursor;
        self.source[start..cursor].to_string()
    }

    fn starts_tag_like(&self, at: usize) -> bool {
        self.bytes
            .get(at + 1)
            .is_some_and(|&b| b.is_ascii_alphabetic() || b == b'/' || b == b'!' || b == b'?')
    }

    fn take_while(&mut self, keep: impl Fn(u8) -> bool) -> String {
        let start = self.pos;
        while self.peek(0).is_some_and(&keep) {
            self.pos += 1;
        }
        self.source[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while self.peek(0).is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn starts_with(&self, pattern: &str) -> bool {
        self.bytes[self.pos..].starts_with(pattern.as_bytes())
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn fail<T>(&self, offset: usize, message: String) -> Result<T> {
        let (line, column) = line_column(self.source, offset);
        bail!("{} at {}:{}", message, line, column)
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// 1-based line and column of a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, column)
}
