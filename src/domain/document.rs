//! Minimal XML element tree built on top of `quick-xml`.
//!
//! Definition files are small, so the whole document is materialized once
//! and then walked by the decoders in [`crate::domain::definition`] and
//! [`crate::domain::codes`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::error::DomainError;

/// Attribute with its namespace prefix stripped and value unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}

/// Element node: local name, attributes and child elements in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<XmlAttribute>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, DomainError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|e| DomainError::malformed(e.to_string()))?;
            let key = attr.key.as_ref();
            // namespace declarations are not data
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            let value = attr
                .unescape_value()
                .map_err(|e| DomainError::malformed(e.to_string()))?;
            attributes.push(XmlAttribute {
                name: String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
                value: value.into_owned(),
            });
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Local tag name (prefix stripped).
    pub fn local_name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    pub fn first_attribute(&self) -> Option<&XmlAttribute> {
        self.attributes.first()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&XmlElement> {
        self.children.first()
    }

    /// First child element with the given local name (case-sensitive).
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A parsed document with exactly one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Parse a complete document.
    ///
    /// Fails with [`DomainError::MissingRoot`] for documents without any
    /// element and [`DomainError::MalformedDocument`] for anything that is
    /// not well-formed.
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        let mut reader = Reader::from_str(content);
        let mut open: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                DomainError::malformed(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            })?;

            match event {
                Event::Start(start) => open.push(XmlElement::from_start(&start)?),
                Event::Empty(start) => {
                    let element = XmlElement::from_start(&start)?;
                    close_element(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| DomainError::malformed("unbalanced end tag"))?;
                    close_element(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(current) = open.last_mut() {
                        let text = text
                            .unescape()
                            .map_err(|e| DomainError::malformed(e.to_string()))?;
                        current.text.push_str(&text);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = open.last_mut() {
                        current
                            .text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(DomainError::malformed(format!(
                "element <{}> is never closed",
                unclosed.name
            )));
        }

        root.map(|root| Self { root })
            .ok_or(DomainError::MissingRoot)
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

/// Attach a finished element to its parent, or make it the document root.
fn close_element(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), DomainError> {
    match open.last_mut() {
        Some(parent) => {
            parent.text.push_str(&element.text);
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(DomainError::malformed(format!(
            "second root element <{}>",
            element.name
        ))),
    }
}
