//! XML element tree
//!
//! Minimal owned element tree used as the XML form of a [`super::Document`].
//! Attributes keep their insertion order. Reading and writing go through
//! quick-xml.

use crate::config::PersistConfig;
use crate::export::ExportError;
use crate::import::ImportError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fmt::Display;

/// Textual booleans used in attributes. Readers treat anything other than
/// `TRUE_TEXT` as false.
pub const TRUE_TEXT: &str = "True";
pub const FALSE_TEXT: &str = "False";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Set an attribute, replacing an existing one with the same key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Parse XML text into a tree. Whitespace around text nodes is trimmed.
    pub fn parse(content: &str) -> Result<Self, ImportError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| malformed("unexpected closing tag"))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| malformed(format!("XML text error: {}", e)))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    if let Some(current) = stack.last_mut() {
                        current.text.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(malformed(format!(
                        "XML parsing error at position {}: {}",
                        reader.error_position(),
                        e
                    )));
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(malformed(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| malformed("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, ImportError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let mut element = XmlElement::new(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| malformed(format!("XML attribute error: {}", e)))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| malformed(format!("XML attribute error: {}", e)))?;
            element.attributes.push((key, value.to_string()));
        }

        Ok(element)
    }

    /// Render the tree as UTF-8 XML text.
    pub fn render(&self, config: &PersistConfig) -> Result<String, ExportError> {
        let mut writer = if config.pretty {
            Writer::new_with_indent(Vec::new(), b' ', config.indent)
        } else {
            Writer::new(Vec::new())
        };

        if config.xml_declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
                .map_err(write_failed)?;
        }
        self.write_to(&mut writer)?;

        String::from_utf8(writer.into_inner())
            .map_err(|e| ExportError::Serialization(format!("Invalid UTF-8 in XML output: {}", e)))
    }

    fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), ExportError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            return writer.write_event(Event::Empty(start)).map_err(write_failed);
        }

        writer.write_event(Event::Start(start)).map_err(write_failed)?;
        if let Some(text) = &self.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_failed)?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(write_failed)
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), ImportError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(malformed("multiple root elements")),
    }
    Ok(())
}

fn malformed(message: impl Into<String>) -> ImportError {
    ImportError::MalformedDocument(message.into())
}

fn write_failed(e: impl Display) -> ExportError {
    ExportError::Serialization(format!("Failed to write XML: {}", e))
}
