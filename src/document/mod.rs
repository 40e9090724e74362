//! Document trees
//!
//! A [`Document`] is the in-memory tree form of a serialized `PetSystem`:
//! a `serde_json::Value` for JSON, an [`XmlElement`] tree for XML. Converting
//! between a tree and its text is kept apart from converting between a tree
//! and the entity model, so both halves can be exercised on their own.

pub mod xml;

pub use xml::XmlElement;

use crate::config::PersistConfig;
use crate::export::ExportError;
use crate::import::ImportError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// External format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Xml,
}

impl DocumentFormat {
    /// Pick the format from a file extension (`.json` / `.xml`, any case).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        extension.parse().ok()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "xml" => Ok(DocumentFormat::Xml),
            other => Err(format!("Unknown document format: {}", other)),
        }
    }
}

/// Serialized tree of a whole `PetSystem`
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(serde_json::Value),
    Xml(XmlElement),
}

impl Document {
    pub fn format(&self) -> DocumentFormat {
        match self {
            Document::Json(_) => DocumentFormat::Json,
            Document::Xml(_) => DocumentFormat::Xml,
        }
    }

    /// Parse document text. Syntax errors are reported as
    /// [`ImportError::MalformedDocument`].
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self, ImportError> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content)
                .map(Document::Json)
                .map_err(|e| ImportError::MalformedDocument(format!("JSON parse error: {}", e))),
            DocumentFormat::Xml => XmlElement::parse(content).map(Document::Xml),
        }
    }

    /// Render the tree to UTF-8 text.
    pub fn render(&self, config: &PersistConfig) -> Result<String, ExportError> {
        match self {
            Document::Json(value) => render_json(value, config),
            Document::Xml(root) => root.render(config),
        }
    }
}

fn render_json(value: &serde_json::Value, config: &PersistConfig) -> Result<String, ExportError> {
    if !config.pretty {
        return serde_json::to_string(value)
            .map_err(|e| ExportError::Serialization(format!("Failed to write JSON: {}", e)));
    }

    let indent = vec![b' '; config.indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ExportError::Serialization(format!("Failed to write JSON: {}", e)))?;

    String::from_utf8(buffer)
        .map_err(|e| ExportError::Serialization(format!("Invalid UTF-8 in JSON output: {}", e)))
}

/// ISO-8601 text for a timestamp; the fraction is omitted when zero.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse an ISO-8601 timestamp. Offsets are accepted and dropped, keeping
/// the local wall-clock time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    value.parse::<NaiveDateTime>().ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.naive_local())
    })
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    value.parse::<NaiveDate>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path("pets.json"), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path("dir/pets.XML"), Some(DocumentFormat::Xml));
        assert_eq!(DocumentFormat::from_path("pets.yaml"), None);
        assert_eq!(DocumentFormat::from_path("pets"), None);
    }

    #[test]
    fn test_timestamp_fraction() {
        let whole = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(format_timestamp(&whole), "2024-01-10T12:30:00");

        let fractional = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_micro_opt(12, 30, 0, 123456)
            .unwrap();
        assert_eq!(format_timestamp(&fractional), "2024-01-10T12:30:00.123456");
        assert_eq!(parse_timestamp("2024-01-10T12:30:00.123456"), Some(fractional));
        assert_eq!(parse_timestamp("2024-01-10T12:30:00"), Some(whole));
    }

    #[test]
    fn test_timestamp_with_offset() {
        let parsed = parse_timestamp("2024-01-10T12:30:00+03:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-01-10T12:30:00");
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_date_codec() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_date(&date), "2025-01-15");
        assert_eq!(parse_date("2025-01-15"), Some(date));
        assert_eq!(parse_date("15.01.2025"), None);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = Document::parse("{\"owners\": [", DocumentFormat::Json);
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
    }

    #[test]
    fn test_render_json_keeps_key_order_and_unicode() {
        let doc = Document::Json(json!({ "owners": [], "vets": [], "name": "Барсик" }));
        let compact = PersistConfig::builder().pretty(false).build();
        assert_eq!(
            doc.render(&compact).unwrap(),
            r#"{"owners":[],"vets":[],"name":"Барсик"}"#
        );

        let pretty = doc.render(&PersistConfig::builder().indent(4).build()).unwrap();
        assert!(pretty.contains("\n    \"owners\": []"));
    }
}
