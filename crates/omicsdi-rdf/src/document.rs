//! OmicsDI XML export model
//!
//! Exports follow the EB-eye search dump layout:
//!
//! ```text
//! database
//!  ├─ name, description?, release?, release_date
//!  └─ entries/entry[@id]
//!      ├─ name, description?, authors?, keywords?
//!      ├─ dates/date[@type,@value]
//!      ├─ cross_references/ref[@dbkey,@dbname]
//!      └─ additional_fields/field[@name]
//! ```
//!
//! Every node is deserialized permissively (`Option` everywhere, unknown
//! elements ignored); required-ness is enforced by the transformer so that a
//! missing element is reported by name instead of as a serde error.

use flate2::read::GzDecoder;
use omicsdi_common::{OmicsError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Root `<database>` element
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DatabaseDocument {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub entries: Entries,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Entries {
    #[serde(rename = "entry", default)]
    pub entries: Vec<Entry>,
}

/// One dataset record
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Entry {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub authors: Option<String>,
    pub keywords: Option<String>,
    #[serde(default)]
    pub dates: Dates,
    #[serde(default)]
    pub cross_references: CrossReferences,
    #[serde(default)]
    pub additional_fields: AdditionalFields,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Dates {
    #[serde(rename = "date", default)]
    pub dates: Vec<DateEvent>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DateEvent {
    #[serde(rename = "@type")]
    pub date_type: Option<String>,
    #[serde(rename = "@value")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CrossReferences {
    #[serde(rename = "ref", default)]
    pub refs: Vec<CrossReference>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CrossReference {
    #[serde(rename = "@dbkey")]
    pub dbkey: Option<String>,
    #[serde(rename = "@dbname")]
    pub dbname: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AdditionalFields {
    #[serde(rename = "field", default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Field {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

/// `Some` only for text that is present and not blank.
///
/// Surrounding whitespace is stripped, so pretty-printed exports yield the
/// same literals and IRIs as compact ones.
pub(crate) fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

impl DatabaseDocument {
    /// Parse an export from XML text
    pub fn parse(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|e| OmicsError::Xml(e.to_string()))
    }

    /// Read and parse an export, gunzipping `.gz` files
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| OmicsError::io(path, e))?;

        let mut xml = String::new();
        if path.extension().and_then(|s| s.to_str()) == Some("gz") {
            GzDecoder::new(file).read_to_string(&mut xml)
        } else {
            std::io::BufReader::new(file).read_to_string(&mut xml)
        }
        .map_err(|e| OmicsError::io(path, e))?;

        Self::parse(&xml)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries.entries
    }
}
