//! Typed value wrappers for the external store's column schema.
//!
//! Each variant serializes to the exact JSON shape the pages API expects for
//! that column type. The payload is write-only; nothing is ever parsed back.

use serde_json::{Value, json};

/// A value wrapper matching one external column type.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Primary title column
    Title(String),
    /// Plain rich-text column
    RichText(String),
    /// Email column
    Email(String),
    /// Phone column; `None` is written as an explicit null
    PhoneNumber(Option<String>),
    /// Single-select column
    Select { name: String },
    /// Multi-select column
    MultiSelect(Vec<String>),
}

impl PropertyValue {
    /// Serialize to the JSON shape the API expects for this column type.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Title(text) => json!({
                "title": [{ "text": { "content": text } }]
            }),
            Self::RichText(text) => json!({
                "rich_text": [{ "text": { "content": text } }]
            }),
            Self::Email(address) => json!({ "email": address }),
            Self::PhoneNumber(number) => json!({ "phone_number": number }),
            Self::Select { name } => json!({ "select": { "name": name } }),
            Self::MultiSelect(names) => json!({
                "multi_select": names.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>()
            }),
        }
    }
}
