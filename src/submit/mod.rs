//! Mapping from a completed answer set to the external property payload.
//!
//! Input is the flat JSON object the wizard posts: one entry per answered
//! question, keyed by external field name, values either strings or string
//! arrays. Keys with no matching question definition are dropped; there is
//! no best-effort renaming, a field either resolves through the schema or it
//! does not leave the process.

use std::fmt;

use log::debug;
use serde_json::{Map, Value};

use crate::api::PropertyValue;
use crate::forms::{FormSchema, Question, WrapperKind};

/// Client-visible failure produced before any outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Mandatory identity fields absent or empty
    MissingFields { details: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingFields { .. } => write!(f, "Faltan campos obligatorios"),
        }
    }
}

impl SubmitError {
    pub fn details(&self) -> &str {
        match self {
            SubmitError::MissingFields { details } => details,
        }
    }
}

/// Trimmed string content of an answer value, if any.
fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        _ => None,
    }
}

/// Answer value as a list of option names. Single strings are wrapped, so a
/// single-choice answer can feed a multi-select column.
fn list_of(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            }
        }
        Value::Array(items) => items
            .iter()
            .filter_map(|item| text_of(item).map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Wrap one answer according to the question's wrapper kind.
fn wrap(question: &Question, value: &Value) -> Option<PropertyValue> {
    let wrapped = match question.wrapper_kind() {
        WrapperKind::Title => PropertyValue::Title(text_of(value)?.to_string()),
        WrapperKind::Email => PropertyValue::Email(text_of(value)?.to_string()),
        WrapperKind::Phone => PropertyValue::PhoneNumber(Some(text_of(value)?.to_string())),
        WrapperKind::RichText => PropertyValue::RichText(text_of(value)?.to_string()),
        WrapperKind::Select => PropertyValue::Select {
            name: text_of(value)?.to_string(),
        },
        WrapperKind::MultiSelect => {
            let names = list_of(value);
            if names.is_empty() {
                return None;
            }
            PropertyValue::MultiSelect(names)
        }
    };
    Some(wrapped)
}

/// Empty-shape value written for an unanswered question of a fixed-shape
/// form. Title and email columns have no empty shape; they are covered by
/// the required-field check instead.
fn wrap_empty(question: &Question) -> Option<PropertyValue> {
    match question.wrapper_kind() {
        WrapperKind::RichText => Some(PropertyValue::RichText(String::new())),
        WrapperKind::Phone => Some(PropertyValue::PhoneNumber(None)),
        WrapperKind::Select => question.fallback.map(|name| PropertyValue::Select {
            name: name.to_string(),
        }),
        WrapperKind::MultiSelect => Some(PropertyValue::MultiSelect(Vec::new())),
        WrapperKind::Title | WrapperKind::Email => None,
    }
}

/// Check that the mandatory identity fields (name, email, and the branch
/// discriminator when the form has one) are present and non-empty.
pub fn check_required(schema: &FormSchema, input: &Map<String, Value>) -> Result<(), SubmitError> {
    let missing: Vec<&str> = schema
        .required_fields()
        .iter()
        .filter(|question| input.get(question.field).and_then(text_of).is_none())
        .map(|question| question.field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SubmitError::MissingFields {
            details: format!("Asegúrate de completar: {}.", missing.join(", ")),
        })
    }
}

/// Build the external property payload for one submission.
///
/// Plain forms emit one property per answered question. Branch-conditional
/// forms emit every schema field: the discriminator normalized to its
/// canonical value, the selected arm's fields with their content, the other
/// arm's fields as empty values. The external schema shape never varies
/// with the chosen branch.
pub fn build_properties(
    schema: &FormSchema,
    input: &Map<String, Value>,
) -> Result<Map<String, Value>, SubmitError> {
    check_required(schema, input)?;

    for key in input.keys() {
        if schema.question_by_field(key).is_none() {
            debug!("dropping unknown field '{}'", key);
        }
    }

    let mut properties = Map::new();

    match &schema.branches {
        None => {
            for question in schema.questions {
                let Some(value) = input.get(question.field) else {
                    continue;
                };
                if let Some(wrapped) = wrap(question, value) {
                    properties.insert(question.field.to_string(), wrapped.to_json());
                }
            }
        }
        Some(branches) => {
            // Required check guarantees the discriminator is present
            let raw = input
                .get(branches.discriminator)
                .and_then(text_of)
                .unwrap_or_default();
            let canonical = branches.canonical(raw).to_string();

            for question in schema.questions {
                let wrapped = if question.field == branches.discriminator {
                    Some(PropertyValue::Select {
                        name: canonical.clone(),
                    })
                } else if branches.is_branch_field(question.field) {
                    let selected = branches
                        .arm_for(&canonical)
                        .is_some_and(|arm| arm.fields.iter().any(|f| *f == question.field));
                    let content = if selected {
                        input
                            .get(question.field)
                            .and_then(text_of)
                            .unwrap_or_default()
                            .to_string()
                    } else {
                        String::new()
                    };
                    Some(PropertyValue::RichText(content))
                } else {
                    match input.get(question.field) {
                        Some(value) => wrap(question, value).or_else(|| wrap_empty(question)),
                        None => wrap_empty(question),
                    }
                };

                if let Some(wrapped) = wrapped {
                    properties.insert(question.field.to_string(), wrapped.to_json());
                }
            }
        }
    }

    Ok(properties)
}
