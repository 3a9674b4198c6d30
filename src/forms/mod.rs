//! Form schemas: question definitions, branch configuration and startup validation.
//!
//! A form is an ordered list of questions. The order is significant: it defines
//! the wizard steps and the column order of the external payload. Schemas are
//! defined once in [`catalog`] and validated before first use, so a mis-mapped
//! field is a startup failure rather than a silently dropped answer.

mod catalog;

pub use catalog::{catalog, find_form};

use anyhow::{Result, bail};

/// Input kind a question presents in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text, non-empty after trimming
    Text,
    /// Exactly one option
    Select,
    /// One or more options, optionally capped
    MultiSelect,
}

/// Value wrapper the answer maps to on the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Title,
    Email,
    Phone,
    Select,
    MultiSelect,
    RichText,
}

/// A single question definition. Immutable, defined at startup.
#[derive(Debug, Clone)]
pub struct Question {
    /// Unique key within the form (e.g. "b1-q1")
    pub id: &'static str,
    /// Prompt shown to the user
    pub prompt: &'static str,
    /// Optional hint shown under the prompt
    pub description: Option<&'static str>,
    pub kind: InputKind,
    /// Options for choice kinds; empty for free text
    pub options: &'static [&'static str],
    /// Selection cap for multi-choice questions
    pub max_selections: Option<usize>,
    /// Column name on the external store
    pub field: &'static str,
    /// Identity fields override the kind-directed wrapper
    pub wrapper: Option<WrapperKind>,
    /// Value written when a fixed-shape form has no answer for this question
    pub fallback: Option<&'static str>,
}

impl Question {
    /// The wrapper this question's answer is written with. Identity fields
    /// carry an explicit override; everything else follows the input kind.
    pub fn wrapper_kind(&self) -> WrapperKind {
        self.wrapper.unwrap_or(match self.kind {
            InputKind::Text => WrapperKind::RichText,
            InputKind::Select => WrapperKind::Select,
            InputKind::MultiSelect => WrapperKind::MultiSelect,
        })
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, InputKind::Select | InputKind::MultiSelect)
    }
}

/// One mutually exclusive category of a branch-conditional form.
#[derive(Debug, Clone)]
pub struct BranchArm {
    /// Canonical discriminator value selecting this arm
    pub value: &'static str,
    /// Fields populated only when this arm is selected
    pub fields: &'static [&'static str],
}

/// Branch configuration: one discriminator question selects which arm's
/// fields receive content. Fields of unselected arms are still written,
/// as empty values, so the external schema shape stays fixed.
#[derive(Debug, Clone)]
pub struct BranchConfig {
    /// Field name of the single-choice discriminator question
    pub discriminator: &'static str,
    /// Raw answer -> canonical discriminator value
    pub normalize: &'static [(&'static str, &'static str)],
    pub arms: &'static [BranchArm],
}

impl BranchConfig {
    /// Canonical form of a raw discriminator answer.
    pub fn canonical<'a>(&'a self, raw: &'a str) -> &'a str {
        self.normalize
            .iter()
            .find(|(from, _)| *from == raw)
            .map(|(_, to)| *to)
            .unwrap_or(raw)
    }

    /// The arm a canonical discriminator value selects, if any.
    pub fn arm_for(&self, canonical: &str) -> Option<&BranchArm> {
        self.arms.iter().find(|arm| arm.value == canonical)
    }

    /// Whether `field` belongs to any arm.
    pub fn is_branch_field(&self, field: &str) -> bool {
        self.arms.iter().any(|arm| arm.fields.iter().any(|f| *f == field))
    }
}

/// An ordered form definition targeting one external collection.
#[derive(Debug, Clone)]
pub struct FormSchema {
    /// Stable slug used in routes and configuration (e.g. "onboarding")
    pub slug: &'static str,
    /// Human-readable form title
    pub title: &'static str,
    pub questions: &'static [Question],
    pub branches: Option<BranchConfig>,
}

impl FormSchema {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_by_field(&self, field: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.field == field)
    }

    /// Branch-conditional forms emit every schema field on submission,
    /// empty when unanswered, so the external shape never varies.
    pub fn is_fixed_shape(&self) -> bool {
        self.branches.is_some()
    }

    /// Identity fields that must be present and non-empty at submission:
    /// the title-wrapped question (name), the email-wrapped question, and
    /// the branch discriminator when the form has one.
    pub fn required_fields(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| {
                matches!(q.wrapper, Some(WrapperKind::Title) | Some(WrapperKind::Email))
                    || self
                        .branches
                        .as_ref()
                        .is_some_and(|b| b.discriminator == q.field)
            })
            .collect()
    }

    /// Structural validation, run once at startup before the schema is used.
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            bail!("form '{}' has no questions", self.slug);
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.id.is_empty() || question.field.is_empty() {
                bail!("form '{}': question {} has an empty id or field", self.slug, i);
            }
            if self.questions[..i].iter().any(|q| q.id == question.id) {
                bail!("form '{}': duplicate question id '{}'", self.slug, question.id);
            }
            if self.questions[..i].iter().any(|q| q.field == question.field) {
                bail!("form '{}': duplicate field '{}'", self.slug, question.field);
            }

            if question.is_choice() {
                if question.options.is_empty() {
                    bail!(
                        "form '{}': choice question '{}' has no options",
                        self.slug,
                        question.id
                    );
                }
                for (j, option) in question.options.iter().enumerate() {
                    if question.options[..j].contains(option) {
                        bail!(
                            "form '{}': question '{}' repeats option '{}'",
                            self.slug,
                            question.id,
                            option
                        );
                    }
                }
            }

            match (question.kind, question.max_selections) {
                (InputKind::MultiSelect, Some(max)) => {
                    if max == 0 || max > question.options.len() {
                        bail!(
                            "form '{}': question '{}' has max_selections {} outside 1..={}",
                            self.slug,
                            question.id,
                            max,
                            question.options.len()
                        );
                    }
                }
                (_, Some(_)) => {
                    bail!(
                        "form '{}': question '{}' caps selections but is not multi-choice",
                        self.slug,
                        question.id
                    );
                }
                _ => {}
            }
        }

        if let Some(branches) = &self.branches {
            let discriminator = self
                .question_by_field(branches.discriminator)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "form '{}': discriminator '{}' is not a schema field",
                        self.slug,
                        branches.discriminator
                    )
                })?;
            if discriminator.kind != InputKind::Select {
                bail!(
                    "form '{}': discriminator '{}' must be single-choice",
                    self.slug,
                    branches.discriminator
                );
            }
            for arm in branches.arms {
                for field in arm.fields {
                    if self.question_by_field(field).is_none() {
                        bail!(
                            "form '{}': branch '{}' references unknown field '{}'",
                            self.slug,
                            arm.value,
                            field
                        );
                    }
                    if *field == branches.discriminator {
                        bail!(
                            "form '{}': branch '{}' must not contain the discriminator",
                            self.slug,
                            arm.value
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAD_MAX: FormSchema = FormSchema {
        slug: "bad-max",
        title: "Bad",
        questions: &[Question {
            id: "q1",
            prompt: "Pick",
            description: None,
            kind: InputKind::MultiSelect,
            options: &["a", "b"],
            max_selections: Some(3),
            field: "Pick",
            wrapper: None,
            fallback: None,
        }],
        branches: None,
    };

    #[test]
    fn catalog_forms_validate() {
        for schema in catalog() {
            schema.validate().unwrap();
        }
    }

    #[test]
    fn max_selections_beyond_options_is_rejected() {
        assert!(BAD_MAX.validate().is_err());
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        const DUPED: FormSchema = FormSchema {
            slug: "duped",
            title: "Duped",
            questions: &[
                Question {
                    id: "q1",
                    prompt: "Nombre",
                    description: None,
                    kind: InputKind::Text,
                    options: &[],
                    max_selections: None,
                    field: "Nombre",
                    wrapper: None,
                    fallback: None,
                },
                Question {
                    id: "q2",
                    prompt: "Nombre otra vez",
                    description: None,
                    kind: InputKind::Text,
                    options: &[],
                    max_selections: None,
                    field: "Nombre",
                    wrapper: None,
                    fallback: None,
                },
            ],
            branches: None,
        };
        assert!(DUPED.validate().is_err());
    }

    #[test]
    fn wrapper_override_takes_precedence() {
        let question = Question {
            id: "q1",
            prompt: "¿A qué te dedicas hoy principalmente?",
            description: None,
            kind: InputKind::Select,
            options: &["Empleado/a", "Otro"],
            max_selections: None,
            field: "¿A qué te dedicas hoy principalmente?",
            wrapper: Some(WrapperKind::MultiSelect),
            fallback: None,
        };
        assert_eq!(question.wrapper_kind(), WrapperKind::MultiSelect);
    }
}
