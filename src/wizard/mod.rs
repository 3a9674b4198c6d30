//! Sequential wizard controller: one question per step, linear navigation,
//! per-step validation and a single in-flight submission.
//!
//! The controller owns the answer set. Nothing leaves the process until the
//! final step is advanced past, and a failed submission keeps every answer so
//! the user can retry without re-typing anything.

use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde_json::{Map, Value};

use crate::forms::{FormSchema, InputKind, Question};

/// One collected answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Choice(String),
    Choices(Vec<String>),
}

impl Answer {
    /// Whether this answer carries any content.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Text(text) => text.trim().is_empty(),
            Answer::Choice(option) => option.is_empty(),
            Answer::Choices(options) => options.is_empty(),
        }
    }
}

/// Wizard lifecycle. `Completed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    Active(usize),
    Submitting,
    Failed,
    Completed,
}

/// Validation failure scoped to the current step. Blocks forward navigation
/// and is cleared by the next answer edit; it never mutates the answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// Free text empty after trimming
    Empty,
    /// Choice question without a selection
    NoSelection,
    /// Multi-choice selection above the configured cap
    TooMany(usize),
    /// Selected option is not in the question's option list
    UnknownOption(String),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Empty => write!(f, "Esta pregunta es obligatoria."),
            StepError::NoSelection => write!(f, "Selecciona al menos una opción."),
            StepError::TooMany(max) => write!(f, "Selecciona máximo {max} opciones."),
            StepError::UnknownOption(option) => write!(f, "Opción no válida: {option}."),
        }
    }
}

/// Outcome of a forward navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step
    Moved(usize),
    /// Validation failed; the wizard stayed on the current step
    Blocked,
    /// Last step validated; the wizard entered `Submitting`
    ReadyToSubmit,
}

/// The wizard controller for one form session.
pub struct Wizard {
    schema: &'static FormSchema,
    state: WizardState,
    answers: HashMap<&'static str, Answer>,
    step_error: Option<StepError>,
    failure: Option<String>,
}

impl Wizard {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            state: WizardState::Active(0),
            answers: HashMap::new(),
            step_error: None,
            failure: None,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Total number of steps (one per question).
    pub fn len(&self) -> usize {
        self.schema.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schema.questions.is_empty()
    }

    /// Current step index while answering.
    pub fn step(&self) -> Option<usize> {
        match self.state {
            WizardState::Active(step) => Some(step),
            _ => None,
        }
    }

    /// Completion percentage of the progress bar, 0.0 at the first question.
    pub fn progress(&self) -> f64 {
        match self.state {
            WizardState::Active(step) => step as f64 / self.len() as f64 * 100.0,
            _ => 100.0,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.step().and_then(|step| self.schema.questions.get(step))
    }

    /// Validation error for the current step, if forward navigation was blocked.
    pub fn current_error(&self) -> Option<&StepError> {
        self.step_error.as_ref()
    }

    /// Message from the last failed submission.
    pub fn failure_message(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn answer_for(&self, field: &str) -> Option<&Answer> {
        self.answers.get(field)
    }

    /// Record an answer for the current question, clearing any step error.
    /// Ignored outside `Active`.
    pub fn answer(&mut self, answer: Answer) {
        if let Some(question) = self.current_question() {
            self.answers.insert(question.field, answer);
            self.step_error = None;
        }
    }

    /// Toggle one option of the current multi-choice question. Selecting a
    /// new option while at the configured maximum is a no-op, matching the
    /// form's behavior of refusing further checks. Returns whether the
    /// selection changed.
    pub fn toggle_choice(&mut self, option: &str) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if question.kind != InputKind::MultiSelect {
            return false;
        }
        if !question.options.iter().any(|o| *o == option) {
            debug!("ignoring unknown option '{}' for {}", option, question.id);
            return false;
        }

        let mut selected = match self.answers.get(question.field) {
            Some(Answer::Choices(options)) => options.clone(),
            _ => Vec::new(),
        };

        if let Some(position) = selected.iter().position(|o| o == option) {
            selected.remove(position);
        } else {
            if let Some(max) = question.max_selections {
                if selected.len() >= max {
                    return false;
                }
            }
            selected.push(option.to_string());
        }

        self.answers.insert(question.field, Answer::Choices(selected));
        self.step_error = None;
        true
    }

    /// Validate the current step's answer against its question definition.
    pub fn validate_current(&self) -> Result<(), StepError> {
        let Some(question) = self.current_question() else {
            return Ok(());
        };
        let answer = self.answers.get(question.field);

        match question.kind {
            InputKind::Text => match answer {
                Some(Answer::Text(text)) if !text.trim().is_empty() => Ok(()),
                _ => Err(StepError::Empty),
            },
            InputKind::Select => match answer {
                Some(Answer::Choice(option)) if !option.is_empty() => {
                    if question.options.iter().any(|o| *o == option.as_str()) {
                        Ok(())
                    } else {
                        Err(StepError::UnknownOption(option.clone()))
                    }
                }
                _ => Err(StepError::NoSelection),
            },
            InputKind::MultiSelect => match answer {
                Some(Answer::Choices(options)) if !options.is_empty() => {
                    if let Some(unknown) = options
                        .iter()
                        .find(|o| !question.options.iter().any(|k| *k == o.as_str()))
                    {
                        return Err(StepError::UnknownOption(unknown.clone()));
                    }
                    match question.max_selections {
                        Some(max) if options.len() > max => Err(StepError::TooMany(max)),
                        _ => Ok(()),
                    }
                }
                _ => Err(StepError::NoSelection),
            },
        }
    }

    /// Forward navigation. Valid answers move to the next step; the last
    /// step moves the wizard into `Submitting`. Invalid answers set the
    /// step error and leave the position unchanged.
    pub fn advance(&mut self) -> Advance {
        let WizardState::Active(step) = self.state else {
            return Advance::Blocked;
        };

        if let Err(error) = self.validate_current() {
            debug!("step {} blocked: {}", step, error);
            self.step_error = Some(error);
            return Advance::Blocked;
        }

        self.step_error = None;
        if step + 1 < self.len() {
            self.state = WizardState::Active(step + 1);
            Advance::Moved(step + 1)
        } else {
            self.state = WizardState::Submitting;
            Advance::ReadyToSubmit
        }
    }

    /// Backward navigation; a no-op on the first step or outside `Active`.
    pub fn back(&mut self) {
        if let WizardState::Active(step) = self.state {
            if step > 0 {
                self.state = WizardState::Active(step - 1);
                self.step_error = None;
            }
        }
    }

    /// Submission succeeded. Terminal.
    pub fn complete(&mut self) {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Completed;
            self.failure = None;
        }
    }

    /// Submission failed; answers are preserved for retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Failed;
            self.failure = Some(message.into());
        }
    }

    /// Re-submit the unchanged answer set after a failure.
    pub fn retry(&mut self) {
        if self.state == WizardState::Failed {
            self.state = WizardState::Submitting;
        }
    }

    /// Return to the last step after a failure to edit answers.
    pub fn edit_answers(&mut self) {
        if self.state == WizardState::Failed {
            self.state = WizardState::Active(self.len() - 1);
        }
    }

    /// Serialize answered questions to the flat submission payload, one
    /// entry per answered question keyed by external field name. Empty
    /// answers are skipped.
    pub fn serialize_answers(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        for question in self.schema.questions {
            let Some(answer) = self.answers.get(question.field) else {
                continue;
            };
            if answer.is_empty() {
                continue;
            }
            let value = match answer {
                Answer::Text(text) => Value::String(text.trim().to_string()),
                Answer::Choice(option) => Value::String(option.clone()),
                Answer::Choices(options) => {
                    Value::Array(options.iter().map(|o| Value::String(o.clone())).collect())
                }
            };
            payload.insert(question.field.to_string(), value);
        }
        payload
    }
}
