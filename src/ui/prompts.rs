//! Interactive terminal front end for the wizard.
//!
//! Renders one question per step with dialoguer prompts, drives the wizard
//! controller, and posts the serialized answers to the submission endpoint
//! when the last step is passed.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, MultiSelect, Select};
use is_terminal::IsTerminal;
use log::{info, warn};
use serde_json::Value;

use crate::forms::{FormSchema, InputKind, Question};
use crate::ui::theme::{Palette, PaletteState};
use crate::wizard::{Answer, StepError, Wizard, WizardState};

const BACK_MARKER: &str = "<";

enum PromptOutcome {
    Answered(Answer),
    Back,
}

/// Drive the wizard loop in the terminal and submit to `submit_url`.
pub async fn run_wizard(schema: &'static FormSchema, submit_url: &str) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("El asistente requiere una terminal interactiva");
    }

    let http_client = reqwest::Client::new();
    let mut wizard = Wizard::new(schema);
    let mut palettes = PaletteState::new();
    let mut palette = palettes.current();
    let mut last_block: Option<&str> = None;

    println!("\n{}\n", schema.title.bold());

    loop {
        match wizard.state().clone() {
            WizardState::Active(step) => {
                let Some(question) = wizard.current_question() else {
                    break;
                };

                // Each question block gets the next accent palette
                let block = block_of(question.id);
                if last_block.is_some_and(|previous| previous != block) {
                    palette = palettes.advance();
                }
                last_block = Some(block);

                render_question(step, wizard.len(), question, wizard.current_error(), palette);
                match prompt_answer(question, wizard.answer_for(question.field), step > 0)? {
                    PromptOutcome::Answered(answer) => {
                        wizard.answer(answer);
                        wizard.advance();
                    }
                    PromptOutcome::Back => wizard.back(),
                }
            }
            WizardState::Submitting => {
                println!("\n{}", "Enviando respuestas...".color(palette.accent));
                submit_answers(&http_client, &mut wizard, submit_url).await;
            }
            WizardState::Failed => {
                if let Some(message) = wizard.failure_message() {
                    println!("\n{}", message.red());
                }
                let choice = Select::new()
                    .with_prompt("¿Qué quieres hacer?")
                    .items(&["Reintentar", "Revisar respuestas", "Salir"])
                    .default(0)
                    .interact()?;
                match choice {
                    0 => wizard.retry(),
                    1 => wizard.edit_answers(),
                    _ => return Ok(()),
                }
            }
            WizardState::Completed => {
                println!(
                    "\n{}",
                    "¡Gracias por tomarte el tiempo!".color(palette.accent).bold()
                );
                println!(
                    "Ya tenemos lo que necesitamos para conocerte mejor. En los próximos días \
                     te buscaremos para platicar los pasos a seguir. ¡Esto apenas comienza!"
                );
                break;
            }
        }
    }

    Ok(())
}

fn block_of(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

fn render_question(
    step: usize,
    total: usize,
    question: &Question,
    error: Option<&StepError>,
    palette: Palette,
) {
    let percent = (step as f64 / total as f64 * 100.0).round() as usize;
    let filled = percent * 20 / 100;
    let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(20 - filled));

    println!();
    println!(
        "{} {}",
        format!("Pregunta {} de {}", step + 1, total)
            .color(palette.accent)
            .bold(),
        format!("{} {}%", bar, percent).dimmed()
    );
    println!("{}", question.prompt.bold());
    if let Some(description) = question.description {
        println!("{}", description.dimmed());
    }
    if let Some(error) = error {
        println!("{}", error.to_string().red());
    }
}

fn prompt_answer(
    question: &Question,
    current: Option<&Answer>,
    can_go_back: bool,
) -> Result<PromptOutcome> {
    match question.kind {
        InputKind::Text => {
            let prompt = if can_go_back {
                format!("Escribe tu respuesta («{BACK_MARKER}» para volver)")
            } else {
                "Escribe tu respuesta".to_string()
            };
            let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
            if let Some(Answer::Text(text)) = current {
                if !text.is_empty() {
                    input = input.with_initial_text(text.clone());
                }
            }
            let text = input.interact_text()?;
            if can_go_back && text.trim() == BACK_MARKER {
                return Ok(PromptOutcome::Back);
            }
            Ok(PromptOutcome::Answered(Answer::Text(text)))
        }
        InputKind::Select => {
            let mut items: Vec<&str> = question.options.to_vec();
            if can_go_back {
                items.push("← Anterior");
            }
            let default = match current {
                Some(Answer::Choice(option)) => question
                    .options
                    .iter()
                    .position(|o| *o == option.as_str())
                    .unwrap_or(0),
                _ => 0,
            };
            let selection = Select::new().items(&items).default(default).interact()?;
            if can_go_back && selection == question.options.len() {
                return Ok(PromptOutcome::Back);
            }
            Ok(PromptOutcome::Answered(Answer::Choice(
                question.options[selection].to_string(),
            )))
        }
        InputKind::MultiSelect => {
            let defaults: Vec<bool> = question
                .options
                .iter()
                .map(|option| {
                    matches!(current, Some(Answer::Choices(selected))
                        if selected.iter().any(|s| s.as_str() == *option))
                })
                .collect();
            let picked = MultiSelect::new()
                .items(question.options)
                .defaults(&defaults)
                .interact()?;
            let options = picked
                .into_iter()
                .map(|index| question.options[index].to_string())
                .collect();
            Ok(PromptOutcome::Answered(Answer::Choices(options)))
        }
    }
}

async fn submit_answers(http_client: &reqwest::Client, wizard: &mut Wizard, submit_url: &str) {
    let payload = Value::Object(wizard.serialize_answers());
    info!("Submitting answers to {}", submit_url);

    match http_client.post(submit_url).json(&payload).send().await {
        Ok(response) if response.status().is_success() => wizard.complete(),
        Ok(response) => {
            let status = response.status();
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("error {status}"));
            warn!("Submission rejected ({}): {}", status, message);
            wizard.fail(format!(
                "Hubo un error al enviar tus respuestas: {message}. Por favor intenta de nuevo."
            ));
        }
        Err(err) => {
            warn!("Submission failed: {:#}", err);
            wizard.fail("Hubo un error al enviar tus respuestas. Por favor intenta de nuevo.");
        }
    }
}
