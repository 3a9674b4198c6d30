use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "intake-cli")]
#[command(about = "Lead-intake questionnaire with submission to a hosted database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive questionnaire in the terminal
    Wizard(WizardArgs),
    /// Run the HTTP submission service
    Serve(ServeArgs),
    /// List the forms available in the catalog
    Forms,
}

#[derive(Args)]
pub struct WizardArgs {
    /// Form slug from the catalog
    #[arg(long, default_value = "onboarding")]
    pub form: String,
    /// Base URL of the submission endpoint (defaults to INTAKE_SUBMIT_URL)
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Listen address (defaults to INTAKE_BIND)
    #[arg(long)]
    pub bind: Option<String>,
}
