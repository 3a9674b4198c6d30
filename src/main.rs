use anyhow::Result;
use clap::Parser;
use log::info;

use intake_cli::cli::{Cli, Commands};
use intake_cli::{config, forms, server, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            env_logger::Builder::from_default_env().init();

            let mut config = config::Config::from_env()?;
            if let Some(bind) = args.bind {
                config.bind_addr = bind;
            }

            info!("Starting intake-cli submission service");
            server::serve(config).await
        }
        Commands::Wizard(args) => {
            // Log to a file so prompt rendering stays clean (truncate each run)
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open("intake-cli.log")?;
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();

            let schema = forms::find_form(&args.form)
                .ok_or_else(|| anyhow::anyhow!("Unknown form '{}'", args.form))?;
            let base_url = args.url.unwrap_or_else(config::submit_url_from_env);
            let submit_url = format!("{}/{}", base_url.trim_end_matches('/'), schema.slug);

            info!("Starting wizard for form '{}'", schema.slug);
            ui::prompts::run_wizard(schema, &submit_url).await
        }
        Commands::Forms => {
            env_logger::Builder::from_default_env().init();

            for schema in forms::catalog() {
                println!(
                    "{:<12} {:<36} {} preguntas",
                    schema.slug,
                    schema.title,
                    schema.questions.len()
                );
            }
            Ok(())
        }
    }
}
