use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{FormInput, RouteClient, SubmissionController, SubmitOutcome};
use tracing::info;

mod config;
mod terminal_ui;

use config::{load_settings, prepare_server_url};
use terminal_ui::{CliSubmit, TerminalUi};

#[derive(Parser, Debug)]
struct Cli {
    /// Route service base url; overrides route_cli.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit the route form once and write the rendered itinerary.
    Generate {
        #[arg(long)]
        interests: String,
        /// Available time in hours, passed through as typed.
        #[arg(long, allow_hyphen_values = true)]
        time: String,
        #[arg(long)]
        location: String,
        /// Write the HTML here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings();
    let raw_server_url = cli.server_url.unwrap_or(settings.server_url);
    let server_url = prepare_server_url(&raw_server_url)?;
    let client = RouteClient::connect(server_url.as_str())
        .with_context(|| format!("failed to set up client for {server_url}"))?;

    match cli.command {
        Command::Generate {
            interests,
            time,
            location,
            output,
        } => {
            let ui = TerminalUi::new(FormInput::new(interests, time, location));
            let mut controller = SubmissionController::new(client, ui);

            match controller.on_submit(&mut CliSubmit).await {
                SubmitOutcome::Rendered { place_count } => {
                    let ui = controller.into_ui();
                    let html = ui.visible_results().unwrap_or_default();
                    match output {
                        Some(path) => {
                            fs::write(&path, html).with_context(|| {
                                format!("failed to write route html to '{}'", path.display())
                            })?;
                            info!(place_count, path = %path.display(), "route written");
                        }
                        None => println!("{html}"),
                    }
                }
                SubmitOutcome::Failed { message } => {
                    let shown = controller.ui().visible_error().unwrap_or(message.as_str());
                    bail!("{shown}")
                }
            }
        }
        Command::Health => {
            let health = client.health().await?;
            println!(
                "{}: {} ({} locations)",
                health.service, health.status, health.locations_count
            );
            if !health.is_ok() {
                bail!("route service reports status '{}'", health.status);
            }
        }
    }

    Ok(())
}
