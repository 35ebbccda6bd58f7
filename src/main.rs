use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod controller;
mod model;
mod presentation;
mod service;
mod ui;

use controller::{AppController, SubmitOutcome};
use model::Config;
use presentation::{render_dashboard, RenderOptions};
use service::{AnalysisService, LlmClient};

#[derive(Parser, Debug)]
#[command(
    name = "authorlens",
    version,
    about = "Estimate whether a text was written by an AI or a human"
)]
struct Cli {
    #[arg(long, global = true, help = "Output the raw analysis result as JSON")]
    json: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze text from a file, --text, or stdin
    Analyze {
        /// File containing the text to analyze; stdin when omitted
        file: Option<PathBuf>,
        /// Text to analyze, passed inline
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },
    /// Interactive paste-and-submit session
    Interactive,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing; logs go to stderr so stdout stays payload-only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    let llm_client = LlmClient::from_env();
    let analyzer = AnalysisService::new(llm_client, config.model.clone());
    let mut controller = AppController::new(analyzer);

    let opts = RenderOptions {
        enable_color: !cli.no_color,
        ..Default::default()
    };

    match cli.command {
        Commands::Analyze { file, text } => {
            let input = match read_input(file, text) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("Failed to read input: {e}");
                    return ExitCode::from(2);
                }
            };
            controller.set_input(input);
            run_one_shot(&mut controller, &opts, cli.json).await
        }
        Commands::Interactive => match ui::run(&mut controller, &opts).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Console error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Resolve the one-shot input from flag, file, or stdin
fn read_input(file: Option<PathBuf>, text: Option<String>) -> std::io::Result<String> {
    use std::io::Read;

    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Submit once and render the outcome; exit code 2 for rejected input,
/// 1 for a failed analysis.
async fn run_one_shot(
    controller: &mut AppController<AnalysisService>,
    opts: &RenderOptions,
    json: bool,
) -> ExitCode {
    match controller.submit().await {
        SubmitOutcome::Completed => {
            let Some(result) = controller.result() else {
                // Completed always stores a result; guard instead of unwrap
                eprintln!("Analysis completed but no result is available");
                return ExitCode::FAILURE;
            };
            if json {
                match serde_json::to_string_pretty(result) {
                    Ok(payload) => println!("{payload}"),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", render_dashboard(result, opts));
            }
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed(kind) => {
            eprintln!("{}", ui::failure_message(kind));
            ExitCode::FAILURE
        }
        SubmitOutcome::TooShort { chars } => {
            eprintln!("{}", ui::too_short_message(chars));
            ExitCode::from(2)
        }
        SubmitOutcome::Ignored => {
            eprintln!("No text to analyze.");
            ExitCode::from(2)
        }
        SubmitOutcome::Busy => {
            eprintln!("An analysis is already in flight.");
            ExitCode::from(2)
        }
    }
}
