//! Interactive console session
//!
//! Paste lines into the input buffer, then drive the controller with
//! `:`-prefixed commands. While an analysis is in flight the loop is
//! suspended on the one outstanding call, so no further submit or clear can
//! be issued, mirroring the disabled affordances of the original surface.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::controller::{AppController, FailureKind, SubmitOutcome, MIN_TEXT_CHARS};
use crate::presentation::{render_dashboard, RenderOptions};
use crate::service::analysis::TextAnalyzer;
use crate::service::llm::ENV_GEMINI_API_KEY;

/// User-facing message for a failed analysis
pub fn failure_message(kind: FailureKind) -> String {
    match kind {
        FailureKind::Configuration => format!(
            "Configuration error: no API key was found. Set {ENV_GEMINI_API_KEY} in your \
             environment or .env file and try again."
        ),
        FailureKind::Transient => {
            "An error occurred while analyzing the text. Please try again later.".to_string()
        }
    }
}

/// User-facing message for an under-length submission
pub fn too_short_message(chars: usize) -> String {
    format!(
        "The text is too short for a reliable analysis. Enter at least {MIN_TEXT_CHARS} \
         characters ({chars} so far)."
    )
}

fn print_help() {
    println!("Paste or type text; every line is appended to the input buffer.");
    println!("Commands:");
    println!("  :analyze   submit the buffer for analysis");
    println!("  :clear     discard the buffer and the last result");
    println!("  :show      show the current character count");
    println!("  :help      show this help");
    println!("  :quit      exit");
}

/// Run the paste-and-submit loop until `:quit` or end of input.
pub async fn run<A: TextAnalyzer>(
    controller: &mut AppController<A>,
    opts: &RenderOptions,
) -> io::Result<()> {
    println!("authorlens - human or machine?");
    println!("Paste the text to analyze, then use :analyze. :help lists commands.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":help" => print_help(),
            ":show" => {
                println!(
                    "{} characters in the buffer",
                    controller.input_text().chars().count()
                );
            }
            ":clear" => {
                if controller.clear() {
                    println!("Cleared.");
                } else {
                    println!("Nothing to clear.");
                }
            }
            ":analyze" | ":a" => {
                println!("{}", "Analyzing patterns...".dimmed());
                match controller.submit().await {
                    SubmitOutcome::Completed => {
                        if let Some(result) = controller.result() {
                            println!();
                            println!("{}", render_dashboard(result, opts));
                        }
                    }
                    SubmitOutcome::Failed(kind) => println!("{}", failure_message(kind)),
                    SubmitOutcome::TooShort { chars } => println!("{}", too_short_message(chars)),
                    SubmitOutcome::Ignored => println!("The buffer is empty."),
                    SubmitOutcome::Busy => println!("An analysis is already in flight."),
                }
            }
            cmd if cmd.starts_with(':') => {
                println!("Unknown command '{cmd}'. :help lists commands.");
            }
            _ => {
                controller.append_line(&line);
                println!(
                    "{}",
                    format!("{} characters", controller.input_text().chars().count()).dimmed()
                );
            }
        }
    }

    Ok(())
}
