use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use persona_form::{FormController, PredictorClient, ViewSurface};

/// Submit text to the personality prediction service and print where the
/// result page would take you.
#[derive(Parser)]
#[command(name = "persona-form", version)]
struct Args {
    /// Text to analyze; read from stdin when omitted
    text: Option<String>,

    /// Base URL of the prediction service
    #[arg(long, default_value = "http://localhost:5000")]
    endpoint: String,

    /// Request timeout in seconds (waits indefinitely when omitted)
    #[arg(long)]
    timeout: Option<u64>,
}

/// Terminal stand-in for the page regions the controller drives.
#[derive(Default)]
struct TerminalSurface {
    destination: Option<String>,
}

impl ViewSurface for TerminalSurface {
    fn set_error_text(&mut self, text: &str) {
        if !text.is_empty() {
            eprintln!("{}", text);
        }
    }

    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            println!("Analyzing...");
        }
    }

    fn set_result_visible(&mut self, _visible: bool) {
        // The terminal has no standing result region; navigation prints it
    }

    fn navigate(&mut self, url: &str) {
        self.destination = Some(url.to_string());
        println!("✓ Prediction ready: {}", url);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let client = match args.timeout {
        Some(secs) => PredictorClient::with_timeout(&args.endpoint, Duration::from_secs(secs)),
        None => PredictorClient::new(&args.endpoint),
    };

    let mut controller = FormController::new(client, TerminalSurface::default());
    controller.init();
    controller.submit(&text).await;

    if controller.surface().destination.is_none() {
        std::process::exit(1);
    }

    Ok(())
}
