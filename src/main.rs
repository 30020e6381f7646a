use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderflow::application::checkout::Checkout;
use orderflow::application::engine::OrderFlowEngine;
use orderflow::application::flow::START_TOKEN;
use orderflow::config::AppConfig;
use orderflow::domain::pricing::PricingCalculator;
use orderflow::domain::state::ChatState;
use orderflow::infrastructure::in_memory::InMemoryOrderGateway;
use orderflow::interfaces::csv::transcript_reader::{TranscriptAction, TranscriptReader};
use orderflow::interfaces::json::response_writer::ResponseWriter;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Transcript CSV file with an `action,text` header. Reads stdin if omitted.
    input: Option<PathBuf>,

    /// Platform the order is for, e.g. Instagram
    #[arg(long)]
    platform: String,

    /// Service being ordered, e.g. Followers
    #[arg(long)]
    service: String,

    /// TOML file overriding pricing rates
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every transition
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("orderflow=debug")
    } else {
        EnvFilter::new("orderflow=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::load(path).into_diagnostic()?,
        None => AppConfig::default(),
    };

    let mut engine = OrderFlowEngine::with_pricing(
        cli.platform,
        cli.service,
        PricingCalculator::new(config.pricing),
    );
    let checkout = Checkout::new(Box::new(InMemoryOrderGateway::new()));

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());
    writer
        .write_response(&engine.process_message(START_TOKEN))
        .into_diagnostic()?;

    let mut receipt = None;
    for entry in TranscriptReader::new(source).entries() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Error reading transcript entry: {}", e);
                continue;
            }
        };

        if engine.state().is_terminal() {
            warn!("Session already closed, ignoring remaining input");
            break;
        }

        let response = match entry.action {
            TranscriptAction::Message => engine.process_message(&entry.text),
            TranscriptAction::Confirm => engine.trigger_confirmation(),
        };

        let paid = response.next_state == ChatState::Confirmation
            || entry.action == TranscriptAction::Confirm;
        if paid && receipt.is_none() {
            receipt = checkout.submit(&engine).await;
            if let Some(order) = &receipt
                && let Some(progress) = checkout.progress(order.id).await
            {
                info!(order_id = order.id, "{}", progress);
            }
        }

        writer.write_response(&response).into_diagnostic()?;
    }

    Ok(())
}
