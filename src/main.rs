use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use solace_gateway::api::{ApiServer, ApiState};
use solace_gateway::engine::{EmpathyEngine, SeededSelector, ThreadRngSelector};
use solace_gateway::{Config, EntryRepo, db};

/// Solace - Empathetic response gateway for emotional diary assistants
#[derive(Parser)]
#[command(name = "solace", version, about)]
struct Cli {
    /// Port to listen on (overrides config)
    #[arg(long, env = "SOLACE_PORT")]
    port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an empathetic reply for a text
    Respond {
        /// The diary text to respond to
        text: String,

        /// Emotion label from an upstream classifier
        #[arg(short, long, default_value = "neutral")]
        emotion: String,

        /// Seed for reproducible phrasing selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the full analysis for a text as JSON
    Analyze {
        /// The diary text to analyze
        text: String,
    },
    /// List recent diary entries
    Entries {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,solace_gateway=info",
        1 => "info,solace_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(cmd) = cli.command {
        return match cmd {
            Command::Respond {
                text,
                emotion,
                seed,
            } => cmd_respond(&text, &emotion, seed),
            Command::Analyze { text } => cmd_analyze(&text),
            Command::Entries { limit } => cmd_entries(limit),
        };
    }

    serve(cli.port).await
}

/// Run the HTTP API server until interrupted
async fn serve(port_override: Option<u16>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let port = port_override.unwrap_or(config.api_server.port);

    tracing::info!(
        port,
        data_dir = %config.data_dir.display(),
        "starting solace gateway"
    );

    let pool = db::init(config.db_path())?;
    let state = Arc::new(ApiState::new(pool));

    ApiServer::new(state, port).run().await?;

    Ok(())
}

/// Print an empathetic reply for a text
fn cmd_respond(text: &str, emotion: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let engine = EmpathyEngine::new();

    let response = match seed {
        Some(seed) => {
            let mut selector = SeededSelector::new(seed);
            engine.generate_response(text, emotion, &mut selector)
        }
        None => {
            let mut selector = ThreadRngSelector;
            engine.generate_response(text, emotion, &mut selector)
        }
    };

    println!("{response}");
    Ok(())
}

/// Print the full analysis for a text as JSON
fn cmd_analyze(text: &str) -> anyhow::Result<()> {
    let engine = EmpathyEngine::new();
    let mut selector = ThreadRngSelector;
    let analysis = engine.analyze(text, "neutral", &mut selector);

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

/// Print recent diary entries
fn cmd_entries(limit: usize) -> anyhow::Result<()> {
    let config = Config::load()?;
    let pool = db::init(config.db_path())?;
    let repo = EntryRepo::new(pool);

    let entries = repo.list_recent(limit)?;
    if entries.is_empty() {
        println!("No diary entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!(
            "[{}] {} ({}, {}, {})",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.text,
            entry.emotion,
            entry.intensity,
            entry.topic
        );
    }

    Ok(())
}
