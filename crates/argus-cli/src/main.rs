//! argus — command-line consumer of the triage core.
//!
//! Reads files or takes a URL, runs one analysis to its terminal outcome,
//! and renders the unified result as plain text.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use tracing::info;

use argus_ai::FindingsClient;
use argus_scan::ScanClient;
use argus_triage::{AnalysisInput, InputFile, run_analysis};

mod render;

#[derive(Parser)]
#[command(name = "argus", version, about = "Security triage: sanitized AI log analysis and multi-engine malware scanning")]
struct Cli {
    /// Base URL of the scanning service proxy.
    #[arg(
        long,
        env = "ARGUS_SCAN_URL",
        default_value = "http://localhost:8888/.netlify/functions/virustotal"
    )]
    scan_url: String,

    /// Endpoint of the AI analysis proxy.
    #[arg(
        long,
        env = "ARGUS_AI_URL",
        default_value = "http://localhost:8888/.netlify/functions/gemini"
    )]
    ai_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze files: text-like files are sanitized and sent for AI
    /// analysis, anything else goes to the malware scanner.
    Files { paths: Vec<PathBuf> },
    /// Submit a URL to the malware scanner.
    Url { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!(version = env!("CARGO_PKG_VERSION"), "argus starting");

    let scan = ScanClient::new(&cli.scan_url);
    let ai = FindingsClient::new(&cli.ai_url);

    let input = match cli.command {
        Command::Files { paths } => {
            let mut files = Vec::with_capacity(paths.len());
            for path in paths {
                let contents = std::fs::read(&path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string();
                files.push(InputFile { name, contents });
            }
            AnalysisInput::Files(files)
        }
        Command::Url { url } => AnalysisInput::Url(url),
    };

    match run_analysis(&scan, &ai, input).await {
        Ok(outcome) => {
            render::print_outcome(&outcome);
            Ok(())
        }
        Err(e) => Err(eyre::eyre!(e.user_message())),
    }
}
