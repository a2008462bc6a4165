use std::net::SocketAddr;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pudim::render::{render_error, render_ranks, render_report, OutputFormat};
use pudim::server::{self, AppState};
use pudim::{normalize_username, Config, GitHubClient, ScorePipeline};

#[derive(Parser, Debug)]
#[command(name = "pudim")]
#[command(version)]
#[command(about = "Calculate your Dev Pudim Score from a GitHub profile")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a GitHub user
    Score {
        /// GitHub username (URL-encoded input is decoded)
        username: String,

        /// Output format (json, text, markdown)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the ranking thresholds
    Ranks {
        /// Output format (json, text, markdown)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run the HTTP API
    Serve {
        /// Address to listen on (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pudim=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    match args.command {
        Command::Score {
            username,
            format,
            output,
        } => score(&config, &username, OutputFormat::from(format.as_str()), output).await,
        Command::Ranks { format } => {
            println!("{}", render_ranks(OutputFormat::from(format.as_str()))?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { bind } => {
            let pipeline = ScorePipeline::new(GitHubClient::new(&config)?);
            let addr = bind.unwrap_or(config.bind_addr);
            server::serve(AppState { pipeline }, addr).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn score(
    config: &Config,
    raw_username: &str,
    format: OutputFormat,
    output: Option<String>,
) -> anyhow::Result<ExitCode> {
    let username = normalize_username(raw_username)?;
    let pipeline = ScorePipeline::new(GitHubClient::new(config)?);

    match pipeline.score_user(&username).await {
        Ok(report) => {
            let rendered = render_report(&report, format)?;
            if let Some(ref path) = output {
                std::fs::write(path, &rendered)?;
                tracing::info!("Output written to: {}", path);
            } else {
                println!("{}", rendered);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", render_error(err, format)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
