//! `confluencia`: query the multi-timeframe analysis surface from a shell.
//!
//! Logs go to stderr (filter with `RUST_LOG`); response bodies are printed to
//! stdout as pretty JSON. Non-2xx responses exit with status 1.

mod connector;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use confluencia::{ApiService, Confluencia, ConfluenciaConfig, ResolveStrategy};
use url::{Position, Url};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How the three timeframe calls of a confirmation are scheduled
    #[arg(long, value_enum, default_value_t = Strategy::Concurrent, global = true)]
    strategy: Strategy,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a raw request target, e.g. `/analisis/GBPUSD?tf=5min`
    Get {
        /// Path plus optional query string
        target: String,
        /// Request method
        #[arg(long, default_value = "GET")]
        method: String,
    },
    /// Single-timeframe analysis
    Analisis {
        /// Symbol to analyse; the configured default when omitted
        symbol: Option<String>,
        /// Timeframe: 1min, 5min or 15min
        #[arg(long)]
        tf: Option<String>,
    },
    /// Multi-timeframe confluence (M1, M5, M15)
    Confirmacion {
        /// Symbol to analyse; the configured default when omitted
        #[arg(long)]
        symbol: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Concurrent,
    Sequential,
}

impl From<Strategy> for ResolveStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Concurrent => Self::Concurrent,
            Strategy::Sequential => Self::Sequential,
        }
    }
}

impl Commands {
    /// Method and request target this command maps to.
    fn request(&self) -> anyhow::Result<(String, String)> {
        let mut url = Url::parse("http://localhost/analisis").context("static base URL")?;
        match self {
            Self::Get { target, method } => return Ok((method.clone(), target.clone())),
            Self::Analisis { symbol, tf } => {
                if let (Some(symbol), Ok(mut segs)) = (symbol, url.path_segments_mut()) {
                    segs.push(symbol);
                }
                if let Some(tf) = tf {
                    url.query_pairs_mut().append_pair("tf", tf);
                }
            }
            Self::Confirmacion { symbol } => {
                if let Ok(mut segs) = url.path_segments_mut() {
                    segs.push("confirmacion");
                }
                if let Some(symbol) = symbol {
                    url.query_pairs_mut().append_pair("symbol", symbol);
                }
            }
        }
        Ok(("GET".to_string(), url[Position::BeforePath..].to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();

    let engine = Confluencia::builder()
        .with_connector(connector::from_env()?)
        .config(ConfluenciaConfig::from_env())
        .resolve_strategy(cli.strategy.into())
        .build()?;
    let service = ApiService::new(Arc::new(engine));

    let (method, target) = cli.command.request()?;
    tracing::debug!(%method, %target, "dispatching");
    let response = service.handle(&method, &target).await;

    println!("{}", serde_json::to_string_pretty(&response.body)?);
    if response.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(status = response.status, "request failed");
        Ok(ExitCode::FAILURE)
    }
}
