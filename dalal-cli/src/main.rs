//! dalal: NIFTY 50 dashboard in the terminal.
//!
//! Commands:
//! - `list`: print the registry in definition order
//! - `show`: detail report for one company name or ticker symbol
//! - `summary`: fetch every snapshot, print the table and export CSV

mod terminal;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dalal::export::{EXPORT_FILE, SORTED_EXPORT_FILE};
use dalal::{Dalal, DalalConfig, DalalConnector, Dashboard, ExportStatus, TickerRegistry};

use terminal::TerminalPresenter;

#[derive(Parser)]
#[command(name = "dalal", about = "NIFTY 50 stock dashboard")]
struct Cli {
    /// Serve deterministic fixtures instead of calling Yahoo Finance.
    #[arg(long, global = true, default_value_t = false)]
    mock: bool,

    /// TOML file with orchestrator settings; flags below override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Per-provider timeout in milliseconds.
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Snapshot requests in flight during a batch.
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the companies in the NIFTY 50 registry.
    List,
    /// Show the detail report for a company name or ticker symbol.
    Show {
        /// Registry name (any case) or a symbol such as INFY.NS.
        ticker: String,

        /// Print the report as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Fetch all fifty snapshots, print the table and export it as CSV.
    Summary {
        /// Export the table sorted by sector instead of in registry order.
        #[arg(long, default_value_t = false, conflicts_with = "both")]
        sorted: bool,

        /// Export both the unsorted and the sorted table from one fetch.
        #[arg(long, default_value_t = false)]
        both: bool,

        /// Directory the CSV files are written to.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG=dalal=debug,dalal_yfinance=debug for provider-level detail
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    let registry = TickerRegistry::nifty50();

    if let Commands::List = cli.command {
        for entry in &registry {
            println!("{:<34} {}", entry.display_name, entry.symbol);
        }
        return Ok(());
    }

    let cfg = load_config(cli.config.as_deref(), cli.timeout_ms, cli.concurrency)?;
    let dalal = Dalal::builder()
        .with_connector(connector(cli.mock)?)
        .config(cfg)
        .build()?;

    match cli.command {
        Commands::List => Ok(()),
        Commands::Show { ticker, json } => show(&dalal, &registry, &ticker, json).await,
        Commands::Summary { sorted, both, out } => {
            summary(&dalal, &registry, &out, sorted, both).await
        }
    }
}

fn load_config(
    path: Option<&Path>,
    timeout_ms: Option<u64>,
    concurrency: Option<usize>,
) -> Result<DalalConfig> {
    let mut cfg = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            toml::from_str::<DalalConfig>(&text)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
        None => DalalConfig::default(),
    };
    if let Some(ms) = timeout_ms {
        cfg.provider_timeout = Duration::from_millis(ms);
    }
    if let Some(n) = concurrency {
        cfg.max_concurrency = n;
    }
    Ok(cfg)
}

fn connector(mock: bool) -> Result<Arc<dyn DalalConnector>> {
    if mock {
        tracing::info!("using mock connector");
        return Ok(Arc::new(dalal_mock::MockConnector::new()));
    }
    Ok(Arc::new(dalal_yfinance::YfConnector::try_new_default()?))
}

async fn show(dalal: &Dalal, registry: &TickerRegistry, ticker: &str, json: bool) -> Result<()> {
    let mut dash = Dashboard::new(dalal, registry, TerminalPresenter::new(json));
    if dash.show_ticker(ticker).await.is_none() {
        bail!("no data for {ticker:?}");
    }
    Ok(())
}

async fn summary(
    dalal: &Dalal,
    registry: &TickerRegistry,
    out: &Path,
    sorted: bool,
    both: bool,
) -> Result<()> {
    let mut dash = Dashboard::new(dalal, registry, TerminalPresenter::new(false));
    let mut statuses = Vec::new();
    if both || !sorted {
        statuses.push(dash.export_all(&out.join(EXPORT_FILE)).await);
    }
    if both || sorted {
        statuses.push(
            dash.export_sorted_by_sector(&out.join(SORTED_EXPORT_FILE))
                .await,
        );
    }
    let failed = statuses
        .iter()
        .filter(|s| matches!(s, ExportStatus::Failed { .. }))
        .count();
    if failed > 0 {
        bail!("{failed} export(s) failed");
    }
    Ok(())
}
