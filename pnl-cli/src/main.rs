use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use pnl_finance::{Summary, TypeBreakdown, TypeFilter, distinct_types, page, total_pages};
use pnl_ingest::{Batch, Transaction, load_batch};
use std::path::PathBuf;
use tracing::debug;

mod config;
mod export;
mod logging;
mod render;
mod state;

use config::Config;
use render::{format_currency, print_table};

#[derive(Parser, Debug)]
#[command(
    name = "pnl",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PNL_BUILD_SHA"), ")"),
    about = "Profit and loss from bank and card CSV exports"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Input {
    /// Statement CSV files, combined in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Hide a transaction type (repeatable; adds to config `disabled_types`)
    #[arg(long = "disable", value_name = "TYPE")]
    disable: Vec<String>,

    /// Show a type even if the config disables it (repeatable)
    #[arg(long = "enable", value_name = "TYPE")]
    enable: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Revenue, expense and net over the enabled transaction types
    Summary {
        #[command(flatten)]
        input: Input,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Paged transaction table
    List {
        #[command(flatten)]
        input: Input,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (default: config `page_size`)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Distinct transaction types with per-type totals
    Types {
        #[command(flatten)]
        input: Input,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the enabled transactions to a CSV file
    Export {
        #[command(flatten)]
        input: Input,

        /// Output path
        #[arg(long)]
        out: PathBuf,
    },

    /// Manage ~/.pnl/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

/// Parsed batch plus the filter built from config and flags.
struct Loaded {
    batch: Batch,
    filter: TypeFilter,
}

impl Loaded {
    fn active(&self) -> Vec<&Transaction> {
        self.filter.active(&self.batch.transactions)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Summary { input, json } => {
            let cfg = config::load_config()?;
            let loaded = load(&input, &cfg).await?;
            summary(&loaded, &cfg, json)?;
        }

        Command::List {
            input,
            page,
            page_size,
        } => {
            let cfg = config::load_config()?;
            let loaded = load(&input, &cfg).await?;
            list(&loaded, &cfg, page, page_size.unwrap_or(cfg.display.page_size))?;
        }

        Command::Types { input, json } => {
            let cfg = config::load_config()?;
            let loaded = load(&input, &cfg).await?;
            types(&loaded, &cfg, json)?;
        }

        Command::Export { input, out } => {
            let cfg = config::load_config()?;
            let loaded = load(&input, &cfg).await?;
            let n = export::write_csv(&loaded.active(), &out)?;
            println!("Wrote {} transactions to {}", n, out.display());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

async fn load(input: &Input, cfg: &Config) -> Result<Loaded> {
    let batch = load_batch(&input.files).await?;
    debug!(
        files = batch.files_loaded,
        transactions = batch.transactions.len(),
        "batch loaded"
    );

    let filter = build_filter(&batch.transactions, cfg, input);
    Ok(Loaded { batch, filter })
}

/// Seed from the parsed types, hide config and `--disable` types, then let
/// `--enable` win over both.
fn build_filter(txns: &[Transaction], cfg: &Config, input: &Input) -> TypeFilter {
    let mut filter = TypeFilter::from_transactions(txns);
    for kind in cfg.filter.disabled_types.iter().chain(&input.disable) {
        filter.set_enabled(kind, false);
    }
    for kind in &input.enable {
        filter.set_enabled(kind, true);
    }
    filter
}

fn loaded_banner(batch: &Batch) -> String {
    let files = batch.files_loaded;
    format!(
        "Loaded {} transactions from {} file{}",
        batch.transactions.len(),
        files,
        if files == 1 { "" } else { "s" }
    )
}

fn summary(loaded: &Loaded, cfg: &Config, json: bool) -> Result<()> {
    let totals = Summary::from_transactions(loaded.active());

    if json {
        let out = serde_json::json!({
            "files": loaded.batch.files_loaded,
            "transactions": loaded.batch.transactions.len(),
            "disabled_types": loaded.filter.disabled(),
            "summary": totals,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let symbol = &cfg.display.currency_symbol;
    println!("{}\n", loaded_banner(&loaded.batch));

    println!("Transaction Types");
    for kind in distinct_types(&loaded.batch.transactions) {
        let mark = if loaded.filter.is_enabled(&kind) { '✓' } else { '✗' };
        println!("  {} {}", kind, mark);
    }

    println!("\nSummary ({} transactions)", totals.count);
    println!("  Revenue: {:>16}", format_currency(totals.revenue, symbol));
    println!("  Expense: {:>16}", format_currency(totals.expense, symbol));
    println!("  Net:     {:>16}", format_currency(totals.net, symbol));
    Ok(())
}

fn list(loaded: &Loaded, cfg: &Config, page_no: usize, page_size: usize) -> Result<()> {
    if page_size == 0 {
        bail!("--page-size must be at least 1");
    }

    let active = loaded.active();
    let pages = total_pages(active.len(), page_size);
    if active.is_empty() {
        println!("{}\n\nAll transaction types are disabled.", loaded_banner(&loaded.batch));
        return Ok(());
    }
    if page_no == 0 || page_no > pages {
        bail!("page {} out of range (1..={})", page_no, pages);
    }

    println!("{}\n", loaded_banner(&loaded.batch));
    print_table(page(&active, page_no, page_size), &cfg.display.currency_symbol);
    println!("\nPage {} of {}", page_no, pages);
    Ok(())
}

fn types(loaded: &Loaded, cfg: &Config, json: bool) -> Result<()> {
    let rows = TypeBreakdown::by_type(&loaded.batch.transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let symbol = &cfg.display.currency_symbol;
    for row in &rows {
        let state = if loaded.filter.is_enabled(&row.kind) { "on" } else { "off" };
        println!(
            "{:<20} {:>3}  count={:<5} net={}",
            if row.kind.is_empty() { "(none)" } else { row.kind.as_str() },
            state,
            row.summary.count,
            format_currency(row.summary.net, symbol)
        );
    }
    Ok(())
}
