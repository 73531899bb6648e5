//! sales-index CLI
//!
//! Loads a sales table and answers lookup, ranking and aggregation queries,
//! either once from the command line or interactively.

mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sales_index::loader::{normalize_path_input, LoaderConfig};
use sales_index::session::DEFAULT_TOP_ITEMS;
use sales_index::{report, Session};

use shell::Shell;

#[derive(Parser)]
#[command(name = "sales-index")]
#[command(version, about = "Index sales records by order ID and by profit", long_about = None)]
struct Cli {
    /// Sales table to load (CSV with a header row)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Input has no header row
    #[arg(long, global = true)]
    no_header: bool,

    /// Fail on the first malformed row instead of skipping it
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one order by its ID
    Lookup { order_id: String },

    /// Total profit per region
    Regions,

    /// Total profit per country, highest first
    Countries,

    /// Most profitable item types
    TopItems {
        #[arg(default_value_t = DEFAULT_TOP_ITEMS as i64, allow_negative_numbers = true)]
        n: i64,
    },

    /// Order with the highest profit
    TopSale,

    /// Record count and money totals
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(cli.verbose))
        .init();

    let config = LoaderConfig::default()
        .has_header(!cli.no_header)
        .skip_invalid(!cli.strict);

    let session = match &cli.file {
        Some(path) => {
            let path = PathBuf::from(normalize_path_input(&path.to_string_lossy()));
            let session = Session::load(&path, &config)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            println!(
                "Successfully loaded {} records from {}.",
                session.record_count(),
                path.display()
            );
            Some(session)
        }
        None => None,
    };

    match cli.command {
        Some(command) => {
            let session = session.context("A data file is required to run a query")?;
            run_once(session, command)
        }
        None => {
            info!("Starting interactive shell");
            let stdin = io::stdin();
            let mut shell = Shell::new(config, session);
            shell.run(stdin.lock(), io::stdout())?;
            Ok(())
        }
    }
}

/// `-v` forces debug output; otherwise `RUST_LOG` applies, defaulting to info
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Run a single query and print its result
fn run_once(session: Session, command: Commands) -> Result<()> {
    match command {
        Commands::Lookup { order_id } => match session.lookup(&order_id) {
            Some(record) => print!("{}", report::record_details(record, false)),
            None => println!("Order ID not found: {order_id}"),
        },
        Commands::Regions => {
            print!("{}", report::group_totals("Total Profits by Region", &session.regions()));
        }
        Commands::Countries => {
            print!("{}", report::group_totals("Total Profits by Country", &session.countries()));
        }
        Commands::TopItems { n } => {
            let requested = usize::try_from(n).unwrap_or(0);
            print!("{}", report::ranked_items(requested, &session.top_items(requested)));
        }
        Commands::TopSale => match session.top_sale() {
            Some(record) => {
                println!("\n--- Top Sale (Highest Profit) ---");
                print!("{}", report::record_details(record, true));
            }
            None => println!("No records found."),
        },
        Commands::Summary => print!("{}", report::summary(&session.summary())),
    }
    Ok(())
}
