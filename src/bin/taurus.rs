use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use taurus::market::{ticker, trade_graph, ExchangeInfo};
use taurus::render::{format_order, PathReport};
use taurus::Graph;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taurus")]
#[command(about = "Explore the trade pairs of an exchange", long_about = None)]
struct Cli {
    /// Exchange-info JSON document to build the trade graph from
    #[arg(long, value_name = "PATH")]
    exchange_info: PathBuf,

    /// Treat a pair as tradable only from base to quote
    #[arg(long, default_value_t = false)]
    directed: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assets reachable from a start asset, breadth first
    Bfs {
        /// Start asset (defaults to the first listed asset)
        #[arg(long)]
        from: Option<String>,
    },
    /// Every asset, depth first
    Dfs {
        /// Only list assets reachable from this one
        #[arg(long)]
        from: Option<String>,
    },
    /// All trade paths between two assets
    Paths {
        /// Start asset (case-insensitive)
        #[arg(long)]
        from: String,
        /// Destination asset (case-insensitive)
        #[arg(long)]
        to: String,
        /// Stop after this many paths
        #[arg(long)]
        max_paths: Option<usize>,
    },
    /// All assets that trade directly against an asset
    Pairs {
        /// Asset (case-insensitive)
        #[arg(long)]
        asset: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_graph(&cli)?;

    match cli.command {
        Commands::Bfs { from } => {
            let order = match from {
                Some(start) => graph.bfs_from(&ticker(&start))?,
                None => graph.bfs(),
            };
            print_order(&order, cli.json)?;
        }
        Commands::Dfs { from } => {
            let order = match from {
                Some(start) => graph.dfs_from(&ticker(&start))?,
                None => graph.dfs(),
            };
            print_order(&order, cli.json)?;
        }
        Commands::Paths {
            from,
            to,
            max_paths,
        } => {
            let (src, dest) = (ticker(&from), ticker(&to));
            let paths = graph.enumerate_paths(&src, &dest)?;
            let report = PathReport::collect(&src, &dest, paths, max_paths);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render());
            }
        }
        Commands::Pairs { asset } => {
            let asset = ticker(&asset);
            let pairs: Vec<&str> = graph.neighbours(&asset)?.collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pairs)?);
            } else {
                println!("Trade pairs involving {asset}");
                for other in pairs {
                    println!("  {asset}/{other}");
                }
            }
        }
    }

    Ok(())
}

fn load_graph(cli: &Cli) -> Result<Graph> {
    let path = &cli.exchange_info;
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let info = ExchangeInfo::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    let graph = trade_graph(&info, cli.directed).context("building trade graph")?;
    Ok(graph)
}

fn print_order(order: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(order)?);
    } else {
        println!("{}", format_order(order));
    }
    Ok(())
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
