//! Page through a generated collection from the command line.
//!
//! Usage:
//!   cargo run -p pager-tools -- --items 100 jump=4 size=7 count=15
//!   cargo run -p pager-tools -- --config pager.toml --format json next next last

mod command;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use command::Command;
use libpager_core::{PagedList, PaginatorConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pager")]
#[command(about = "Navigate pages of a numbered collection and print each page")]
struct Args {
    /// Paginator config file (TOML); flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of items in the collection
    #[arg(short, long)]
    items: Option<i64>,

    /// Items per page
    #[arg(short = 's', long)]
    page_size: Option<usize>,

    /// Initial page index (0-based)
    #[arg(short, long)]
    page: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Report rejected commands and carry on instead of stopping
    #[arg(long)]
    keep_going: bool,

    /// Commands: next, prev, first, last, jump=N, size=N, count=N
    commands: Vec<Command>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    let items: Vec<u64> = (0..config.clamped_item_count() as u64).collect();
    let mut list = PagedList::from_config(items, config).context("invalid paginator config")?;

    print_page(&list, args.format)?;
    for command in &args.commands {
        match command.apply(&mut list) {
            Ok(_) => print_page(&list, args.format)?,
            Err(e) if args.keep_going => eprintln!("⚠ {:?}: {}", command, e),
            Err(e) => return Err(e.context(format!("command {:?} failed", command))),
        }
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<PaginatorConfig> {
    let mut config = match &args.config {
        Some(path) => PaginatorConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PaginatorConfig::default(),
    };
    if let Some(items) = args.items {
        config.item_count = items;
    }
    if let Some(page_size) = args.page_size {
        config.initial_page_size = page_size;
    }
    if let Some(page) = args.page {
        config.initial_page_index = page;
    }
    tracing::debug!(?config, "resolved config");
    Ok(config)
}

fn print_page(list: &PagedList<u64>, format: Format) -> Result<()> {
    let view = list.view();
    match format {
        Format::Text => {
            let items: Vec<String> = view.items.iter().map(|n| n.to_string()).collect();
            println!("{}", view.label);
            println!("  [{}]", items.join(", "));
        }
        Format::Json => println!("{}", serde_json::to_string(&view)?),
    }
    Ok(())
}
