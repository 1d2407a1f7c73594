use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fts::index::{DefaultStrategy, Indexer};
use fts::output;
use fts::repl;
use fts::search::IndexedDirectory;
use fts::utils::{AppConfig, BarProgress, Directory, WalkOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "fts")]
#[command(version, about = "In-memory, case-sensitive full-text search over a directory")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to search in (interactive mode)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress everything but results and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Files longer than this many chars get a naive index (0 = no limit)
    #[arg(long, global = true)]
    max_tree_chars: Option<usize>,

    /// Index files one at a time
    #[arg(long, global = true)]
    serial: bool,

    /// Worker threads for indexing (0 = one per CPU)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Skip files matched by .gitignore and .ignore
    #[arg(long, global = true)]
    respect_ignore: bool,

    /// Skip hidden files and directories
    #[arg(long, global = true)]
    skip_hidden: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a directory, run one query and print every match
    Query {
        /// Directory to search in
        path: PathBuf,

        /// Exact, case-sensitive text to find
        query: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,

        /// Colorize output
        #[arg(long)]
        color: bool,

        /// Only print the number of matches per file
        #[arg(long)]
        count: bool,
    },
    /// Index a directory and show how each file was indexed
    Stats {
        /// Directory to index
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let indexer = build_indexer(&cli, &config)?;
    let walk = WalkOptions {
        respect_ignore_files: cli.respect_ignore,
        skip_hidden: cli.skip_hidden,
    };

    match &cli.command {
        Some(Commands::Query {
            path,
            query,
            json,
            color,
            count,
        }) => {
            let directory = open_directory(path, walk)?;
            let indexed = index_quietly(&indexer, &directory, cli.quiet || *json)?;

            let mut matches = indexed.query_case_sensitive(query);
            matches.sort();

            if *json {
                let stdout = io::stdout();
                output::print_json(&mut stdout.lock(), &matches)?;
            } else if *count {
                output::print_match_counts(&mut output::stdout(*color), &matches)?;
            } else {
                let len = query.chars().count();
                output::print_matches(&mut output::stdout(*color), &indexed, &matches, len)?;
            }
        }
        Some(Commands::Stats { path }) => {
            let directory = open_directory(path, walk)?;
            let indexed = index_quietly(&indexer, &directory, cli.quiet)?;
            let stdout = io::stdout();
            output::print_stats(&mut stdout.lock(), &indexed)?;
        }
        None => interactive(&indexer, &cli.path, walk, cli.verbose > 0 && !cli.quiet)?,
    }

    Ok(())
}

/// Indexer configured from the config file, with command line overrides
fn build_indexer(cli: &Cli, config: &AppConfig) -> Result<Indexer> {
    let max_chars = match cli.max_tree_chars {
        Some(0) => None,
        Some(max) => Some(max),
        None => config.suffix_tree_max_chars,
    };
    let strategy = DefaultStrategy::with_exclusions(max_chars, config.excluded_globs.as_slice())
        .context("Invalid exclusion pattern in config")?;

    Ok(Indexer::new(strategy)
        .parallel(config.parallel_indexing && !cli.serial)
        .threads(cli.threads.unwrap_or(config.indexing_threads)))
}

fn open_directory(path: &Path, walk: WalkOptions) -> Result<Directory> {
    Directory::with_options(path, walk)
        .with_context(|| format!("Cannot search in {}", path.display()))
}

/// Index for a one-shot command; the bar is hidden when stdout is meant for
/// machines
fn index_quietly(indexer: &Indexer, directory: &Directory, quiet: bool) -> Result<IndexedDirectory> {
    let progress = if quiet {
        BarProgress::hidden()
    } else {
        BarProgress::new(false)
    };
    indexer
        .build_index(directory, &progress)
        .with_context(|| format!("Failed to index {}", directory.root().display()))
}

fn interactive(indexer: &Indexer, path: &Path, walk: WalkOptions, verbose: bool) -> Result<()> {
    println!("=== Full-text search application ===");
    let directory = open_directory(path, walk)?;
    println!("Indexing {}...", directory.root().display());
    io::stdout().flush()?;

    let started = Instant::now();
    let progress = Arc::new(BarProgress::new(verbose));
    let indexed = indexer
        .clone()
        .spawn(directory, progress)?
        .join()
        .with_context(|| format!("Failed to index {}", path.display()))?;
    let elapsed_ms = started.elapsed().as_millis();
    info!(files = indexed.len(), elapsed_ms = elapsed_ms as u64, "ready");
    println!("Finished indexing in {}ms.", elapsed_ms);

    let stdin = io::stdin();
    repl::run(&indexed, stdin.lock(), io::stdout())
}
