use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use bintree::sequence::DEFAULT_CAPACITY;
use bintree::{script, DriverError};

/// Builds a binary search tree from each `$$`-terminated group of words in a
/// file and reports on it.
#[derive(Parser, Debug)]
#[command(name = "bintree-driver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File of whitespace separated words
    input: PathBuf,

    /// Slots in the buffer used to convert trees to arrays and back
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Increase log verbosity (-d, -dd, -ddd). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DriverError> {
    let input = BufReader::new(File::open(&cli.input)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let groups = script::run(input, &mut out, cli.capacity)?;
    info!(groups, path = %cli.input.display(), "finished");
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}
