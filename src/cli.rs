use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Print top level fields from a json document. If the document is an
/// array, fields are read from its first element.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Increase logging on stderr, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON file to read
    pub path: PathBuf,

    /// Top level fields to print, in order
    pub fields: Vec<String>,
}

impl Args {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

// init_logging installs a compact fmt subscriber writing to stderr so
// stdout only ever carries field values.
pub fn init_logging(level: Level) {
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .compact()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    // a subscriber may already be set when embedded, keep the existing one
    let _ = tracing::subscriber::set_global_default(subscriber);
}
