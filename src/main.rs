use clap::{Parser, Subcommand, ValueEnum};
use onstool::{RecordStore, parse_code};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "onstool", version, about = "Edit SPN operator name tables")]
struct Options {
    /// Set the logging level, unless RUST_LOG is set
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Path to the operator name table
    path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every record
    List,

    /// Add a record unless its key already exists
    Add {
        #[arg(value_parser = parse_code)]
        mnc: u32,
        #[arg(value_parser = parse_code)]
        mcc: u32,
        short_name: String,
        /// Defaults to the short name
        long_name: Option<String>,
    },

    /// Rename an existing record
    Edit {
        #[arg(value_parser = parse_code)]
        mnc: u32,
        #[arg(value_parser = parse_code)]
        mcc: u32,
        short_name: String,
        /// Left unchanged if omitted
        long_name: Option<String>,
    },

    /// Remove a record
    Remove {
        #[arg(value_parser = parse_code)]
        mnc: u32,
        #[arg(value_parser = parse_code)]
        mcc: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut store = RecordStore::open(&options.path)?;

    match options.command {
        Command::List => {
            for line in store.list() {
                println!("{line}");
            }
            return Ok(());
        }
        Command::Add {
            mnc,
            mcc,
            short_name,
            long_name,
        } => {
            let added = store.add(mnc, mcc, &short_name, long_name.as_deref());
            info!(mnc, mcc, added, "add");
        }
        Command::Edit {
            mnc,
            mcc,
            short_name,
            long_name,
        } => {
            let edited = store.edit(mnc, mcc, &short_name, long_name.as_deref());
            info!(mnc, mcc, edited, "edit");
        }
        Command::Remove { mnc, mcc } => {
            let removed = store.remove(mnc, mcc);
            info!(mnc, mcc, removed, "remove");
        }
    }

    // the file is rewritten even when nothing changed
    store.save()?;
    Ok(())
}
