use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use leadcard_engine::{DatasetSource, FetchSettings};
use log::LevelFilter;
use url::Url;

use super::logging::LogDestination;
use super::ui::constants::SAMPLE_LEADS_CSV;

pub const DEFAULT_LOCATION: &str = "https://leadcard.local/";
pub const DEFAULT_STORE_FILENAME: &str = ".leadcard_state.ron";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "leadcard",
    version,
    about = "Page through a lead sheet one business at a time.",
    long_about = "Leadcard shows one business from a CSV lead sheet at a time for outbound calling.\n\nThe current position and industry filter are remembered between runs.\n\nExamples:\n  leadcard --csv leads.csv\n  leadcard --csv https://example.com/leads.csv --location 'https://leadcard.local/?industry=Dental'"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "PATH|URL",
        help_heading = "Input",
        help = "CSV lead sheet to load (defaults to the embedded sample)."
    )]
    pub csv: Option<String>,

    #[arg(
        long,
        value_name = "SECS",
        help_heading = "Input",
        help = "Give up on a remote CSV after this many seconds (default: wait)."
    )]
    pub fetch_timeout: Option<u64>,

    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_LOCATION,
        help_heading = "State",
        help = "Starting location; its `industry` query parameter overrides the stored filter."
    )]
    pub location: String,

    #[arg(
        long,
        value_name = "FILE",
        help_heading = "State",
        help = "Where position and filter are stored (default: ./.leadcard_state.ron)."
    )]
    pub store: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "store",
        help_heading = "State",
        help = "Keep position and filter in memory only."
    )]
    pub ephemeral: bool,

    #[arg(
        long,
        help_heading = "State",
        help = "Forget the stored position and filter before starting."
    )]
    pub reset: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = LogTarget::File,
        help_heading = "Output",
        help = "Where to write logs."
    )]
    pub log: LogTarget,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: DatasetSource,
    pub fetch: FetchSettings,
    pub location: Url,
    pub store: StoreChoice,
    pub reset: bool,
    pub log: Option<LogDestination>,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_args(args: CliArgs) -> anyhow::Result<Self> {
        let location = Url::parse(&args.location)
            .with_context(|| format!("invalid --location {:?}", args.location))?;

        let source = match args.csv.as_deref().map(str::trim) {
            Some(csv) if !csv.is_empty() => DatasetSource::from_location(csv),
            _ => DatasetSource::Inline(SAMPLE_LEADS_CSV.to_string()),
        };

        let store = if args.ephemeral {
            StoreChoice::Memory
        } else {
            StoreChoice::File(
                args.store
                    .unwrap_or_else(|| PathBuf::from(".").join(DEFAULT_STORE_FILENAME)),
            )
        };

        let fetch = FetchSettings {
            request_timeout: args.fetch_timeout.map(Duration::from_secs),
            ..FetchSettings::default()
        };

        let log = match args.log {
            LogTarget::File => Some(LogDestination::File),
            LogTarget::Terminal => Some(LogDestination::Terminal),
            LogTarget::Both => Some(LogDestination::Both),
            LogTarget::Off => None,
        };
        let log_level = match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Ok(Self {
            source,
            fetch,
            location,
            store,
            reset: args.reset,
            log,
            log_level,
        })
    }
}
