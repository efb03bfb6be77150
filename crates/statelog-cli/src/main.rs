//! statelog CLI
//!
//! Records decisions, completed work, open questions and context into
//! per-scope state documents.

use clap::{Parser, ValueEnum};
use statelog_core::logging_facility::{self, Profile};
use statelog_core::ExError;
use statelog_engine::{route, CommandKind, NoMatchPolicy};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "statelog")]
#[command(
    about = "statelog - Project decision and progress journal",
    long_about = None,
    after_help = "Commands: decided, built, question, file, context, resolve, show\n\
                  Append ':<subsystem>' to a command to target a subsystem (e.g. decided:tracking)."
)]
pub struct Cli {
    /// Journal directory holding the state documents
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Subsystem to target (a ':<subsystem>' suffix on the command wins)
    #[arg(long)]
    pub subsystem: Option<String>,

    /// Fail when resolve matches no open question
    #[arg(long)]
    pub strict: bool,

    /// Print the updated document after the confirmation
    #[arg(long)]
    pub json: bool,

    /// Logging profile (RUST_LOG overrides the filter)
    #[arg(long, value_enum, default_value_t = LogProfile::Quiet)]
    pub log: LogProfile,

    /// Command, optionally suffixed with ':<subsystem>'
    pub command: String,

    /// Entry text; for resolve, the keyword followed by the resolution
    #[arg(allow_hyphen_values = true)]
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Quiet,
    Pretty,
    Json,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Quiet => Profile::Quiet,
            LogProfile::Pretty => Profile::Development,
            LogProfile::Json => Profile::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log.into());

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let route = route(&cli.command, cli.subsystem.as_deref()).map_err(ExError::from)?;

    match route.kind {
        CommandKind::Show => commands::show::execute(route, cli),
        _ => {
            let policy = if cli.strict {
                NoMatchPolicy::Fail
            } else {
                NoMatchPolicy::Report
            };
            commands::record::execute(route, cli, policy)
        }
    }
}
