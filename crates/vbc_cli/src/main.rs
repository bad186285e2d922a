//! Voicebank label converter (vbc) - Main entry point
//!
//! Reads settings from a TOML file (created with defaults when absent),
//! applies command-line overrides and runs one conversion.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vbc_core::config::ConfigManager;
use vbc_core::logging::{init_tracing, LogLevel};
use vbc_core::phonemes::{DecisionSource, ScriptedDecisions};

mod prompt;

use prompt::TerminalDecisions;

/// Command-line arguments for vbc
#[derive(Parser, Debug)]
#[command(name = "vbc")]
#[command(about = "Convert a voicebank's oto.ini labels to a vsdxmf listing")]
#[command(version)]
struct Args {
    /// Settings file, created with defaults if it does not exist
    #[arg(short, long, default_value = "vbc.toml", env = "VBC_CONFIG")]
    config: PathBuf,

    /// Source sample listing
    #[arg(long)]
    oto: Option<String>,

    /// Phoneme-group file; the built-in kana table is used when absent
    #[arg(long)]
    presamp: Option<String>,

    /// Marker opening a leading-consonant label
    #[arg(long)]
    begin_sign: Option<String>,

    /// Marker closing a trailing-vowel label
    #[arg(long)]
    ending_sign: Option<String>,

    /// Encoding of the oto, presamp and rename files, e.g. shift_jis
    #[arg(long)]
    encoding: Option<String>,

    /// Never prompt; remaining collisions are kept as duplicates
    #[arg(long)]
    non_interactive: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigManager::new(&args.config);
    let created = config
        .load_or_create()
        .with_context(|| format!("Failed to load settings from {}", args.config.display()))?;

    let settings = config.settings_mut();
    if let Some(oto) = args.oto {
        settings.paths.oto_file = oto;
    }
    if let Some(presamp) = args.presamp {
        settings.paths.presamp_file = Some(presamp);
    }
    if let Some(begin_sign) = args.begin_sign {
        settings.conversion.begin_sign = begin_sign;
    }
    if let Some(ending_sign) = args.ending_sign {
        settings.conversion.ending_sign = ending_sign;
    }
    if let Some(encoding) = args.encoding {
        settings.conversion.encoding = encoding;
    }
    if let Some(level) = args.log_level {
        settings.logging.level = level;
    }

    init_tracing(settings.logging.level);
    if created {
        info!("Wrote default settings to {}", args.config.display());
    }

    let settings = config.into_settings();

    let mut decisions: Box<dyn DecisionSource> = if args.non_interactive {
        Box::new(ScriptedDecisions::accepting())
    } else {
        Box::new(TerminalDecisions::new(io::stdin().lock(), io::stdout()))
    };

    let summary = vbc_core::run(&settings, decisions.as_mut()).with_context(|| {
        format!(
            "Conversion of {} failed",
            settings.paths.oto_file
        )
    })?;

    print!("{}", summary.log);
    info!(
        "Done: {} entries, {} labels, log at {}",
        summary.entries, summary.labels, settings.paths.log_file
    );

    Ok(())
}
