//! One conversion run, end to end.
//!
//! ```text
//! oto.ini ─► parse ─┐
//!                   ├─► classify ─► vsdxmf, log, report
//! presamp.ini ──────┤
//!  + rename file    └─► resolve ──► lsd, rename file
//! ```
//!
//! Paths come from [`Settings`]; relative paths resolve against the working
//! directory. Every input is read and every decision made before the first
//! output is written.

use std::path::Path;

use crate::config::{ConfigError, Settings};
use crate::convert::{AlienClassifier, CoverageTracker, DiagnosticReport};
use crate::encoding::TextEncoding;
use crate::error::ConvertResult;
use crate::export;
use crate::oto::{self, SuffixSet};
use crate::phonemes::{
    builtin, presamp, rename, CollisionResolver, DecisionSource, PhonemeInventory, RenameSeed,
    ResolutionOutcome,
};

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Target entries written.
    pub entries: usize,
    /// Labels in the final phoneme table.
    pub labels: usize,
    /// Prior rename decisions applied.
    pub seeds_applied: usize,
    /// `None` when the built-in table was used.
    pub resolution: Option<ResolutionOutcome>,
    pub report: DiagnosticReport,
    /// The text log, as written to the log file.
    pub log: String,
}

/// Run a conversion with the given settings.
pub fn run(settings: &Settings, decisions: &mut dyn DecisionSource) -> ConvertResult<RunSummary> {
    let paths = &settings.paths;
    let conversion = &settings.conversion;

    let encoding = TextEncoding::from_label(&conversion.encoding)?;
    tracing::debug!("Reading inputs as {}", encoding.name());

    let suffixes = SuffixSet::with_custom(conversion.custom_suffixes.iter().cloned());
    let samples = oto::parse_file(&paths.oto_file, &suffixes, encoding)?;

    let (inventory, seeds_applied, resolution) = match &paths.presamp_file {
        Some(presamp_file) => {
            let (inventory, applied, outcome) = resolve_inventory(
                presamp_file,
                paths.rename_file.as_deref(),
                encoding,
                decisions,
            )?;
            (inventory, applied, Some(outcome))
        }
        None => {
            tracing::info!("No phoneme-group file configured, using built-in table");
            (PhonemeInventory::new(builtin::default_table()), 0, None)
        }
    };

    let coverage = CoverageTracker::from_table(&inventory.table);
    let classifier = AlienClassifier::new(
        conversion.begin_sign.as_str(),
        conversion.ending_sign.as_str(),
        &inventory,
    );
    let result = classifier.convert(&samples, coverage);

    export::write_vsdxmf(&result.entries, &paths.vsdxmf_file)?;
    export::write_lsd(&inventory.table, &paths.lsd_file)?;
    if resolution.is_some() {
        export::write_rename(&inventory.renames, paths.rename_output(), encoding)?;
    }

    let log = export::render_log(&result.report);
    export::write_atomic(&paths.log_file, &log)?;
    if let Some(report_file) = &paths.report_file {
        export::write_report_json(&result.report, report_file)?;
    }

    tracing::info!(
        "Wrote {} entries to {}",
        result.entries.len(),
        paths.vsdxmf_file
    );

    Ok(RunSummary {
        entries: result.entries.len(),
        labels: inventory.table.len(),
        seeds_applied,
        resolution,
        report: result.report,
        log,
    })
}

/// Seed the table from a phoneme-group file, replay earlier decisions and
/// resolve what collisions remain.
fn resolve_inventory(
    presamp_file: &str,
    rename_file: Option<&str>,
    encoding: TextEncoding,
    decisions: &mut dyn DecisionSource,
) -> ConvertResult<(PhonemeInventory, usize, ResolutionOutcome)> {
    let mut inventory = PhonemeInventory::new(presamp::load_file(presamp_file, encoding)?);

    let seeds = match rename_file {
        Some(path) => load_seeds(Path::new(path), encoding)?,
        None => Vec::new(),
    };
    let applied = inventory.apply_seeds(&seeds);

    let outcome = CollisionResolver::new(decisions).resolve(&mut inventory)?;
    log_aliases(&inventory);
    Ok((inventory, applied, outcome))
}

fn log_aliases(inventory: &PhonemeInventory) {
    let aliases = &inventory.aliases;
    if aliases.is_empty() {
        return;
    }
    tracing::info!(
        "Aliases: {} consonant symbols, {} vowel symbols",
        aliases.consonants.len(),
        aliases.vowels.len()
    );
    for (kind, map) in [("consonant", &aliases.consonants), ("vowel", &aliases.vowels)] {
        for (symbol, alternates) in map.iter() {
            let alternates: Vec<&str> = alternates.iter().map(String::as_str).collect();
            tracing::debug!("{} {} also answers to {}", kind, symbol, alternates.join(", "));
        }
    }
}

/// A rename file that does not exist yet is the first run, not an error.
fn load_seeds(path: &Path, encoding: TextEncoding) -> ConvertResult<Vec<RenameSeed>> {
    match rename::load_file(path, encoding) {
        Ok(seeds) => Ok(seeds),
        Err(ConfigError::NotFound(_)) => {
            tracing::info!("No earlier decisions at {}", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}
