//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Input and output file locations.
    #[serde(default)]
    pub paths: PathSettings,

    /// Label conversion options.
    #[serde(default)]
    pub conversion: ConversionSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Input and output file locations.
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Source sample listing (oto.ini).
    #[serde(default = "default_oto_file")]
    pub oto_file: String,

    /// Phoneme-group source (presamp.ini). When absent the built-in table is
    /// used and collision resolution is skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presamp_file: Option<String>,

    /// Rename decisions from an earlier run. Also where the rename record of
    /// this run is written; `rename.txt` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename_file: Option<String>,

    /// Target sample listing.
    #[serde(default = "default_vsdxmf_file")]
    pub vsdxmf_file: String,

    /// Phoneme dictionary written next to the target listing.
    #[serde(default = "default_lsd_file")]
    pub lsd_file: String,

    /// Text diagnostic log.
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Optional JSON diagnostic report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_file: Option<String>,
}

fn default_oto_file() -> String {
    "oto.ini".to_string()
}

fn default_vsdxmf_file() -> String {
    "voicebank.vsdxmf".to_string()
}

fn default_lsd_file() -> String {
    "voicebank.lsd".to_string()
}

fn default_log_file() -> String {
    "convert.log".to_string()
}

/// Fallback path for the rename record when `rename_file` is not set.
pub const DEFAULT_RENAME_OUTPUT: &str = "rename.txt";

impl PathSettings {
    /// Where the rename record of this run is written.
    pub fn rename_output(&self) -> &str {
        self.rename_file.as_deref().unwrap_or(DEFAULT_RENAME_OUTPUT)
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            oto_file: default_oto_file(),
            presamp_file: None,
            rename_file: None,
            vsdxmf_file: default_vsdxmf_file(),
            lsd_file: default_lsd_file(),
            log_file: default_log_file(),
            report_file: None,
        }
    }
}

/// Label conversion options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Marker that opens a leading-consonant label (`- ka`).
    #[serde(default = "default_begin_sign")]
    pub begin_sign: String,

    /// Marker that closes a trailing-vowel label (`a R`).
    #[serde(default = "default_ending_sign")]
    pub ending_sign: String,

    /// Extra sample-name suffixes stripped besides the pitch names.
    #[serde(default)]
    pub custom_suffixes: Vec<String>,

    /// Encoding of the oto, presamp and rename files (`utf-8`,
    /// `shift_jis`, ...). Written files other than the rename file are
    /// always UTF-8.
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_begin_sign() -> String {
    "-".to_string()
}

fn default_ending_sign() -> String {
    "R".to_string()
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            begin_sign: default_begin_sign(),
            ending_sign: default_ending_sign(),
            custom_suffixes: Vec::new(),
            encoding: default_encoding(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,
}

/// Configuration sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Conversion,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Conversion => "conversion",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment line written above the section in generated files.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "# Input and output files",
            ConfigSection::Conversion => "# Label markers, sample-name suffixes and input encoding",
            ConfigSection::Logging => "# Logging configuration",
        }
    }

    /// All sections in file order.
    pub fn all() -> [ConfigSection; 3] {
        [
            ConfigSection::Paths,
            ConfigSection::Conversion,
            ConfigSection::Logging,
        ]
    }
}
