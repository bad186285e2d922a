//! Diagnostics output for conversion runs.
//!
//! Library code only emits `tracing` events: `info!` per phase, `debug!` per
//! classification or alias decision, `warn!` for skipped input. The binary
//! installs the subscriber once with [`init_tracing`].

mod types;

pub use types::LogLevel;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Targets that follow the configured level. Everything else logs warnings.
const CONVERTER_TARGETS: [&str; 2] = ["vbc_core", "vbc"];

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` replaces the configured level entirely when set. Stdout is
/// left to the report printed at the end of a run.
pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Capture warnings in test output.
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Filter directives for `level` when `RUST_LOG` is unset.
fn default_directives(level: LogLevel) -> String {
    let mut directives = String::from("warn");
    for target in CONVERTER_TARGETS {
        directives.push_str(&format!(",{}={}", target, level));
    }
    directives
}
