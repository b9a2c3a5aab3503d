//! Logger setup.
//!
//! The library only talks to the `log` facade. Binaries call
//! [`init_logging`] once; since the terminal is owned by the UI, records go
//! to a file, and without a file logging stays off.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "bubbletea_stopwatch=debug"). When unset, `RUST_LOG` is used, then
/// `info`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// File that receives log records; `None` disables logging.
    pub file: Option<PathBuf>,
    /// Filter directives.
    pub env_filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let Some(path) = config.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::LogFile {
            path: path.clone(),
            source,
        })?;

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder
            .write_style(env_logger::WriteStyle::Never)
            .target(env_logger::Target::Pipe(Box::new(file)));

        // Another logger may already be installed by an embedding program.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized to {}", path.display());
        }
    });

    Ok(())
}
