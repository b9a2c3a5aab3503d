//! Configuration for the stopwatch face.
//!
//! Options are plain values built with `with_*` methods, the same way the
//! components themselves are configured.
//!
//! ```rust
//! use bubbletea_stopwatch::options::Options;
//! use std::time::Duration;
//!
//! let options = Options::default()
//!     .with_interval(Duration::from_millis(50))
//!     .with_start_running(true);
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{Error, Result};
use std::time::Duration;

/// Nominal tick interval: one hundredth of a second.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

/// Settings shared by the stopwatch model and the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Time added to the elapsed counter on every tick.
    pub interval: Duration,
    /// Whether the stopwatch runs as soon as it is initialised.
    pub start_running: bool,
    /// Whether the key help line is rendered under the buttons.
    pub show_help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            start_running: false,
            show_help: true,
        }
    }
}

impl Options {
    /// Sets the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets whether the stopwatch starts running on init.
    pub fn with_start_running(mut self, start_running: bool) -> Self {
        self.start_running = start_running;
        self
    }

    /// Sets whether the help line is shown.
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Checks that the options describe a usable stopwatch.
    ///
    /// Ticks advance the counter in whole milliseconds, so the interval must
    /// be at least 1ms.
    pub fn validate(&self) -> Result<()> {
        if self.interval < Duration::from_millis(1) {
            return Err(Error::InvalidInterval(self.interval));
        }
        Ok(())
    }
}
