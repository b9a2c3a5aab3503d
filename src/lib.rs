#![warn(missing_docs)]

//! # bubbletea-stopwatch
//!
//! A digital stopwatch for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs): a clock face of
//! digit tiles with Start/Pause and Reset controls.
//!
//! ## Overview
//!
//! Each component follows the Elm Architecture pattern with `init()`,
//! `update()` and `view()` methods:
//!
//! - [`stopwatch`]: the timer state machine (stopped/running, tick
//!   accumulation, reset, show-hours latch)
//! - [`clock`]: pure decomposition of elapsed milliseconds into digit groups
//! - [`face`]: the rendered clock face with buttons and key handling
//! - [`button`], [`help`], [`key`]: the building blocks of the face
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_stopwatch::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     face: StopwatchFace,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let face = StopwatchFace::new(&Options::default());
//!         let cmd = face.init();
//!         (Self { face }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.face.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.face.view()
//!     }
//! }
//! ```

pub mod button;
pub mod clock;
pub mod error;
pub mod face;
pub mod help;
pub mod key;
pub mod logging;
pub mod options;
pub mod stopwatch;

use bubbletea_rs::Cmd;

/// Components that can hold keyboard focus.
///
/// ```rust
/// use bubbletea_stopwatch::prelude::*;
///
/// let mut button = Button::new("↺", "Reset");
/// button.focus();
/// assert!(button.focused());
/// button.blur();
/// assert!(!button.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use button::Model as Button;
pub use clock::{DigitGroup, Reading, Unit};
pub use error::Error;
pub use face::Model as StopwatchFace;
pub use help::Model as HelpModel;
pub use key::{Binding, KeyMap, KeyPress};
pub use options::Options;
pub use stopwatch::{
    new as stopwatch_new, new_with_interval as stopwatch_new_with_interval, Model as Stopwatch,
    ResetMsg as StopwatchResetMsg, StartStopMsg as StopwatchStartStopMsg,
    TickMsg as StopwatchTickMsg,
};

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::button::Model as Button;
    pub use crate::clock::{DigitGroup, Reading, Unit};
    pub use crate::face::Model as StopwatchFace;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::options::Options;
    pub use crate::stopwatch::{
        new as stopwatch_new, Model as Stopwatch, ResetMsg as StopwatchResetMsg,
        StartStopMsg as StopwatchStartStopMsg, TickMsg as StopwatchTickMsg,
    };
    pub use crate::Component;
}
