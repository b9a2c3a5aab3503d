//! The stopwatch clock face.
//!
//! Combines a [`stopwatch::Model`] with the digit display, the Start/Pause
//! and Reset buttons and a help line. Every digit sits in its own rounded
//! tile; digit groups are split by a two-dot separator and the hours group
//! only appears once the stopwatch has run for an hour.
//!
//! # Usage
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_stopwatch::face;
//! use bubbletea_stopwatch::options::Options;
//!
//! struct App {
//!     face: face::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let face = face::Model::new(&Options::default().with_start_running(true));
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
//!
//! # Keys
//!
//! | Keys | Action |
//! |------|--------|
//! | `space`, `s` | Start or pause |
//! | `r` | Reset |
//! | `tab`, `shift+tab`, `←`, `→` | Move button focus |
//! | `enter` | Press the focused button |
//! | `q`, `esc`, `ctrl+c` | Quit |

use crate::button;
use crate::help;
use crate::key::{self, Binding};
use crate::options::Options;
use crate::stopwatch;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use log::debug;

const PLAY_ICON: &str = "▶";
const PAUSE_ICON: &str = "⏸";
const RESET_ICON: &str = "↺";

// Columns taken by the frame around the help line: border plus padding.
const FRAME_CHROME_WIDTH: usize = 2 + 4 + 4;

/// Key bindings of the face.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Start or pause.
    pub toggle: Binding,
    /// Reset to zero.
    pub reset: Binding,
    /// Focus the next button.
    pub next_button: Binding,
    /// Focus the previous button.
    pub prev_button: Binding,
    /// Press the focused button.
    pub press: Binding,
    /// Leave the program.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('s')])
                .with_help("space", "start/pause"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            next_button: Binding::new(vec![KeyCode::Tab, KeyCode::Right])
                .with_help("tab", "next button"),
            prev_button: Binding::new(vec![KeyCode::BackTab, KeyCode::Left])
                .with_help("shift+tab", "prev button"),
            press: Binding::new(vec![KeyCode::Enter]).with_help("enter", "press"),
            quit: Binding::new(vec![
                key::KeyPress::from(KeyCode::Char('q')),
                key::KeyPress::from(KeyCode::Esc),
                key::KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("q", "quit"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle, &self.reset, &self.next_button, &self.press, &self.quit]
    }
}

/// Styles of the clock face.
#[derive(Debug, Clone)]
pub struct Styles {
    /// A single digit tile.
    pub digit: Style,
    /// The dots between digit groups.
    pub separator: Style,
    /// Start/Pause button while stopped.
    pub start_button: Style,
    /// Start/Pause button while running.
    pub pause_button: Style,
    /// Reset button.
    pub reset_button: Style,
    /// Card around the whole face.
    pub frame: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let button = Style::new()
            .foreground(Color::from("#F9FAFB"))
            .border_style(lipgloss::rounded_border())
            .border_top(true)
            .border_bottom(true)
            .border_left(true)
            .border_right(true)
            .padding(0, 3, 0, 3);

        Self {
            digit: Style::new()
                .border_style(lipgloss::rounded_border())
                .border_top(true)
                .border_bottom(true)
                .border_left(true)
                .border_right(true)
                .border_foreground(Color::from("#374151"))
                .foreground(Color::from("#F3F4F6"))
                .bold(true)
                .padding(0, 1, 0, 1),
            separator: Style::new().foreground(Color::from("#6366F1")),
            start_button: button
                .clone()
                .border_foreground(Color::from("#6366F1"))
                .background(Color::from("#6366F1")),
            pause_button: button
                .clone()
                .border_foreground(Color::from("#EF4444"))
                .background(Color::from("#EF4444")),
            // Outlined: border only, terminal background shows through.
            reset_button: button
                .foreground(Color::from("#D1D5DB"))
                .border_foreground(Color::from("#4B5563")),
            frame: Style::new()
                .border_style(lipgloss::rounded_border())
                .border_top(true)
                .border_bottom(true)
                .border_left(true)
                .border_right(true)
                .border_foreground(Color::from("#4B5563"))
                .padding(1, 4, 1, 4),
        }
    }
}

fn focused(style: &Style) -> Style {
    style.clone().bold(true).underline(true)
}

/// Which button holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The Start/Pause button.
    StartStop,
    /// The Reset button.
    Reset,
}

/// The full stopwatch face.
#[derive(Debug, Clone)]
pub struct Model {
    /// Timer state.
    pub stopwatch: stopwatch::Model,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Help line renderer.
    pub help: help::Model,
    /// Whether to render the help line.
    pub show_help: bool,
    styles: Styles,
    start_stop: button::Model,
    reset: button::Model,
    focus: Focus,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Model {
    /// Creates a face for the given options, with the Start/Pause button
    /// focused.
    pub fn new(options: &Options) -> Self {
        let mut model = Self {
            stopwatch: stopwatch::Model::from_options(options),
            keymap: KeyMap::default(),
            help: help::Model::new(),
            show_help: options.show_help,
            styles: Styles::default(),
            start_stop: button::Model::new(PLAY_ICON, "Start"),
            reset: button::Model::new(RESET_ICON, "Reset"),
            focus: Focus::StartStop,
        };
        model.start_stop.focus();
        model.sync_buttons();
        model
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self.sync_buttons();
        self
    }

    /// Current styles.
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Which button has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The Start/Pause button.
    pub fn start_stop_button(&self) -> &button::Model {
        &self.start_stop
    }

    /// The Reset button.
    pub fn reset_button(&self) -> &button::Model {
        &self.reset
    }

    /// The first tick when the stopwatch starts running.
    pub fn init(&self) -> Option<Cmd> {
        self.stopwatch.init()
    }

    /// Handles key presses and forwards everything else to the stopwatch.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(window_msg) = msg.downcast_ref::<bubbletea_rs::WindowSizeMsg>() {
            self.help.width = (window_msg.width as usize).saturating_sub(FRAME_CHROME_WIDTH);
            return None;
        }

        let cmd = self.stopwatch.update(msg);
        self.sync_buttons();
        cmd
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key_msg) {
            debug!("quit requested at {}ms", self.stopwatch.elapsed_ms());
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.toggle.matches(key_msg) {
            return Some(self.stopwatch.toggle());
        }
        if self.keymap.reset.matches(key_msg) {
            return Some(self.stopwatch.reset());
        }
        if self.keymap.next_button.matches(key_msg) || self.keymap.prev_button.matches(key_msg) {
            // Two buttons: next and previous land on the same one.
            self.set_focus(match self.focus {
                Focus::StartStop => Focus::Reset,
                Focus::Reset => Focus::StartStop,
            });
            return None;
        }
        if self.keymap.press.matches(key_msg) {
            return Some(match self.focus {
                Focus::StartStop => self.stopwatch.toggle(),
                Focus::Reset => self.stopwatch.reset(),
            });
        }
        None
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::StartStop => {
                self.reset.blur();
                self.start_stop.focus();
            }
            Focus::Reset => {
                self.start_stop.blur();
                self.reset.focus();
            }
        }
    }

    fn sync_buttons(&mut self) {
        let base = if self.stopwatch.running() {
            self.start_stop.set_content(PAUSE_ICON, "Pause");
            self.styles.pause_button.clone()
        } else {
            self.start_stop.set_content(PLAY_ICON, "Start");
            self.styles.start_button.clone()
        };
        self.start_stop.focused_style = focused(&base);
        self.start_stop.style = base;

        let base = self.styles.reset_button.clone();
        self.reset.focused_style = focused(&base);
        self.reset.style = base;
    }

    /// Renders the digit tiles and separators only.
    pub fn clock_view(&self) -> String {
        let reading = self.stopwatch.reading();
        let dot = self.styles.separator.render("●");
        let separator = format!("{}\n \n{}", dot, dot);

        let groups: Vec<String> = reading
            .groups(self.stopwatch.show_hours())
            .iter()
            .map(|group| {
                let tiles: Vec<String> = group
                    .digits()
                    .iter()
                    .map(|d| self.styles.digit.render(&d.to_string()))
                    .collect();
                let parts: Vec<&str> = tiles.iter().map(String::as_str).collect();
                lipgloss::join_horizontal(lipgloss::TOP, &parts)
            })
            .collect();

        let mut parts: Vec<&str> = Vec::with_capacity(groups.len() * 2);
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(group.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    /// Renders the Start/Pause and Reset buttons side by side.
    pub fn buttons_view(&self) -> String {
        let start_stop = self.start_stop.view();
        let reset = self.reset.view();
        lipgloss::join_horizontal(lipgloss::TOP, &[start_stop.as_str(), "  ", reset.as_str()])
    }

    /// Renders the whole face.
    pub fn view(&self) -> String {
        let clock = self.clock_view();
        let buttons = self.buttons_view();
        let help = if self.show_help {
            self.help.view(&self.keymap)
        } else {
            String::new()
        };

        let mut rows = vec![clock.as_str(), "", buttons.as_str()];
        if self.show_help {
            rows.push("");
            rows.push(help.as_str());
        }

        let body = lipgloss::join_vertical(lipgloss::CENTER, &rows);
        self.styles.frame.render(&body)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::default();
        let cmd = model.init();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
