//! Type-safe key bindings with help text.
//!
//! A [`Binding`] groups the key presses that trigger one action together
//! with the short label shown in the help line. Components expose their
//! bindings through the [`KeyMap`] trait so the help view can render them.
//!
//! ```rust
//! use bubbletea_stopwatch::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('s')])
//!     .with_help("space", "start/pause");
//! let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+c", "quit");
//!
//! assert_eq!(toggle.help().desc, "start/pause");
//! assert!(quit.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus required modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held. `NONE` accepts any modifiers.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key && msg.modifiers.contains(self.modifiers)
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"space"`.
    pub key: String,
    /// Action description, e.g. `"start/pause"`.
    pub desc: String,
}

/// Key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding reacts to keys and appears in help.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Components that publish their key bindings for help rendering.
pub trait KeyMap {
    /// Bindings for the one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_any_listed_key() {
        let binding = Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('s')]);
        assert!(binding.matches(&key(KeyCode::Char(' '))));
        assert!(binding.matches(&key(KeyCode::Char('s'))));
        assert!(!binding.matches(&key(KeyCode::Char('r'))));
    }

    #[test]
    fn test_modifier_required() {
        let binding = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(!binding.matches(&key(KeyCode::Char('c'))));
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_disabled_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]).with_help("enter", "press");
        binding.set_enabled(false);
        assert!(!binding.enabled());
        assert!(!binding.matches(&key(KeyCode::Enter)));

        binding.set_enabled(true);
        assert!(binding.matches(&key(KeyCode::Enter)));
    }

    #[test]
    fn test_empty_binding_disabled() {
        let binding = Binding::new(Vec::<KeyCode>::new());
        assert!(!binding.enabled());
    }

    #[test]
    fn test_help_text() {
        let binding = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset");
        assert_eq!(binding.help().key, "r");
        assert_eq!(binding.help().desc, "reset");
        assert_eq!(binding.keys().len(), 1);
    }
}
