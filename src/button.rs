//! Focusable push button.
//!
//! Buttons only render; the face decides what pressing one does. The label
//! and icon can be swapped at any time, which is how the Start/Pause button
//! follows the stopwatch state.
//!
//! ```rust
//! use bubbletea_stopwatch::button::Model;
//! use bubbletea_stopwatch::Component;
//!
//! let mut button = Model::new("▶", "Start");
//! assert!(!button.focused());
//! button.focus();
//! assert!(button.focused());
//! assert!(button.view().contains("Start"));
//! ```

use crate::Component;
use bubbletea_rs::Cmd;
use lipgloss_extras::prelude::*;

/// A button with an icon and a label.
#[derive(Debug, Clone)]
pub struct Model {
    icon: String,
    label: String,
    focused: bool,
    /// Style used while blurred.
    pub style: Style,
    /// Style used while focused.
    pub focused_style: Style,
}

impl Model {
    /// Creates an unstyled, blurred button.
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            focused: false,
            style: Style::new(),
            focused_style: Style::new().bold(true),
        }
    }

    /// Sets both styles.
    pub fn with_styles(mut self, style: Style, focused_style: Style) -> Self {
        self.style = style;
        self.focused_style = focused_style;
        self
    }

    /// Current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current icon.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Replaces icon and label.
    pub fn set_content(&mut self, icon: impl Into<String>, label: impl Into<String>) {
        self.icon = icon.into();
        self.label = label.into();
    }

    /// Renders the button with the style matching its focus.
    pub fn view(&self) -> String {
        let content = format!("{} {}", self.icon, self.label);
        if self.focused {
            self.focused_style.render(&content)
        } else {
            self.style.render(&content)
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_focus_cycle() {
        let mut button = Model::new("↺", "Reset");
        assert!(!button.focused());
        assert!(button.focus().is_none());
        assert!(button.focused());
        button.blur();
        assert!(!button.focused());
    }

    #[test]
    fn test_set_content() {
        let mut button = Model::new("▶", "Start");
        button.set_content("⏸", "Pause");
        assert_eq!(button.icon(), "⏸");
        assert_eq!(button.label(), "Pause");
        assert_eq!(plain(&button.view()), "⏸ Pause");
    }

    #[test]
    fn test_view_uses_focus_style() {
        let mut button = Model::new("▶", "Start")
            .with_styles(Style::new(), Style::new().padding(0, 1, 0, 1));
        let blurred = plain(&button.view());
        button.focus();
        let focused = plain(&button.view());
        assert_eq!(blurred, "▶ Start");
        assert_eq!(focused.trim(), "▶ Start");
        assert_ne!(blurred, focused);
    }
}
