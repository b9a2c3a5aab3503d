//! One-line key help for the stopwatch face.
//!
//! Renders a list of [`key::Binding`]s as `key desc • key desc`, skipping
//! disabled bindings and truncating with an ellipsis when a width limit is
//! set.
//!
//! ```rust
//! use bubbletea_stopwatch::help::Model;
//! use bubbletea_stopwatch::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let help = Model::new();
//! let toggle = Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start/pause");
//! let reset = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset");
//! let view = help.short_help_view(vec![&toggle, &reset]);
//! assert!(!view.is_empty());
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the truncation ellipsis.
    pub ellipsis: Style,
    /// Style of key labels.
    pub short_key: Style,
    /// Style of action descriptions.
    pub short_desc: Style,
    /// Style of the separator between items.
    pub short_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style,
            short_desc: desc_style,
            short_separator: sep_style,
        }
    }
}

/// Help line renderer.
#[derive(Debug, Clone)]
pub struct Model {
    /// Maximum visible width; `0` means unlimited.
    pub width: usize,
    /// Text placed between items.
    pub short_separator: String,
    /// Text appended when items are cut off.
    pub ellipsis: String,
    /// Rendering styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            width: 0,
            short_separator: " • ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help renderer with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the width limit.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short help for a key map.
    pub fn view<K: key::KeyMap>(&self, keymap: &K) -> String {
        self.short_help_view(keymap.short_help())
    }

    /// Renders bindings on a single line.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut builder = String::new();
        let mut total_width = 0;

        for kb in bindings.iter().filter(|kb| kb.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };

            let help = kb.help();
            let key_part = self.styles.short_key.clone().inline(true).render(&help.key);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&help.desc);
            let item = format!("{}{} {}", sep, key_part, desc_part);
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }

        builder
    }

    // Some(tail) when the next item does not fit; tail is the ellipsis if
    // that still fits, otherwise empty.
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }

        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) <= self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}
