//! # Palette
//!
//! The fixed digit-to-color table and the two pencil color slots.
//!
//! The table is built once at startup (standard colors, optionally
//! overridden by the config file) and never mutated afterwards. Nothing
//! depends on iteration order, so a plain `HashMap` suffices.

use std::collections::HashMap;

use ratatui::style::{Color, Style};

/// The digit keys that select colors. Any other key is not a color
/// assignment.
pub const COLOR_KEYS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Both color slots start out as the entry for this key.
pub const DEFAULT_COLOR_KEY: char = '1';

/// The screen's base style. Erased cells revert to this.
pub fn default_style() -> Style {
    Style::new().bg(Color::Reset).fg(Color::White)
}

/// Which of the two color registers digit presses currently modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Secondary,
}

impl Slot {
    /// The other slot.
    pub fn toggled(self) -> Self {
        match self {
            Slot::Primary => Slot::Secondary,
            Slot::Secondary => Slot::Primary,
        }
    }

    /// Lowercase name for the status line.
    pub fn label(self) -> &'static str {
        match self {
            Slot::Primary => "primary",
            Slot::Secondary => "secondary",
        }
    }
}

/// Immutable mapping from digit keys to colors.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<char, Color>,
}

impl Palette {
    /// The standard eight-entry table.
    pub fn standard() -> Self {
        let colors = HashMap::from([
            ('1', Color::White),
            ('2', Color::Rgb(26, 28, 44)),
            ('3', Color::Red),
            ('4', Color::Green),
            ('5', Color::Yellow),
            ('6', Color::Blue),
            ('7', Color::Magenta),
            ('8', Color::Rgb(165, 42, 42)),
        ]);
        Self { colors }
    }

    /// Look up the color bound to a digit key.
    pub fn color_for(&self, key: char) -> Option<Color> {
        self.colors.get(&key).copied()
    }

    /// The color both slots start with.
    pub fn default_color(&self) -> Color {
        self.color_for(DEFAULT_COLOR_KEY).unwrap_or(Color::White)
    }

    /// Rebind one of the eight keys. Returns false (and changes nothing)
    /// for keys outside the table. Used only while resolving config.
    pub fn override_key(&mut self, key: char, color: Color) -> bool {
        if !self.colors.contains_key(&key) {
            return false;
        }
        self.colors.insert(key, color);
        true
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_all_color_keys() {
        let palette = Palette::standard();
        for key in COLOR_KEYS {
            assert!(palette.color_for(key).is_some(), "missing entry for {key}");
        }
    }

    #[test]
    fn test_standard_table_values() {
        let palette = Palette::standard();
        assert_eq!(palette.color_for('1'), Some(Color::White));
        assert_eq!(palette.color_for('3'), Some(Color::Red));
        assert_eq!(palette.color_for('5'), Some(Color::Yellow));
        assert_eq!(palette.color_for('8'), Some(Color::Rgb(165, 42, 42)));
    }

    #[test]
    fn test_non_color_keys_miss() {
        let palette = Palette::standard();
        assert_eq!(palette.color_for('9'), None);
        assert_eq!(palette.color_for('0'), None);
        assert_eq!(palette.color_for('a'), None);
    }

    #[test]
    fn test_default_color_is_entry_one() {
        let palette = Palette::standard();
        assert_eq!(palette.default_color(), Color::White);
    }

    #[test]
    fn test_override_key_rebinds_table_entries_only() {
        let mut palette = Palette::standard();
        assert!(palette.override_key('3', Color::Rgb(255, 0, 0)));
        assert_eq!(palette.color_for('3'), Some(Color::Rgb(255, 0, 0)));

        assert!(!palette.override_key('z', Color::Cyan));
        assert_eq!(palette.color_for('z'), None);
    }

    #[test]
    fn test_slot_toggle_round_trip() {
        assert_eq!(Slot::Primary.toggled(), Slot::Secondary);
        assert_eq!(Slot::Primary.toggled().toggled(), Slot::Primary);
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(Slot::Primary.label(), "primary");
        assert_eq!(Slot::Secondary.label(), "secondary");
    }
}
