/*
[INPUT]:  YAML/serde style values or builder overrides
[OUTPUT]: TabBarStyle presentation settings and ConfigError validation
[POS]:    Configuration layer - tab bar appearance and motion
[UPDATE]: When adding new style options
*/

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::animation::Easing;

/// Invalid tab bar style values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("leading fraction must be within [0, 1], got {0}")]
    LeadingFractionOutOfRange(f32),

    #[error("animation duration must be greater than zero")]
    ZeroAnimationDuration,

    #[error("indicator symbol must be exactly one cell wide, got {0:?}")]
    IndicatorSymbolWidth(String),
}

/// Presentation and motion settings for the tab bar
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TabBarStyle {
    /// Label and underline color of the selected tab
    pub selected_color: Color,
    /// Label color of every other tab
    pub unselected_color: Color,
    /// Fill behind the whole strip
    pub background: Option<Color>,
    /// Blank cells on each side of a label
    pub horizontal_padding: u16,
    /// Blank cells between neighbouring tabs
    pub spacing: u16,
    /// Blank rows above the labels
    pub top_padding: u16,
    /// Symbol repeated across the underline
    pub indicator_symbol: String,
    /// Where the selected tab lands after auto-scroll, as a fraction of the viewport width
    pub leading_fraction: f32,
    /// Length of the underline and scroll animations
    pub animation_ms: u64,
    pub easing: Easing,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            selected_color: Color::Gray,
            unselected_color: Color::Gray,
            background: None,
            horizontal_padding: 2,
            spacing: 1,
            top_padding: 0,
            indicator_symbol: "━".to_string(),
            leading_fraction: 0.1,
            animation_ms: 350,
            easing: Easing::EaseInOut,
        }
    }
}

impl TabBarStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.leading_fraction) {
            return Err(ConfigError::LeadingFractionOutOfRange(self.leading_fraction));
        }
        if self.animation_ms == 0 {
            return Err(ConfigError::ZeroAnimationDuration);
        }
        if self.indicator_symbol.width() != 1 {
            return Err(ConfigError::IndicatorSymbolWidth(self.indicator_symbol.clone()));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Label style; emphasis never animates.
    pub fn label_style(&self, selected: bool) -> Style {
        let style = self.base_style();
        if selected {
            style.fg(self.selected_color).add_modifier(Modifier::BOLD)
        } else {
            style.fg(self.unselected_color)
        }
    }

    pub fn indicator_style(&self) -> Style {
        self.base_style().fg(self.selected_color)
    }

    pub(crate) fn base_style(&self) -> Style {
        match self.background {
            Some(color) => Style::default().bg(color),
            None => Style::default(),
        }
    }

    /// Rows occupied by the strip: padding, labels, underline.
    pub fn height(&self) -> u16 {
        self.top_padding.saturating_add(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        let style = TabBarStyle::default();
        assert_eq!(style.validate(), Ok(()));
        assert_eq!(style.selected_color, Color::Gray);
        assert_eq!(style.animation_duration(), Duration::from_millis(350));
        assert_eq!(style.height(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut style = TabBarStyle {
            leading_fraction: 1.5,
            ..TabBarStyle::default()
        };
        assert_eq!(
            style.validate(),
            Err(ConfigError::LeadingFractionOutOfRange(1.5))
        );

        style.leading_fraction = 0.1;
        style.animation_ms = 0;
        assert_eq!(style.validate(), Err(ConfigError::ZeroAnimationDuration));

        style.animation_ms = 200;
        style.indicator_symbol = "==".to_string();
        assert!(matches!(
            style.validate(),
            Err(ConfigError::IndicatorSymbolWidth(_))
        ));
    }

    #[test]
    fn test_label_styles() {
        let style = TabBarStyle {
            selected_color: Color::Blue,
            ..TabBarStyle::default()
        };
        let selected = style.label_style(true);
        assert_eq!(selected.fg, Some(Color::Blue));
        assert!(selected.add_modifier.contains(Modifier::BOLD));

        let normal = style.label_style(false);
        assert_eq!(normal.fg, Some(Color::Gray));
        assert!(!normal.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "selected_color: blue\nleading_fraction: 0.25\neasing: linear\n";
        let style: TabBarStyle = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(style.selected_color, Color::Blue);
        assert_eq!(style.leading_fraction, 0.25);
        assert_eq!(style.easing, Easing::Linear);
        assert_eq!(style.horizontal_padding, 2);
        assert_eq!(style.indicator_symbol, "━");
    }
}
