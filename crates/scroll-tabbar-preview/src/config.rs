/*
[INPUT]:  Optional YAML configuration file
[OUTPUT]: Parsed and validated PreviewConfig
[POS]:    Configuration layer - preview titles, initial selection, style
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, ensure};
use ratatui::style::Color;
use scroll_tabbar::TabBarStyle;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the preview
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Tab labels, left to right
    #[serde(default = "default_titles")]
    pub titles: Vec<String>,
    /// Tab selected at startup
    #[serde(default = "default_initial_index")]
    pub initial_index: usize,
    /// Tab bar appearance
    #[serde(default = "default_style")]
    pub style: TabBarStyle,
    /// Fill behind the paged content
    #[serde(default)]
    pub page_background: Option<Color>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            titles: default_titles(),
            initial_index: default_initial_index(),
            style: default_style(),
            page_background: None,
        }
    }
}

fn default_titles() -> Vec<String> {
    (1..=10).map(|n| format!("Tab{n}")).collect()
}

fn default_initial_index() -> usize {
    2
}

fn default_style() -> TabBarStyle {
    TabBarStyle {
        selected_color: Color::Blue,
        ..TabBarStyle::default()
    }
}

impl PreviewConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.titles.is_empty(), "titles must not be empty");
        ensure!(
            self.initial_index < self.titles.len(),
            "initial_index {} out of range for {} titles",
            self.initial_index,
            self.titles.len()
        );
        self.style.validate().context("invalid style")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_preview() {
        let config = PreviewConfig::default();
        assert_eq!(config.titles.len(), 10);
        assert_eq!(config.titles[0], "Tab1");
        assert_eq!(config.titles[9], "Tab10");
        assert_eq!(config.initial_index, 2);
        assert_eq!(config.style.selected_color, Color::Blue);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
titles: [Home, News, Sports]
initial_index: 1
style:
  selected_color: red
  animation_ms: 200
page_background: gray
"#;
        let config: PreviewConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.titles, vec!["Home", "News", "Sports"]);
        assert_eq!(config.initial_index, 1);
        assert_eq!(config.style.selected_color, Color::Red);
        assert_eq!(config.style.animation_ms, 200);
        assert_eq!(config.style.leading_fraction, 0.1);
        assert_eq!(config.page_background, Some(Color::Gray));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let empty = PreviewConfig {
            titles: Vec::new(),
            ..PreviewConfig::default()
        };
        assert!(empty.validate().is_err());

        let out_of_range = PreviewConfig {
            initial_index: 10,
            ..PreviewConfig::default()
        };
        assert!(out_of_range.validate().is_err());

        let mut bad_style = PreviewConfig::default();
        bad_style.style.leading_fraction = -0.5;
        let err = bad_style.validate().unwrap_err();
        assert!(format!("{err:#}").contains("leading fraction"));
    }
}
