use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_dim: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub prompt: String,
    pub command: String,
    pub output: String,
    pub info: String,
    pub error: String,
    pub success: String,
    pub badge_easy: String,
    pub badge_medium: String,
    pub badge_hard: String,
    pub cursor_bg: String,
    pub cursor_fg: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("shellquiz")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    #[allow(dead_code)] // Used by tests
    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("terminal-default").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#0c0c0c".to_string(),
            fg: "#cccccc".to_string(),
            text_dim: "#666666".to_string(),
            accent: "#4ec9b0".to_string(),
            accent_dim: "#2d4f47".to_string(),
            border: "#3a3a3a".to_string(),
            border_focused: "#4ec9b0".to_string(),
            header_bg: "#1f1f1f".to_string(),
            header_fg: "#e0e0e0".to_string(),
            prompt: "#4ec9b0".to_string(),
            command: "#dcdcaa".to_string(),
            output: "#cccccc".to_string(),
            info: "#569cd6".to_string(),
            error: "#f44747".to_string(),
            success: "#6a9955".to_string(),
            badge_easy: "#6a9955".to_string(),
            badge_medium: "#d7ba7d".to_string(),
            badge_hard: "#f44747".to_string(),
            cursor_bg: "#cccccc".to_string(),
            cursor_fg: "#0c0c0c".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_dim(&self) -> Color { Self::parse_color(&self.text_dim) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    #[allow(dead_code)]
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn prompt(&self) -> Color { Self::parse_color(&self.prompt) }
    pub fn command(&self) -> Color { Self::parse_color(&self.command) }
    pub fn output(&self) -> Color { Self::parse_color(&self.output) }
    pub fn info(&self) -> Color { Self::parse_color(&self.info) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
    pub fn cursor_bg(&self) -> Color { Self::parse_color(&self.cursor_bg) }
    pub fn cursor_fg(&self) -> Color { Self::parse_color(&self.cursor_fg) }

    /// Badge color for a difficulty tag; unknown tags render dim.
    pub fn badge(&self, difficulty: &str) -> Color {
        match difficulty {
            "easy" => Self::parse_color(&self.badge_easy),
            "medium" => Self::parse_color(&self.badge_medium),
            "hard" => Self::parse_color(&self.badge_hard),
            _ => self.text_dim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"terminal-default".to_string()));
        for name in names {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to load");
        }
    }

    #[test]
    fn parse_color_handles_hex_and_garbage() {
        assert_eq!(ThemeColors::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(ThemeColors::parse_color("not-a-color"), Color::White);
    }

    #[test]
    fn badge_falls_back_to_dim_for_unknown_tag() {
        let colors = ThemeColors::default();
        assert_eq!(colors.badge("unknown"), colors.text_dim());
        assert_ne!(colors.badge("easy"), colors.badge("hard"));
    }
}
