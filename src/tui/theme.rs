use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub placeholder: Color,
    /// Header bar background
    pub header: Color,
    /// Add button and edit affordance
    pub accent: Color,
    /// Delete button
    pub danger: Color,
    /// Save button in the edit dialog
    pub save: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0xD3, 0xD3, 0xD3),
            placeholder: Color::Rgb(0x80, 0x80, 0x80),
            header: Color::Rgb(0x33, 0x00, 0x74),
            accent: Color::Rgb(0x66, 0x00, 0xE7),
            danger: Color::Rgb(0xFF, 0x00, 0x00),
            save: Color::Rgb(0x21, 0x96, 0xF3),
            selection_bg: Color::Rgb(0xEA, 0xDD, 0xFF),
        }
    }
}

/// Parse a hex color string like "#330074" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "dim" => theme.dim = color,
                "placeholder" => theme.placeholder = color,
                "header" => theme.header = color,
                "accent" => theme.accent = color,
                "danger" => theme.danger = color,
                "save" => theme.save = color,
                "selection_bg" => theme.selection_bg = color,
                _ => tracing::warn!(slot = %key, "ignoring unknown color slot"),
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#330074"),
            Some(Color::Rgb(0x33, 0x00, 0x74))
        );
        assert_eq!(parse_hex_color("330074"), None); // missing #
        assert_eq!(parse_hex_color("#3300"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("header".into(), "#000000".into());
        ui.colors.insert("danger".into(), "not a color".into());
        ui.colors.insert("nonsense".into(), "#112233".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.header, Color::Rgb(0, 0, 0));
        // Invalid and unknown entries leave defaults alone
        assert_eq!(theme.danger, Theme::default().danger);
        assert_eq!(theme.accent, Color::Rgb(0x66, 0x00, 0xE7));
    }
}
