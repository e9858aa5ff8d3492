use eframe::egui::{self, Color32, Stroke};
use serde::{Deserialize, Serialize};

use dashboard_shell::layout::{ShellTheme, ThemeMode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

impl ThemePreset {
    pub fn flipped(self) -> Self {
        match self {
            ThemePreset::Dark => ThemePreset::Light,
            ThemePreset::Light => ThemePreset::Dark,
        }
    }

    pub fn mode(self) -> ThemeMode {
        match self {
            ThemePreset::Dark => ThemeMode::Dark,
            ThemePreset::Light => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemePalette {
    pub dark_mode: bool,
    pub root_background: Color32,
    pub panel_background: Color32,
    pub header_background: Color32,
    pub hover_background: Color32,
    pub backdrop: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_weak: Color32,
    pub primary: Color32,
    pub danger: Color32,
}

impl ThemePalette {
    pub fn dark() -> Self {
        Self {
            dark_mode: true,
            root_background: Color32::from_rgb(24, 26, 30),
            panel_background: Color32::from_rgb(32, 34, 38),
            header_background: Color32::from_rgb(40, 42, 48),
            hover_background: Color32::from_rgb(48, 86, 128),
            backdrop: Color32::from_black_alpha(110),
            border: Color32::from_rgba_unmultiplied(70, 72, 78, 160),
            text_primary: Color32::from_rgb(232, 233, 239),
            text_weak: Color32::from_rgb(172, 176, 184),
            primary: Color32::from_rgb(65, 148, 245),
            danger: Color32::from_rgb(222, 104, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            dark_mode: false,
            root_background: Color32::from_rgb(244, 245, 247),
            panel_background: Color32::from_rgb(252, 252, 253),
            header_background: Color32::from_rgb(233, 236, 241),
            hover_background: Color32::from_rgb(188, 210, 238),
            backdrop: Color32::from_black_alpha(70),
            border: Color32::from_rgba_unmultiplied(120, 124, 132, 140),
            text_primary: Color32::from_rgb(32, 36, 44),
            text_weak: Color32::from_rgb(96, 102, 112),
            primary: Color32::from_rgb(35, 110, 205),
            danger: Color32::from_rgb(176, 52, 62),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemeTokens {
    pub preset: ThemePreset,
    pub palette: ThemePalette,
}

impl ThemeTokens {
    pub fn from_preset(preset: ThemePreset) -> Self {
        let palette = match preset {
            ThemePreset::Dark => ThemePalette::dark(),
            ThemePreset::Light => ThemePalette::light(),
        };
        Self { preset, palette }
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::from_preset(ThemePreset::default())
    }
}

/// Applies the token set to the egui context.
pub fn apply(ctx: &egui::Context, tokens: &ThemeTokens) {
    let palette = &tokens.palette;
    let mut visuals = if palette.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = palette.panel_background;
    visuals.window_fill = palette.panel_background;
    visuals.extreme_bg_color = palette.root_background;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.selection.bg_fill = palette.hover_background;
    ctx.set_visuals(visuals);
}

/// Bridges the application tokens into the style set the shell components
/// consume.
pub fn shell_theme(tokens: &ThemeTokens) -> ShellTheme {
    let palette = &tokens.palette;
    ShellTheme {
        mode: tokens.preset.mode(),
        root_background: palette.root_background,
        surface_background: palette.panel_background,
        header_background: palette.header_background,
        backdrop: palette.backdrop,
        border: palette.border,
        text_primary: palette.text_primary,
        text_muted: palette.text_weak,
        accent: palette.primary,
        accent_soft: palette.hover_background,
        danger: palette.danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_flip_is_involutive() {
        assert_eq!(ThemePreset::Dark.flipped(), ThemePreset::Light);
        assert_eq!(ThemePreset::Dark.flipped().flipped(), ThemePreset::Dark);
    }

    #[test]
    fn bridge_preserves_mode() {
        let dark = ThemeTokens::from_preset(ThemePreset::Dark);
        assert_eq!(shell_theme(&dark).mode, ThemeMode::Dark);
        let light = ThemeTokens::from_preset(ThemePreset::Light);
        assert_eq!(shell_theme(&light).mode, ThemeMode::Light);
        assert_ne!(
            shell_theme(&dark).root_background,
            shell_theme(&light).root_background
        );
    }

    #[test]
    fn preset_serde_uses_lowercase() {
        let json = serde_json::to_string(&ThemePreset::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let preset: ThemePreset = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(preset, ThemePreset::Dark);
    }
}
