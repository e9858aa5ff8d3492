use dashboard_shell::layout::{ShellState, DEFAULT_DOCS_PREFIX};

use crate::config::AppConfig;
use crate::ui::theme::ThemeTokens;

/// Identity shown in the navigation drawer. Opaque to the shell.
#[derive(Clone, Debug)]
pub struct UserProfile {
    pub name: String,
    pub initials: String,
    pub team: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "On-call operator".to_string(),
            initials: "OP".to_string(),
            team: Some("Platform".to_string()),
        }
    }
}

/// Latest diagnostics sample; `None` until a collector has produced one.
#[derive(Clone, Debug)]
pub struct DiagnosticsProbe {
    pub uptime_hours: f64,
    pub queue_depth: usize,
}

/// Global application state. The application is its own router: `route`
/// holds the current path, and the shell only reads it.
pub struct AppState {
    pub config: AppConfig,
    pub route: String,
    pub theme: ThemeTokens,
    /// Set when the theme tokens changed and the egui visuals must be
    /// re-applied on the next frame.
    pub theme_dirty: bool,
    pub shell: ShellState,
    pub search_query: String,
    pub user: UserProfile,
    pub diagnostics_probe: Option<DiagnosticsProbe>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let theme = ThemeTokens::from_preset(config.theme);
        Self {
            config,
            route: "/".to_string(),
            theme,
            theme_dirty: false,
            shell: ShellState::new(),
            search_query: String::new(),
            user: UserProfile::default(),
            diagnostics_probe: None,
        }
    }

    pub fn docs_prefix(&self) -> &str {
        self.config
            .docs_prefix
            .as_deref()
            .unwrap_or(DEFAULT_DOCS_PREFIX)
    }

    pub fn navigate(&mut self, route: &str) {
        if self.route != route {
            log::debug!("navigating to {route}");
            self.route = route.to_string();
        }
    }

    /// Flips light/dark and rebuilds the tokens. Persisting the preference
    /// is the caller's concern.
    pub fn toggle_theme(&mut self) {
        let preset = self.theme.preset.flipped();
        self.theme = ThemeTokens::from_preset(preset);
        self.theme_dirty = true;
        self.config.theme = preset;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemePreset;

    #[test]
    fn navigate_updates_route() {
        let mut state = AppState::default();
        assert_eq!(state.route, "/");
        state.navigate("/reports");
        assert_eq!(state.route, "/reports");
        state.navigate("/reports");
        assert_eq!(state.route, "/reports");
    }

    #[test]
    fn docs_prefix_override() {
        let mut state = AppState::default();
        assert_eq!(state.docs_prefix(), "/docs");
        state.config.docs_prefix = Some("/manual".to_string());
        assert_eq!(state.docs_prefix(), "/manual");
    }

    #[test]
    fn theme_toggle_flips_preset_and_marks_dirty() {
        let mut state = AppState::default();
        assert_eq!(state.theme.preset, ThemePreset::Dark);
        state.toggle_theme();
        assert_eq!(state.theme.preset, ThemePreset::Light);
        assert!(state.theme_dirty);
    }
}
