pub mod nav;
pub mod pages;
pub mod theme;

use eframe::egui;

use dashboard_shell::components::{
    AppBarModel, AppBarProps, BrandProps, ContentModel, HelpModel, NavSection, NavigationModel,
    UserBadge,
};
use dashboard_shell::layout::{ShellTheme, ThemeMode};
use dashboard_shell::ShellModel;

use crate::state::AppState;

/// Renders one frame: applies pending theme changes, then draws the shell
/// around the current page.
pub fn draw_ui(ctx: &egui::Context, state: &mut AppState) {
    if state.theme_dirty {
        theme::apply(ctx, &state.theme);
        state.theme_dirty = false;
    }

    // The shell borrows its toggle state and the model separately.
    let mut shell = std::mem::take(&mut state.shell);
    dashboard_shell::draw_shell(ctx, &mut shell, state);
    state.shell = shell;
}

impl AppBarModel for AppState {
    fn theme(&self) -> ShellTheme {
        theme::shell_theme(&self.theme)
    }

    fn app_bar_props(&self) -> AppBarProps {
        AppBarProps {
            title: pages::title(&self.route, self.docs_prefix()),
            has_help: pages::has_help(&self.route),
            has_search: pages::has_search(&self.route),
        }
    }

    fn draw_search(&mut self, ui: &mut egui::Ui) {
        ui.add_sized(
            [220.0, 26.0],
            egui::TextEdit::singleline(&mut self.search_query).hint_text("Filter reports"),
        );
    }

    fn on_toggle_theme(&mut self) {
        self.toggle_theme();
        if let Err(err) = self.config.save() {
            log::warn!("could not persist theme preference: {err:#}");
        }
    }

    fn on_docs_shortcut(&mut self) {
        let prefix = self.docs_prefix().to_string();
        self.navigate(&prefix);
    }
}

impl NavigationModel for AppState {
    fn theme(&self) -> ShellTheme {
        theme::shell_theme(&self.theme)
    }

    fn brand(&self) -> BrandProps {
        BrandProps {
            name: "Ops Console".to_string(),
            logo_acronym: "OC".to_string(),
            home_route: "/".to_string(),
        }
    }

    fn user_badge(&self) -> Option<UserBadge> {
        Some(UserBadge {
            name: self.user.name.clone(),
            initials: self.user.initials.clone(),
            detail: self.user.team.clone(),
        })
    }

    fn nav_sections(&self, docs: bool) -> Vec<NavSection> {
        if docs {
            nav::docs_sections(&self.route)
        } else {
            nav::main_sections(&self.route)
        }
    }

    fn on_route_selected(&mut self, route: &str) {
        self.navigate(route);
    }
}

impl HelpModel for AppState {
    fn theme(&self) -> ShellTheme {
        theme::shell_theme(&self.theme)
    }

    fn draw_help(&mut self, ui: &mut egui::Ui) {
        let route = self.route.clone();
        pages::draw_help(ui, &route);
    }
}

impl ContentModel for AppState {
    fn theme(&self) -> ShellTheme {
        theme::shell_theme(&self.theme)
    }

    fn disable_padding(&self) -> bool {
        pages::disable_padding(&self.route)
    }

    fn draw_content(&mut self, ui: &mut egui::Ui) -> anyhow::Result<()> {
        pages::draw(ui, self)
    }
}

impl ShellModel for AppState {
    fn route(&self) -> String {
        self.route.clone()
    }

    fn docs_prefix(&self) -> &str {
        AppState::docs_prefix(self)
    }

    fn theme_mode(&self) -> ThemeMode {
        self.theme.preset.mode()
    }

    fn rtl(&self) -> bool {
        self.config.rtl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_shell::layout::{compose_layout, LayoutContext, DOCS_NAV_WIDTH};

    #[test]
    fn docs_shortcut_switches_provider_and_width() {
        let mut state = AppState::default();
        state.on_docs_shortcut();
        assert_eq!(state.route, "/docs");

        let context = LayoutContext::derive(
            &ShellModel::route(&state),
            ShellModel::docs_prefix(&state),
            1280.0,
            state.theme_mode(),
            state.rtl(),
        );
        assert!(context.is_docs_route);
        let config = compose_layout(&state.shell, &context);
        assert_eq!(config.nav_width, DOCS_NAV_WIDTH);

        let sections = state.nav_sections(context.is_docs_route);
        assert_eq!(sections[0].id, nav::SECTION_DOCS_GUIDES);
    }

    #[test]
    fn help_trigger_absent_without_help_content() {
        let mut state = AppState::default();
        state.navigate("/");
        assert!(!state.app_bar_props().has_help);
        state.navigate("/reports");
        assert!(state.app_bar_props().has_help);
    }
}
