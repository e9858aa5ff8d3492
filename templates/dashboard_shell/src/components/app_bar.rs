use eframe::egui::{self, Align, Layout, Margin, RichText};

use crate::layout::{NavPresentation, PanelConfiguration, ShellState, ShellTheme, ThemeMode};

#[derive(Clone, Debug, Default)]
pub struct AppBarProps {
    /// Page title shown next to the menu button.
    pub title: String,
    /// Whether the hosting page supplies help content. Without it the help
    /// trigger is omitted entirely.
    pub has_help: bool,
    /// Whether the hosting page supplies a search fragment.
    pub has_search: bool,
}

pub trait AppBarModel {
    fn theme(&self) -> ShellTheme;
    fn app_bar_props(&self) -> AppBarProps;
    /// Page-supplied search fragment, drawn inline in the app bar.
    fn draw_search(&mut self, _ui: &mut egui::Ui) {}
    fn on_toggle_theme(&mut self);
    /// Documentation shortcut button was activated.
    fn on_docs_shortcut(&mut self);
}

pub fn draw_app_bar(
    ctx: &egui::Context,
    config: &PanelConfiguration,
    state: &mut ShellState,
    model: &mut dyn AppBarModel,
) {
    let theme = model.theme();
    let props = model.app_bar_props();

    egui::TopBottomPanel::top("shell_app_bar")
        .exact_height(config.app_bar_height)
        .frame(
            egui::Frame::none()
                .fill(theme.header_background)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .inner_margin(Margin::symmetric(16.0, 10.0)),
        )
        .show(ctx, |ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                // The menu button only exists while the navigation panel is
                // an overlay; the inline panel is not a toggle.
                if matches!(config.nav, NavPresentation::Overlay { .. }) {
                    let menu = egui::Button::new(
                        RichText::new("☰").color(theme.text_primary).size(18.0),
                    )
                    .min_size(egui::vec2(32.0, 32.0));
                    if ui.add(menu).on_hover_text("Open navigation").clicked() {
                        state.toggle_drawer();
                    }
                }

                ui.strong(
                    RichText::new(&props.title)
                        .color(theme.text_primary)
                        .size(18.0),
                );

                if props.has_search {
                    ui.add_space(12.0);
                    model.draw_search(ui);
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;

                    if props.has_help {
                        let help = egui::Button::new(
                            RichText::new("❓").color(theme.text_primary),
                        )
                        .min_size(egui::vec2(32.0, 32.0));
                        if ui.add(help).on_hover_text("Page information").clicked() {
                            state.toggle_help();
                        }
                    }

                    let docs = egui::Button::new(
                        RichText::new("📖").color(theme.text_primary),
                    )
                    .min_size(egui::vec2(32.0, 32.0));
                    if ui.add(docs).on_hover_text("Documentation").clicked() {
                        model.on_docs_shortcut();
                    }

                    let bulb = match theme.mode {
                        ThemeMode::Dark => RichText::new("💡").color(theme.accent),
                        ThemeMode::Light => RichText::new("💡").color(theme.text_muted),
                    };
                    let toggle = egui::Button::new(bulb).min_size(egui::vec2(32.0, 32.0));
                    if ui
                        .add(toggle)
                        .on_hover_text("Toggle light/dark theme")
                        .clicked()
                    {
                        model.on_toggle_theme();
                    }
                });
            });
        });
}
