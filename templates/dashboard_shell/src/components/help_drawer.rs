use eframe::egui::{self, Id, Margin, Order, RichText, Rounding, Sense};

use crate::layout::{Anchor, PanelConfiguration, ShellState, ShellTheme};

pub trait HelpModel {
    fn theme(&self) -> ShellTheme;
    /// Page-supplied help fragment.
    fn draw_help(&mut self, ui: &mut egui::Ui);
}

/// Contextual help overlay. Always a dismissible overlay at every
/// breakpoint, anchored to the mirror of the navigation side.
pub fn draw_help_panel(
    ctx: &egui::Context,
    config: &PanelConfiguration,
    state: &mut ShellState,
    model: &mut dyn HelpModel,
) {
    if !state.help_open() {
        return;
    }

    let theme = model.theme();
    let screen = ctx.screen_rect();

    egui::Area::new(Id::new("shell_help_backdrop"))
        .order(Order::Foreground)
        .fixed_pos(screen.left_top())
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(screen, Rounding::ZERO, theme.backdrop);
            if response.clicked() {
                state.toggle_help();
            }
        });

    let width = screen.width() * config.help_width_fraction;
    let x = match config.help_anchor {
        Anchor::Left => screen.left(),
        Anchor::Right => screen.right() - width,
    };

    egui::Area::new(Id::new("shell_help_overlay"))
        .order(Order::Foreground)
        .fixed_pos(egui::pos2(x, screen.top()))
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme.surface_background)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .inner_margin(Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_width(width - 48.0);
                    ui.set_min_height(screen.height() - 48.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() - 28.0);
                        let close =
                            egui::Button::new(RichText::new("✕").color(theme.text_primary))
                                .min_size(egui::vec2(28.0, 28.0));
                        if ui.add(close).on_hover_text("Close").clicked() {
                            state.toggle_help();
                        }
                    });

                    egui::ScrollArea::vertical()
                        .id_source("shell_help_scroll")
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            model.draw_help(ui);
                        });
                });
        });
}
