use std::panic::{self, AssertUnwindSafe};

use eframe::egui::{self, Margin, RichText, Rounding};

use crate::layout::{ContentFailure, PanelConfiguration, ShellState, ShellTheme};

pub trait ContentModel {
    fn theme(&self) -> ShellTheme;
    /// Pages that manage their own full-bleed layout suppress the default
    /// content padding.
    fn disable_padding(&self) -> bool {
        false
    }
    /// Renders the page content. A returned error, like a panic raised
    /// during the render, is captured by the shell and ends content
    /// rendering for the life of the mounted shell.
    fn draw_content(&mut self, ui: &mut egui::Ui) -> anyhow::Result<()>;
}

/// Runs one content render inside the containment boundary. Both a returned
/// error and a panic convert into the terminal Failed state; neither is
/// retried, logged, or re-raised.
pub fn contain<F>(state: &mut ShellState, render: F)
where
    F: FnOnce() -> anyhow::Result<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(Ok(())) => {}
        Ok(Err(error)) => state.capture_failure(ContentFailure::from_error(&error)),
        Err(payload) => state.capture_failure(ContentFailure::from_panic(payload)),
    }
}

pub fn draw_content(
    ctx: &egui::Context,
    config: &PanelConfiguration,
    state: &mut ShellState,
    model: &mut dyn ContentModel,
) {
    let theme = model.theme();
    let padding = config.content_padding(model.disable_padding());

    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(theme.root_background)
                .inner_margin(padding),
        )
        .show(ctx, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(ui.available_height());

            if let Some(failure) = state.failure() {
                draw_fallback(ui, &theme, failure);
                return;
            }

            contain(state, || model.draw_content(ui));
            if state.has_failed() {
                // The frame that failed may be partially drawn; the
                // fallback takes over from the next frame on.
                ctx.request_repaint();
            }
        });
}

/// Fixed fallback panel shown in place of the page content once a render
/// failure has been captured. The surrounding chrome stays interactive.
fn draw_fallback(ui: &mut egui::Ui, theme: &ShellTheme, failure: &ContentFailure) {
    egui::Frame::none()
        .fill(theme.surface_background)
        .stroke(egui::Stroke::new(1.0, theme.danger))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(
                RichText::new("Something went wrong")
                    .color(theme.danger)
                    .size(16.0),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(failure.message()).color(theme.text_primary));
            ui.add_space(8.0);
            ui.small(
                RichText::new("This page failed to render. Navigation remains available.")
                    .color(theme.text_muted),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn successful_render_leaves_state_normal() {
        let mut state = ShellState::new();
        contain(&mut state, || Ok(()));
        assert!(!state.has_failed());
    }

    #[test]
    fn returned_error_is_captured() {
        let mut state = ShellState::new();
        contain(&mut state, || Err(anyhow!("report store unavailable")));
        assert_eq!(
            state.failure().unwrap().message(),
            "report store unavailable"
        );
    }

    #[test]
    fn panic_is_captured_not_propagated() {
        let mut state = ShellState::new();
        contain(&mut state, || panic!("widget index out of range"));
        assert_eq!(
            state.failure().unwrap().message(),
            "widget index out of range"
        );
    }

    #[test]
    fn later_renders_cannot_replace_the_first_failure() {
        let mut state = ShellState::new();
        contain(&mut state, || Err(anyhow!("first")));
        contain(&mut state, || Err(anyhow!("second")));
        contain(&mut state, || Ok(()));
        assert_eq!(state.failure().unwrap().message(), "first");
    }
}
