use anyhow::anyhow;
use eframe::egui::{self, Margin, RichText, Rounding};

use crate::state::AppState;

struct ReportRow {
    name: &'static str,
    owner: &'static str,
    status: &'static str,
}

const REPORTS: &[ReportRow] = &[
    ReportRow {
        name: "Nightly ingestion",
        owner: "Platform",
        status: "healthy",
    },
    ReportRow {
        name: "Billing rollup",
        owner: "Finance",
        status: "healthy",
    },
    ReportRow {
        name: "Fleet heartbeat",
        owner: "Platform",
        status: "degraded",
    },
    ReportRow {
        name: "Audit export",
        owner: "Compliance",
        status: "healthy",
    },
];

pub fn title(route: &str, docs_prefix: &str) -> String {
    if route.starts_with(docs_prefix) {
        return match route.strip_prefix(docs_prefix).unwrap_or("") {
            "" | "/" => "Documentation".to_string(),
            "/getting-started" => "Getting started".to_string(),
            "/shell" => "The shell".to_string(),
            "/theming" => "Theming".to_string(),
            _ => "Documentation".to_string(),
        };
    }
    match route {
        "/" => "Overview".to_string(),
        "/reports" => "Reports".to_string(),
        "/live" => "Live wall".to_string(),
        "/diagnostics" => "Diagnostics".to_string(),
        _ => "Not found".to_string(),
    }
}

/// Pages that supply contextual help content; without it the help trigger
/// is absent from the app bar.
pub fn has_help(route: &str) -> bool {
    matches!(route, "/reports" | "/diagnostics")
}

pub fn has_search(route: &str) -> bool {
    route == "/reports"
}

/// The live wall draws edge to edge and manages its own spacing.
pub fn disable_padding(route: &str) -> bool {
    route == "/live"
}

pub fn draw(ui: &mut egui::Ui, state: &mut AppState) -> anyhow::Result<()> {
    let route = state.route.clone();
    if route.starts_with(state.docs_prefix()) {
        let section = route
            .strip_prefix(state.docs_prefix())
            .unwrap_or("")
            .to_string();
        draw_docs(ui, state, &section);
        return Ok(());
    }
    match route.as_str() {
        "/" => draw_home(ui, state),
        "/reports" => draw_reports(ui, state),
        "/live" => draw_live(ui, state),
        "/diagnostics" => draw_diagnostics(ui, state)?,
        _ => draw_not_found(ui, state, &route),
    }
    Ok(())
}

pub fn draw_help(ui: &mut egui::Ui, route: &str) {
    match route {
        "/reports" => {
            ui.heading("About reports");
            ui.add_space(8.0);
            ui.label(
                "Each row is a scheduled pipeline. Use the search field in the \
                 top bar to filter rows by name or owner; the status column \
                 reflects the last completed run.",
            );
        }
        "/diagnostics" => {
            ui.heading("About diagnostics");
            ui.add_space(8.0);
            ui.label(
                "Diagnostics shows the most recent probe sample from the \
                 collector. If no sample has been produced yet the page \
                 cannot render.",
            );
        }
        _ => {}
    }
}

fn card(ui: &mut egui::Ui, state: &AppState, add_body: impl FnOnce(&mut egui::Ui)) {
    let palette = &state.theme.palette;
    egui::Frame::none()
        .fill(palette.panel_background)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_body(ui);
        });
}

fn draw_home(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette.clone();
    ui.heading(RichText::new("Everything at a glance").color(palette.text_primary));
    ui.add_space(12.0);
    card(ui, state, |ui| {
        ui.strong("Pipelines");
        ui.label(format!("{} scheduled, 1 degraded", REPORTS.len()));
    });
    ui.add_space(8.0);
    card(ui, state, |ui| {
        ui.strong("Documentation");
        ui.label("Guides and reference live under the book icon in the top bar.");
    });
}

fn draw_reports(ui: &mut egui::Ui, state: &mut AppState) {
    let query = state.search_query.to_lowercase();
    let rows: Vec<&ReportRow> = REPORTS
        .iter()
        .filter(|row| {
            query.is_empty()
                || row.name.to_lowercase().contains(&query)
                || row.owner.to_lowercase().contains(&query)
        })
        .collect();

    if rows.is_empty() {
        ui.label(RichText::new("No reports match the filter.").color(state.theme.palette.text_weak));
        return;
    }

    for row in rows {
        card(ui, state, |ui| {
            ui.horizontal(|ui| {
                ui.strong(row.name);
                ui.label(format!("owner: {}", row.owner));
                ui.label(format!("status: {}", row.status));
            });
        });
        ui.add_space(6.0);
    }
}

fn draw_live(ui: &mut egui::Ui, state: &mut AppState) {
    // Full bleed: the page paints its own background to the edges.
    let palette = &state.theme.palette;
    let rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(rect, Rounding::ZERO, palette.root_background);
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new("Live wall — streams render edge to edge here")
                .color(palette.text_weak)
                .size(16.0),
        );
    });
}

fn draw_diagnostics(ui: &mut egui::Ui, state: &mut AppState) -> anyhow::Result<()> {
    let probe = state
        .diagnostics_probe
        .as_ref()
        .ok_or_else(|| anyhow!("diagnostics probe has not produced a sample"))?
        .clone();
    card(ui, state, |ui| {
        ui.strong("Probe");
        ui.label(format!("uptime: {:.1} h", probe.uptime_hours));
        ui.label(format!("queue depth: {}", probe.queue_depth));
    });
    Ok(())
}

fn draw_docs(ui: &mut egui::Ui, state: &mut AppState, section: &str) {
    let palette = state.theme.palette.clone();
    match section {
        "" | "/" => {
            ui.heading(RichText::new("Documentation").color(palette.text_primary));
            ui.add_space(8.0);
            ui.label(
                "Guides and reference for the console. Pick a chapter from the \
                 navigation panel on the side.",
            );
        }
        "/getting-started" => {
            ui.heading(RichText::new("Getting started").color(palette.text_primary));
            ui.add_space(8.0);
            ui.label(
                "Sign in, pick a team, and pin the pages you use most. The \
                 overview page summarizes pipeline health across your fleet.",
            );
        }
        "/shell" => {
            ui.heading(RichText::new("The shell").color(palette.text_primary));
            ui.add_space(8.0);
            ui.label(
                "The frame around every page: navigation on one side, the top \
                 bar above, and contextual help behind the question mark. On \
                 narrow windows the navigation collapses into the menu button.",
            );
        }
        "/theming" => {
            ui.heading(RichText::new("Theming").color(palette.text_primary));
            ui.add_space(8.0);
            ui.label(
                "The bulb in the top bar switches between light and dark. The \
                 choice is stored in the console configuration file.",
            );
        }
        _ => {
            ui.heading(RichText::new("Documentation").color(palette.text_primary));
            ui.add_space(8.0);
            ui.label(format!("No chapter at {section}."));
        }
    }
}

fn draw_not_found(ui: &mut egui::Ui, state: &mut AppState, route: &str) {
    ui.heading(
        RichText::new("Nothing here")
            .color(state.theme.palette.text_primary),
    );
    ui.add_space(8.0);
    ui.label(format!("No page is registered at {route}."));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_for_known_routes() {
        assert_eq!(title("/", "/docs"), "Overview");
        assert_eq!(title("/reports", "/docs"), "Reports");
        assert_eq!(title("/docs", "/docs"), "Documentation");
        assert_eq!(title("/docs/shell", "/docs"), "The shell");
        assert_eq!(title("/nope", "/docs"), "Not found");
    }

    #[test]
    fn help_only_where_supplied() {
        assert!(has_help("/reports"));
        assert!(has_help("/diagnostics"));
        assert!(!has_help("/"));
        assert!(!has_help("/live"));
    }

    #[test]
    fn live_wall_is_full_bleed() {
        assert!(disable_padding("/live"));
        assert!(!disable_padding("/"));
        assert!(!disable_padding("/reports"));
    }
}
