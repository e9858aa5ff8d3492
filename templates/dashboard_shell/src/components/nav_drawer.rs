use eframe::egui::{self, Id, Margin, Order, RichText, Rounding, Sense};

use crate::layout::{
    Anchor, LayoutContext, NavPresentation, PanelConfiguration, ShellState, ShellTheme,
};

#[derive(Clone, Debug)]
pub struct BrandProps {
    /// Text label of the brand title.
    pub name: String,
    /// Short glyph painted in place of the text while the title is hovered.
    pub logo_acronym: String,
    /// Route the brand title links to.
    pub home_route: String,
}

impl Default for BrandProps {
    fn default() -> Self {
        Self {
            name: "Console".to_string(),
            logo_acronym: "OC".to_string(),
            home_route: "/".to_string(),
        }
    }
}

/// Identity widget rendered below the brand block. Opaque to the shell.
#[derive(Clone, Debug)]
pub struct UserBadge {
    pub name: String,
    pub initials: String,
    pub detail: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NavSection {
    pub id: String,
    pub title: Option<String>,
    pub items: Vec<NavItem>,
}

#[derive(Clone, Debug)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub route: String,
    pub icon: Option<String>,
    pub selected: bool,
}

pub trait NavigationModel {
    fn theme(&self) -> ShellTheme;
    fn brand(&self) -> BrandProps;
    fn user_badge(&self) -> Option<UserBadge>;
    /// Section list; the provider is selected by the docs classification of
    /// the live route, never by shell state.
    fn nav_sections(&self, docs: bool) -> Vec<NavSection>;
    fn on_route_selected(&mut self, route: &str);
}

pub fn draw_navigation(
    ctx: &egui::Context,
    config: &PanelConfiguration,
    layout: &LayoutContext,
    state: &mut ShellState,
    model: &mut dyn NavigationModel,
) {
    match config.nav {
        NavPresentation::Inline => draw_inline(ctx, config, layout, state, model),
        NavPresentation::Overlay { open: false } => {}
        NavPresentation::Overlay { open: true } => draw_overlay(ctx, config, layout, state, model),
    }
}

fn draw_inline(
    ctx: &egui::Context,
    config: &PanelConfiguration,
    layout: &LayoutContext,
    state: &mut ShellState,
    model: &mut dyn NavigationModel,
) {
    let theme = model.theme();
    let frame = egui::Frame::none()
        .fill(theme.surface_background)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(Margin {
            left: 16.0,
            right: 16.0,
            top: 14.0,
            bottom: 18.0,
        });

    let panel = match config.nav_anchor {
        Anchor::Left => egui::SidePanel::left("shell_nav_panel"),
        Anchor::Right => egui::SidePanel::right("shell_nav_panel"),
    };
    panel
        .resizable(false)
        .exact_width(config.nav_width)
        .frame(frame)
        .show(ctx, |ui| {
            drawer_contents(ui, layout, state, model, false);
        });
}

fn draw_overlay(
    ctx: &egui::Context,
    config: &PanelConfiguration,
    layout: &LayoutContext,
    state: &mut ShellState,
    model: &mut dyn NavigationModel,
) {
    let theme = model.theme();
    let screen = ctx.screen_rect();

    // Backdrop; clicking it dismisses the drawer.
    egui::Area::new(Id::new("shell_nav_backdrop"))
        .order(Order::Foreground)
        .fixed_pos(screen.left_top())
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(screen, Rounding::ZERO, theme.backdrop);
            if response.clicked() {
                state.toggle_drawer();
            }
        });

    let width = config.nav_width.min(screen.width());
    let x = match config.nav_anchor {
        Anchor::Left => screen.left(),
        Anchor::Right => screen.right() - width,
    };

    egui::Area::new(Id::new("shell_nav_overlay"))
        .order(Order::Foreground)
        .fixed_pos(egui::pos2(x, screen.top()))
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme.surface_background)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .inner_margin(Margin {
                    left: 16.0,
                    right: 16.0,
                    top: 14.0,
                    bottom: 18.0,
                })
                .show(ui, |ui| {
                    ui.set_width(width - 32.0);
                    ui.set_min_height(screen.height() - 32.0);
                    drawer_contents(ui, layout, state, model, true);
                });
        });
}

/// Shared body of both presentations: brand block, identity widget, and the
/// section list from whichever provider the route selects.
fn drawer_contents(
    ui: &mut egui::Ui,
    layout: &LayoutContext,
    state: &mut ShellState,
    model: &mut dyn NavigationModel,
    overlay: bool,
) {
    let theme = model.theme();
    let brand = model.brand();

    ui.horizontal(|ui| {
        if overlay {
            let close = egui::Button::new(RichText::new("☰").color(theme.text_primary))
                .min_size(egui::vec2(28.0, 28.0));
            if ui.add(close).on_hover_text("Close navigation").clicked() {
                state.toggle_drawer();
            }
        }
        let response = draw_brand(ui, &theme, &brand, state.title_revealed());
        // Hover reveal: enter swaps the text for the logo glyph, leave
        // restores the text. No latch, no debounce.
        if response.hovered() && !state.title_revealed() {
            state.title_hover_enter();
        } else if !response.hovered() && state.title_revealed() {
            state.title_hover_leave();
        }
        if response.clicked() {
            model.on_route_selected(&brand.home_route);
        }
    });

    ui.separator();

    if let Some(badge) = model.user_badge() {
        draw_user_badge(ui, &theme, &badge);
        ui.separator();
    }

    ui.add_space(6.0);
    egui::ScrollArea::vertical()
        .id_source("shell_nav_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for section in model.nav_sections(layout.is_docs_route) {
                if let Some(title) = section.title.as_ref() {
                    ui.label(RichText::new(title).color(theme.text_muted).size(12.0));
                    ui.add_space(4.0);
                }
                for item in &section.items {
                    if nav_entry(ui, &theme, item).clicked() {
                        model.on_route_selected(&item.route);
                    }
                }
                ui.add_space(14.0);
            }
        });
}

fn draw_brand(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    brand: &BrandProps,
    revealed: bool,
) -> egui::Response {
    if revealed {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(30.0, 30.0), Sense::click());
        let painter = ui.painter_at(rect);
        painter.rect(
            rect,
            Rounding::same(6.0),
            theme.accent_soft,
            egui::Stroke::new(1.5, theme.accent),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &brand.logo_acronym,
            egui::FontId::proportional(13.0),
            theme.text_primary,
        );
        response
    } else {
        ui.add(
            egui::Label::new(
                RichText::new(&brand.name)
                    .color(theme.text_primary)
                    .size(16.0)
                    .strong(),
            )
            .sense(Sense::click()),
        )
    }
}

fn draw_user_badge(ui: &mut egui::Ui, theme: &ShellTheme, badge: &UserBadge) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.circle_filled(rect.center(), 14.0, theme.accent_soft);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &badge.initials,
            egui::FontId::proportional(12.0),
            theme.text_primary,
        );
        ui.vertical(|ui| {
            ui.label(RichText::new(&badge.name).color(theme.text_primary));
            if let Some(detail) = badge.detail.as_ref() {
                ui.small(RichText::new(detail).color(theme.text_muted));
            }
        });
    });
    ui.add_space(8.0);
}

fn nav_entry(ui: &mut egui::Ui, theme: &ShellTheme, item: &NavItem) -> egui::Response {
    let mut text = RichText::new(match &item.icon {
        Some(icon) => format!("{} {}", icon, item.label),
        None => item.label.clone(),
    })
    .color(theme.text_primary);
    if item.selected {
        text = text.strong();
    }

    let button = egui::Button::new(text)
        .fill(if item.selected {
            theme.accent_soft
        } else {
            theme.surface_background
        })
        .min_size(egui::vec2(0.0, 30.0));
    ui.add(button)
}
