use std::any::Any;
use std::fmt;

use eframe::egui::{Color32, Margin};

/// Base spacing unit; paddings and margins are multiples of it.
pub const SPACING_UNIT: f32 = 8.0;

/// Width of the inline navigation panel for ordinary routes.
pub const NAV_WIDTH: f32 = 240.0;
/// Width of the inline navigation panel for documentation routes.
pub const DOCS_NAV_WIDTH: f32 = 300.0;

/// Viewport width where the tablet band starts. Below it the navigation
/// panel is an overlay and the app bar uses its compact height.
pub const TABLET_THRESHOLD: f32 = 600.0;
/// Viewport width where the desktop band starts.
pub const DESKTOP_THRESHOLD: f32 = 960.0;

/// Path prefix that classifies a route as part of the documentation sub-site.
pub const DEFAULT_DOCS_PREFIX: &str = "/docs";

const APP_BAR_HEIGHT_COMPACT: f32 = 56.0;
const APP_BAR_HEIGHT_REGULAR: f32 = 64.0;

const HELP_WIDTH_FRACTION: f32 = 0.4;
const HELP_WIDTH_FRACTION_MOBILE: f32 = 0.9;

/// `true` when the path belongs to the documentation sub-site. Evaluated
/// against the live path every frame; the route can change without any
/// shell state changing, so the result is never cached.
pub fn is_docs_route(path: &str, docs_prefix: &str) -> bool {
    path.starts_with(docs_prefix)
}

/// Named viewport-width bands controlling layout mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f32) -> Self {
        if width < TABLET_THRESHOLD {
            Breakpoint::Mobile
        } else if width < DESKTOP_THRESHOLD {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Narrow band: compact app bar and content top margin.
    pub fn is_narrow(self) -> bool {
        self == Breakpoint::Mobile
    }

    /// Whether the navigation panel occupies permanent inline space
    /// instead of rendering as a dismissible overlay.
    pub fn inline_navigation(self) -> bool {
        self >= Breakpoint::Tablet
    }
}

/// Light/dark mode as reported by the hosting theme. The shell only reads
/// the mode and invokes the toggle callback; it does not own the palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Horizontal side a panel is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Right,
}

impl Anchor {
    pub fn mirror(self) -> Self {
        match self {
            Anchor::Left => Anchor::Right,
            Anchor::Right => Anchor::Left,
        }
    }
}

/// Failure captured from a failed render of page content. Opaque beyond its
/// display text; held by the shell until the shell value itself is dropped.
#[derive(Clone, Debug)]
pub struct ContentFailure {
    message: String,
}

impl ContentFailure {
    pub fn from_error(error: &anyhow::Error) -> Self {
        Self {
            message: format!("{error:#}"),
        }
    }

    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "page content panicked while rendering".to_string()
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ContentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Toggle state owned by one mounted shell. Everything else the layout
/// depends on (route, viewport, theme mode, direction) is environmental and
/// re-read every frame via [`LayoutContext::derive`].
#[derive(Debug, Default)]
pub struct ShellState {
    drawer_open: bool,
    help_open: bool,
    title_revealed: bool,
    failure: Option<ContentFailure>,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Flips the navigation overlay. Inert on wide viewports, where the
    /// inline panel is structural rather than a toggle.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
    }

    pub fn title_revealed(&self) -> bool {
        self.title_revealed
    }

    pub fn title_hover_enter(&mut self) {
        self.title_revealed = true;
    }

    pub fn title_hover_leave(&mut self) {
        self.title_revealed = false;
    }

    /// Records a content render failure. The first failure wins and stays
    /// for the lifetime of this value; there is no recovery transition.
    pub fn capture_failure(&mut self, failure: ContentFailure) {
        if self.failure.is_none() {
            self.failure = Some(failure);
        }
    }

    pub fn failure(&self) -> Option<&ContentFailure> {
        self.failure.as_ref()
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Environmental inputs the layout depends on, recomputed every frame and
/// never stored across frames.
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext {
    pub is_docs_route: bool,
    pub breakpoint: Breakpoint,
    pub theme_mode: ThemeMode,
    pub rtl: bool,
}

impl LayoutContext {
    pub fn derive(
        path: &str,
        docs_prefix: &str,
        viewport_width: f32,
        theme_mode: ThemeMode,
        rtl: bool,
    ) -> Self {
        Self {
            is_docs_route: is_docs_route(path, docs_prefix),
            breakpoint: Breakpoint::from_width(viewport_width),
            theme_mode,
            rtl,
        }
    }
}

/// How the navigation content is presented for the current breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavPresentation {
    /// Dismissible overlay above the content; `open` is the drawer toggle.
    Overlay { open: bool },
    /// Permanently visible panel occupying reserved horizontal space.
    Inline,
}

/// Geometry for every panel of the shell, computed as a pure function of
/// state and context by [`compose_layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelConfiguration {
    pub nav: NavPresentation,
    pub nav_width: f32,
    pub nav_anchor: Anchor,
    pub help_anchor: Anchor,
    pub help_width_fraction: f32,
    /// App bar height; the content region starts directly below it.
    pub app_bar_height: f32,
    /// Horizontal space reserved by the inline navigation panel. The app bar
    /// and the content region both shrink by this amount.
    pub nav_inset: f32,
    pub show_fallback: bool,
}

impl PanelConfiguration {
    pub fn app_bar_width(&self, viewport_width: f32) -> f32 {
        viewport_width - self.nav_inset
    }

    pub fn content_width(&self, viewport_width: f32) -> f32 {
        viewport_width - self.nav_inset
    }

    pub fn content_min_height(&self, viewport_height: f32) -> f32 {
        viewport_height - self.app_bar_height
    }

    /// Inner padding of the content region. Pages that manage their own
    /// full-bleed layout pass `suppress = true`.
    pub fn content_padding(&self, suppress: bool) -> Margin {
        if suppress {
            Margin::ZERO
        } else {
            let triple = SPACING_UNIT * 3.0;
            Margin {
                left: triple,
                right: triple,
                top: triple,
                bottom: triple * 4.0,
            }
        }
    }
}

/// Selects one of the small number of layout configurations from the toggle
/// state and the environmental context. Pure; the egui layer only consumes
/// the returned record.
pub fn compose_layout(state: &ShellState, context: &LayoutContext) -> PanelConfiguration {
    let nav = if context.breakpoint.inline_navigation() {
        NavPresentation::Inline
    } else {
        NavPresentation::Overlay {
            open: state.drawer_open(),
        }
    };
    let nav_width = if context.is_docs_route {
        DOCS_NAV_WIDTH
    } else {
        NAV_WIDTH
    };
    let nav_anchor = if context.rtl { Anchor::Right } else { Anchor::Left };
    let app_bar_height = if context.breakpoint.is_narrow() {
        APP_BAR_HEIGHT_COMPACT
    } else {
        APP_BAR_HEIGHT_REGULAR
    };
    let help_width_fraction = if context.breakpoint.is_narrow() {
        HELP_WIDTH_FRACTION_MOBILE
    } else {
        HELP_WIDTH_FRACTION
    };

    PanelConfiguration {
        nav,
        nav_width,
        nav_anchor,
        help_anchor: nav_anchor.mirror(),
        help_width_fraction,
        app_bar_height,
        nav_inset: if nav == NavPresentation::Inline {
            nav_width
        } else {
            0.0
        },
        show_fallback: state.has_failed(),
    }
}

/// Style tokens consumed by the shell components.
#[derive(Clone, Debug)]
pub struct ShellTheme {
    pub mode: ThemeMode,
    pub root_background: Color32,
    pub surface_background: Color32,
    pub header_background: Color32,
    pub backdrop: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub danger: Color32,
}

impl ShellTheme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            root_background: Color32::from_rgb(24, 26, 30),
            surface_background: Color32::from_rgb(32, 34, 38),
            header_background: Color32::from_rgb(40, 42, 48),
            backdrop: Color32::from_black_alpha(110),
            border: Color32::from_rgba_unmultiplied(70, 72, 78, 160),
            text_primary: Color32::from_rgb(232, 233, 239),
            text_muted: Color32::from_rgb(172, 176, 184),
            accent: Color32::from_rgb(65, 148, 245),
            accent_soft: Color32::from_rgb(48, 86, 128),
            danger: Color32::from_rgb(222, 104, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            root_background: Color32::from_rgb(244, 245, 247),
            surface_background: Color32::from_rgb(252, 252, 253),
            header_background: Color32::from_rgb(233, 236, 241),
            backdrop: Color32::from_black_alpha(70),
            border: Color32::from_rgba_unmultiplied(120, 124, 132, 140),
            text_primary: Color32::from_rgb(32, 36, 44),
            text_muted: Color32::from_rgb(96, 102, 112),
            accent: Color32::from_rgb(35, 110, 205),
            accent_soft: Color32::from_rgb(188, 210, 238),
            danger: Color32::from_rgb(176, 52, 62),
        }
    }
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(width: f32, path: &str, rtl: bool) -> LayoutContext {
        LayoutContext::derive(path, DEFAULT_DOCS_PREFIX, width, ThemeMode::Dark, rtl)
    }

    #[test]
    fn breakpoint_bands() {
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(599.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(600.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(959.9), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(960.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(2560.0), Breakpoint::Desktop);
    }

    #[test]
    fn docs_route_classification() {
        assert!(is_docs_route("/docs", DEFAULT_DOCS_PREFIX));
        assert!(is_docs_route("/docs/intro", DEFAULT_DOCS_PREFIX));
        assert!(!is_docs_route("/", DEFAULT_DOCS_PREFIX));
        assert!(!is_docs_route("/reports", DEFAULT_DOCS_PREFIX));
        assert!(is_docs_route("/manual/intro", "/manual"));
        assert!(!is_docs_route("/docs", "/manual"));
    }

    #[test]
    fn overlay_below_tablet_inline_above() {
        let state = ShellState::new();
        for width in [320.0, 599.0] {
            let config = compose_layout(&state, &context(width, "/", false));
            assert_eq!(config.nav, NavPresentation::Overlay { open: false });
            assert_eq!(config.nav_inset, 0.0);
        }
        for width in [600.0, 960.0, 1920.0] {
            let config = compose_layout(&state, &context(width, "/", false));
            assert_eq!(config.nav, NavPresentation::Inline);
            assert_eq!(config.nav_inset, NAV_WIDTH);
        }
    }

    #[test]
    fn drawer_toggle_inert_on_wide_viewports() {
        let mut state = ShellState::new();
        state.toggle_drawer();
        let config = compose_layout(&state, &context(1280.0, "/", false));
        assert_eq!(config.nav, NavPresentation::Inline);
    }

    #[test]
    fn mirrored_anchors_under_both_directions() {
        let state = ShellState::new();
        for rtl in [false, true] {
            let config = compose_layout(&state, &context(1280.0, "/", rtl));
            assert_ne!(config.nav_anchor, config.help_anchor);
            assert_eq!(config.help_anchor, config.nav_anchor.mirror());
            if rtl {
                assert_eq!(config.nav_anchor, Anchor::Right);
            } else {
                assert_eq!(config.nav_anchor, Anchor::Left);
            }
        }
    }

    #[test]
    fn docs_route_selects_docs_width() {
        let state = ShellState::new();
        let config = compose_layout(&state, &context(1280.0, "/docs/intro", false));
        assert_eq!(config.nav_width, DOCS_NAV_WIDTH);
        assert_eq!(config.nav_inset, DOCS_NAV_WIDTH);
        assert_eq!(config.app_bar_width(1280.0), 1280.0 - DOCS_NAV_WIDTH);

        let config = compose_layout(&state, &context(1280.0, "/reports", false));
        assert_eq!(config.nav_width, NAV_WIDTH);
    }

    #[test]
    fn app_bar_height_follows_narrow_band() {
        let state = ShellState::new();
        let compact = compose_layout(&state, &context(480.0, "/", false));
        assert_eq!(compact.app_bar_height, 56.0);
        assert_eq!(compact.help_width_fraction, 0.9);
        let regular = compose_layout(&state, &context(800.0, "/", false));
        assert_eq!(regular.app_bar_height, 64.0);
        assert_eq!(regular.help_width_fraction, 0.4);
        assert_eq!(regular.content_min_height(900.0), 900.0 - 64.0);
    }

    #[test]
    fn content_padding_suppression() {
        let state = ShellState::new();
        let config = compose_layout(&state, &context(1280.0, "/", false));
        let padded = config.content_padding(false);
        assert_eq!(padded.left, 24.0);
        assert_eq!(padded.top, 24.0);
        assert_eq!(padded.bottom, 96.0);
        assert_eq!(config.content_padding(true), Margin::ZERO);
    }

    #[test]
    fn double_flip_restores_prior_state() {
        let mut state = ShellState::new();
        state.toggle_drawer();
        state.toggle_drawer();
        assert!(!state.drawer_open());
        state.toggle_help();
        state.toggle_help();
        assert!(!state.help_open());
        state.title_hover_enter();
        state.title_hover_leave();
        assert!(!state.title_revealed());
    }

    #[test]
    fn mobile_toggle_opens_overlay() {
        let mut state = ShellState::new();
        let before = compose_layout(&state, &context(400.0, "/", false));
        assert_eq!(before.nav, NavPresentation::Overlay { open: false });
        state.toggle_drawer();
        let after = compose_layout(&state, &context(400.0, "/", false));
        assert_eq!(after.nav, NavPresentation::Overlay { open: true });
    }

    #[test]
    fn failure_is_terminal_across_toggles() {
        let mut state = ShellState::new();
        state.capture_failure(ContentFailure::from_error(&anyhow::anyhow!("boom")));
        state.toggle_drawer();
        state.toggle_help();
        state.title_hover_enter();
        state.title_hover_leave();
        assert!(state.has_failed());
        assert_eq!(state.failure().unwrap().message(), "boom");

        let config = compose_layout(&state, &context(400.0, "/", false));
        assert!(config.show_fallback);
        // Chrome keeps responding: the overlay still opens while failed.
        assert_eq!(config.nav, NavPresentation::Overlay { open: true });
    }

    #[test]
    fn first_failure_wins() {
        let mut state = ShellState::new();
        state.capture_failure(ContentFailure::from_error(&anyhow::anyhow!("first")));
        state.capture_failure(ContentFailure::from_error(&anyhow::anyhow!("second")));
        assert_eq!(state.failure().unwrap().message(), "first");
    }

    #[test]
    fn panic_payload_messages() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("static text");
        assert_eq!(ContentFailure::from_panic(boxed).message(), "static text");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned text"));
        assert_eq!(ContentFailure::from_panic(boxed).message(), "owned text");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(42_u32);
        assert_eq!(
            ContentFailure::from_panic(boxed).message(),
            "page content panicked while rendering"
        );
    }
}
