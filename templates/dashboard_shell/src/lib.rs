pub mod components;
pub mod layout;

use eframe::egui;
use eframe::{App, CreationContext, Frame, NativeOptions};

use components::{
    draw_app_bar, draw_content, draw_help_panel, draw_navigation, AppBarModel, ContentModel,
    HelpModel, NavigationModel,
};
use layout::{compose_layout, LayoutContext, PanelConfiguration, ShellState, ThemeMode};

/// One application wired into the shell: the four component models plus the
/// environmental inputs the layout reads every frame. The shell only reads
/// route, theme mode, and direction; it owns none of them.
pub trait ShellModel: AppBarModel + NavigationModel + HelpModel + ContentModel {
    /// Live route path; re-read every frame, never cached by the shell.
    fn route(&self) -> String;
    fn docs_prefix(&self) -> &str {
        layout::DEFAULT_DOCS_PREFIX
    }
    fn theme_mode(&self) -> ThemeMode;
    fn rtl(&self) -> bool {
        false
    }
}

/// Renders one frame of the shell chrome around the model's page content.
/// Returns the layout configuration selected for this frame.
pub fn draw_shell(
    ctx: &egui::Context,
    state: &mut ShellState,
    model: &mut impl ShellModel,
) -> PanelConfiguration {
    let layout = LayoutContext::derive(
        &model.route(),
        model.docs_prefix(),
        ctx.screen_rect().width(),
        model.theme_mode(),
        model.rtl(),
    );
    let config = compose_layout(state, &layout);

    // The inline side panel reserves its space before the app bar so the
    // bar spans only the remaining width; the overlay variants float above
    // everything and are order-independent.
    draw_navigation(ctx, &config, &layout, state, model);
    draw_app_bar(ctx, &config, state, model);
    draw_content(ctx, &config, state, model);
    draw_help_panel(ctx, &config, state, model);
    config
}

/// Trait for the state and behavior of a shell-based application.
pub trait AppShell: 'static {
    /// Initializes the state with the eframe creation context.
    fn init(&mut self, cc: &CreationContext<'_>);

    /// Renders the shell each frame with the global egui context.
    fn update(&mut self, ctx: &egui::Context);
}

struct ShellHost {
    shell: Box<dyn AppShell>,
}

impl ShellHost {
    fn new(mut shell: Box<dyn AppShell>, cc: &CreationContext<'_>) -> Self {
        shell.init(cc);
        Self { shell }
    }
}

impl App for ShellHost {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.shell.update(ctx);
    }
}

/// Runs a shell application. The builder is invoked once to create the
/// concrete state implementing [`AppShell`]; that state is initialized with
/// the [`CreationContext`] and then updated every frame.
pub fn run(
    app_name: &str,
    app_builder: impl FnOnce() -> Box<dyn AppShell> + 'static,
) -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(1280.0, 800.0))
            .with_maximized(true),
        ..Default::default()
    };

    let mut builder = Some(app_builder);

    eframe::run_native(
        app_name,
        options,
        Box::new(move |cc| {
            let shell = builder
                .take()
                .expect("app_builder can only run once")();
            Box::new(ShellHost::new(shell, cc))
        }),
    )
}
