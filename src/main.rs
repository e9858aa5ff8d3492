mod config;
mod state;
mod ui;

use dashboard_shell::AppShell;
use eframe::egui;

use config::AppConfig;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    dashboard_shell::run("Ops Console", move || {
        Box::new(ConsoleApp::new(config))
    })
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

struct ConsoleApp {
    state: AppState,
}

impl ConsoleApp {
    fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl AppShell for ConsoleApp {
    fn init(&mut self, cc: &eframe::CreationContext<'_>) {
        ui::theme::apply(&cc.egui_ctx, &self.state.theme);
    }

    fn update(&mut self, ctx: &egui::Context) {
        ui::draw_ui(ctx, &mut self.state);
    }
}
