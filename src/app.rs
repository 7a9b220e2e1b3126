use eframe::egui;

use crate::config::Settings;
use crate::i18n::Language;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SeaLevelApp {
    pub state: AppState,
    /// Language the window title was last set in.
    titled_in: Language,
}

impl SeaLevelApp {
    pub fn new(settings: Settings) -> Self {
        let titled_in = settings.language;
        Self {
            state: AppState::new(settings),
            titled_in,
        }
    }
}

impl eframe::App for SeaLevelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.titled_in != self.state.language {
            self.titled_in = self.state.language;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                self.titled_in.strings().window_title.to_string(),
            ));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: models + simulator ----
        egui::SidePanel::left("simulator_panel")
            .default_width(380.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sea_level_plot(ui, &self.state);
        });

        // Runs after painting so the loading message is visible first.
        if self.state.poll_load() {
            ctx.request_repaint();
        }
    }
}
