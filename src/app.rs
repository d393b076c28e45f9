use eframe::egui;

use wavescale::config::Settings;

use crate::state::{AppState, View};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WaveScaleApp {
    pub state: AppState,
}

impl WaveScaleApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for WaveScaleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: features and waves ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Table => plot::table_view(ui, &self.state),
            View::Lines => plot::line_view(ui, &self.state),
            View::Polar => plot::polar_view(ui, &self.state),
        });
    }
}
