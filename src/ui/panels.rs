use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – feature selection and wave controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Features");
    ui.separator();

    // Clone what we need so we can mutate state inside the loop.
    let columns: Option<Vec<String>> = state
        .dataset
        .as_ref()
        .map(|ds| ds.column_names().map(str::to_string).collect());

    match columns {
        Some(columns) => feature_list(ui, state, &columns),
        None => {
            ui.label("No dataset loaded.");
        }
    }

    ui.add_space(8.0);
    ui.heading("Polar waves");
    ui.separator();
    wave_controls(ui, state);
}

fn feature_list(ui: &mut Ui, state: &mut AppState, columns: &[String]) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .max_height(ui.available_height() * 0.6)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for col in columns {
                let mut text = RichText::new(col);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(col));
                }

                let mut checked = state.selected.contains(col);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_feature(col);
                }

                // Statistics of the most recent fit, if it covered this column.
                if let Some(scaler) = state.history.last().and_then(|f| f.scaler(col)) {
                    let stats = if scaler.is_constant() {
                        format!("    μ={:.4}  constant", scaler.mean())
                    } else {
                        format!("    μ={:.4}  σ={:.4}", scaler.mean(), scaler.std_dev())
                    };
                    ui.label(RichText::new(stats).small().weak());
                }
            }
        });

    ui.horizontal(|ui: &mut Ui| {
        let can_fit = !state.selected.is_empty();
        if ui
            .add_enabled(can_fit, egui::Button::new("Standardize"))
            .clicked()
        {
            state.standardize_selected();
        }
        let can_undo = !state.history.is_empty();
        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            state.undo_standardize();
        }
    });
}

fn wave_controls(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Random wave").clicked() {
            state.draw_random_wave();
            state.view = View::Polar;
        }
        if ui.button("Clear").clicked() {
            state.clear_waves();
        }
    });

    if let Some(color) = state.last_color {
        ui.label(RichText::new(format!("Last color: {} ({color})", color.name())).color(color.color32()));
    }
    ui.label(format!(
        "{} curves, radial labels at {:.0}°",
        state.axes.lines().len(),
        state.axes.rlabel_position()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for (view, label) in [
            (View::Table, "Table"),
            (View::Lines, "Lines"),
            (View::Polar, "Polar"),
        ] {
            if ui.selectable_label(state.view == view, label).clicked() {
                state.view = view;
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            let (rows, cols) = ds.shape();
            ui.label(format!(
                "{rows} rows × {cols} columns, {} fits applied",
                state.history.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open numeric table")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match wavescale::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.n_rows(),
                    dataset.column_names().collect::<Vec<_>>()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
