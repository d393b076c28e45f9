use std::f64::consts::TAU;

use eframe::egui::{Color32, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text};

use wavescale::polar::linspace;

use crate::state::AppState;

const RING_COUNT: usize = 5;
const SPOKE_STEP_DEG: usize = 45;
const GRID_COLOR: Color32 = Color32::from_gray(160);

fn no_dataset(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a file to view the table  (File → Open…)");
    });
}

// ---------------------------------------------------------------------------
// Table view
// ---------------------------------------------------------------------------

/// Render the dataset as a scrollable table.
pub fn table_view(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        no_dataset(ui);
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(TableColumn::auto())
        .columns(TableColumn::auto().at_least(70.0), dataset.n_cols())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for col in dataset.columns() {
                header.col(|ui| {
                    let mut text = eframe::egui::RichText::new(&col.name).strong();
                    if state.selected.contains(&col.name) {
                        text = text.underline();
                    }
                    ui.label(text);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, dataset.n_rows(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                for col in dataset.columns() {
                    row.col(|ui| {
                        ui.monospace(format!("{:.4}", col.values[i]));
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Line view (each column against row index)
// ---------------------------------------------------------------------------

/// Plot every column as a line over the row index.
pub fn line_view(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        no_dataset(ui);
        return;
    };

    Plot::new("column_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Row")
        .y_axis_label("Value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for col in dataset.columns() {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&col.name))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points: PlotPoints = col
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_finite())
                    .map(|(i, &v)| [i as f64, v])
                    .collect();

                let line = Line::new(points)
                    .name(&col.name)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Polar view
// ---------------------------------------------------------------------------

/// Render the polar axes: grid rings and spokes, the drawn waves, and the
/// radial tick labels along the current label angle.
///
/// The smallest radius sits at the pole, so negative radii are drawn on the
/// same side as their angle.
pub fn polar_view(ui: &mut Ui, state: &AppState) {
    let axes = &state.axes;
    let (r_min, r_max) = axes.radial_limits();
    let outer = r_max - r_min;
    let label_angle = axes.rlabel_position().to_radians();

    Plot::new("polar_plot")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Grid rings with their radius printed along the label ray.
            for r in linspace(r_min, r_max, RING_COUNT) {
                let rho = r - r_min;
                let ring: PlotPoints = linspace(0.0, TAU, 121)
                    .into_iter()
                    .map(|t| [rho * t.cos(), rho * t.sin()])
                    .collect();
                plot_ui.line(Line::new(ring).color(GRID_COLOR).width(0.5));

                let at = PlotPoint::new(rho * label_angle.cos(), rho * label_angle.sin());
                plot_ui.text(Text::new(at, format!("{r:.1}")).color(GRID_COLOR));
            }

            // Spokes with their angle printed just outside the outer ring.
            for deg in (0..360).step_by(SPOKE_STEP_DEG) {
                let t = (deg as f64).to_radians();
                let spoke: PlotPoints =
                    vec![[0.0, 0.0], [outer * t.cos(), outer * t.sin()]].into_iter().collect();
                plot_ui.line(Line::new(spoke).color(GRID_COLOR).width(0.5));

                let at = PlotPoint::new(1.1 * outer * t.cos(), 1.1 * outer * t.sin());
                plot_ui.text(Text::new(at, format!("{deg}°")).color(GRID_COLOR));
            }

            for (idx, line) in axes.lines().iter().enumerate() {
                let points: PlotPoints = line.curve.to_cartesian(r_min).into_iter().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(format!("#{idx} k={} ({})", line.curve.frequency(), line.color))
                        .color(line.color.color32())
                        .width(1.5),
                );
            }
        });
}
