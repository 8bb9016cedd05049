//! Side panel UI: surface, graticule, and document controls.

use crate::geo::Projection;
use crate::state::AppState;
use eframe::egui::{self, RichText};

pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("controls")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Globe Workbench");
            ui.separator();

            ui.label("Surface");
            egui::ComboBox::from_id_salt("surface_shape")
                .selected_text(state.viz.shape.label())
                .show_ui(ui, |ui| {
                    for &shape in Projection::all() {
                        if ui
                            .selectable_value(&mut state.viz.shape, shape, shape.label())
                            .changed()
                        {
                            state.rebuild_requested = true;
                        }
                    }
                });

            ui.horizontal(|ui| {
                ui.label("Radius");
                if ui
                    .add(
                        egui::DragValue::new(&mut state.viz.radius)
                            .speed(0.1)
                            .range(0.1..=100.0),
                    )
                    .changed()
                {
                    state.rebuild_requested = true;
                }
            });

            ui.separator();

            if ui
                .checkbox(&mut state.viz.grid_enabled, "Graticule")
                .changed()
            {
                state.rebuild_requested = true;
            }
            if state.viz.grid_enabled
                && ui
                    .add(egui::Slider::new(&mut state.viz.grid_circles, 4..=36).text("circles"))
                    .changed()
            {
                state.rebuild_requested = true;
            }

            ui.separator();

            if ui.button("Load GeoJSON...").clicked() {
                state.load_requested = true;
            }
            if ui.button("Reset to sample").clicked() {
                state.reset_requested = true;
            }

            ui.separator();
            ui.label(RichText::new(&state.status_message).weak());
        });
}
