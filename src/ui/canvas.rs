//! Central canvas UI: globe visualization area.
//!
//! Draws the assembled primitives with the egui painter and handles
//! rotate/zoom/pan interaction plus point picking. This is the
//! rendering collaborator: the geometry pipeline only emits point
//! sequences, nothing here feeds back into it.

use crate::geo::{self, Primitive, Projection};
use crate::state::{AppState, VizState};
use eframe::egui::{self, Color32, Painter, Pos2, Rect, RichText, Sense, Stroke, Vec2};
use geo_types::Coord;
use glam::{DQuat, DVec3};

/// Document line color, matching the classic green-wireframe look.
const LINE_COLOR: Color32 = Color32::from_rgb(0, 221, 0);
/// Graticule line color.
const GRID_COLOR: Color32 = Color32::from_rgb(0, 110, 0);

/// Render the central canvas: graticule first, then document lines.
pub fn render_canvas(
    ctx: &egui::Context,
    state: &mut AppState,
    primitives: &[Primitive],
    grid: &[Primitive],
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, Color32::from_rgb(8, 10, 22));

        let view = GlobeView::new(&state.viz, rect);

        if state.viz.shape == Projection::Sphere {
            // Faint disc so the globe reads as a solid body.
            painter.circle_stroke(
                view.center,
                (state.viz.radius * view.scale) as f32,
                Stroke::new(1.0, Color32::from_rgb(40, 60, 40)),
            );
        }

        for strip in grid {
            draw_primitive(&painter, &view, strip, Stroke::new(0.6, GRID_COLOR));
        }
        for primitive in primitives {
            draw_primitive(&painter, &view, primitive, Stroke::new(1.2, LINE_COLOR));
        }

        // Report the geographic coordinate under the cursor.
        state.picked = response
            .hover_pos()
            .and_then(|pos| view.pick(pos, state.viz.radius));

        draw_overlay_info(ui, &rect, state);
        handle_canvas_interaction(&response, state);
    });
}

/// Draws one primitive.
///
/// Point markers are a known capability gap carried over from the
/// reference renderer: the pipeline emits them, but this line-based
/// renderer has nothing to draw them with and skips them (the rebuild
/// step logs the count).
fn draw_primitive(painter: &Painter, view: &GlobeView, primitive: &Primitive, stroke: Stroke) {
    match primitive {
        Primitive::Marker(_) => {}
        Primitive::LineStrip(vertices) => {
            let projected: Vec<(Pos2, f64)> =
                vertices.iter().map(|&v| view.to_screen(v)).collect();

            for window in projected.windows(2) {
                let [(a, depth_a), (b, depth_b)] = window else {
                    continue;
                };
                // Hide the back hemisphere on the sphere view.
                if view.cull_backside && (*depth_a < 0.0 || *depth_b < 0.0) {
                    continue;
                }
                painter.line_segment([*a, *b], stroke);
            }
        }
    }
}

/// View transform from world space to the canvas.
struct GlobeView {
    shape: Projection,
    rotation: DQuat,
    center: Pos2,
    scale: f64,
    cull_backside: bool,
}

impl GlobeView {
    fn new(viz: &VizState, rect: Rect) -> Self {
        let rotation = DQuat::from_rotation_z(viz.pitch) * DQuat::from_rotation_y(viz.yaw);
        let scale =
            rect.width().min(rect.height()) as f64 * 0.45 * viz.zoom as f64 / viz.radius.max(1e-9);

        Self {
            shape: viz.shape,
            rotation,
            center: rect.center() + viz.pan_offset,
            scale,
            cull_backside: viz.shape == Projection::Sphere,
        }
    }

    /// Maps a world point to a screen position plus its depth toward
    /// the viewer (positive = front hemisphere).
    ///
    /// The viewer sits on the +X axis. On the sphere, east (-Z) goes
    /// right and north (+Y) goes up; on the plane the y/z payload is
    /// read directly as lon/lat axes.
    fn to_screen(&self, point: DVec3) -> (Pos2, f64) {
        match self.shape {
            Projection::Sphere => {
                let v = self.rotation * point;
                let pos = Pos2::new(
                    self.center.x + (v.z * -self.scale) as f32,
                    self.center.y - (v.y * self.scale) as f32,
                );
                (pos, v.x)
            }
            Projection::Plane => {
                let pos = Pos2::new(
                    self.center.x + (point.y * self.scale) as f32,
                    self.center.y - (point.z * self.scale) as f32,
                );
                (pos, 0.0)
            }
        }
    }

    /// Maps a cursor position back to a geographic coordinate, if it
    /// lies on the visible surface.
    ///
    /// On the sphere this solves for the front-hemisphere point under
    /// the cursor and inverts it with [`geo::to_spherical`].
    fn pick(&self, pos: Pos2, radius: f64) -> Option<Coord<f64>> {
        match self.shape {
            Projection::Sphere => {
                let z = -((pos.x - self.center.x) as f64) / self.scale;
                let y = -((pos.y - self.center.y) as f64) / self.scale;

                let x_squared = radius * radius - y * y - z * z;
                if x_squared < 0.0 {
                    return None;
                }

                let world = self.rotation.inverse() * DVec3::new(x_squared.sqrt(), y, z);
                Some(geo::to_spherical(world, radius))
            }
            Projection::Plane => {
                let lon = ((pos.x - self.center.x) as f64) / self.scale / radius * 180.0;
                let lat = -((pos.y - self.center.y) as f64) / self.scale / radius * 180.0;

                if lon.abs() > 180.0 || lat.abs() > 90.0 {
                    return None;
                }
                Some(Coord { x: lon, y: lat })
            }
        }
    }
}

fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(260.0, 60.0));

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!("Document: {}", state.document_name))
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(200, 220, 200)),
            );
            let picked = match state.picked {
                Some(coord) => format!("Cursor: {:+08.3}, {:+09.3}", coord.y, coord.x),
                None => "Cursor: --".to_string(),
            };
            ui.label(
                RichText::new(picked)
                    .monospace()
                    .size(12.0)
                    .color(Color32::from_rgb(200, 220, 200)),
            );
        });
    });
}

fn handle_canvas_interaction(response: &egui::Response, state: &mut AppState) {
    // Drag rotates the sphere; on the flat plane it pans instead.
    if response.dragged() {
        let delta = response.drag_delta();
        if state.viz.shape == Projection::Sphere {
            state.viz.yaw += delta.x as f64 * 0.01;
            state.viz.pitch = (state.viz.pitch + delta.y as f64 * 0.01)
                .clamp(-std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
        } else {
            state.viz.pan_offset += delta;
        }
    }

    // Scroll zooms relative to the cursor position.
    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let zoom_factor = 1.0 + scroll_delta.y * 0.001;
            let old_zoom = state.viz.zoom;
            let new_zoom = (old_zoom * zoom_factor).clamp(0.1, 10.0);

            if let Some(cursor_pos) = response.hover_pos() {
                let cursor_rel = cursor_pos - response.rect.center();
                let ratio = new_zoom / old_zoom;
                state.viz.pan_offset =
                    cursor_rel * (1.0 - ratio) + state.viz.pan_offset * ratio;
            }

            state.viz.zoom = new_zoom;
        }
    }

    // Reset view on double-click.
    if response.double_clicked() {
        state.viz.zoom = 1.0;
        state.viz.pan_offset = Vec2::ZERO;
        state.viz.yaw = 0.0;
        state.viz.pitch = 0.0;
    }
}
