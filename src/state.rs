//! Application state: view controls and UI status.

use eframe::egui::Vec2;
use geo_types::Coord;

use crate::geo::Projection;

/// Visualization state including view controls.
pub struct VizState {
    /// Surface the document is projected onto.
    pub shape: Projection,

    /// Projection scale. On-screen size is governed by zoom, so this
    /// mostly matters when comparing picked coordinates to external
    /// data.
    pub radius: f64,

    /// Whether the graticule is drawn.
    pub grid_enabled: bool,

    /// Graticule density (meridian count).
    pub grid_circles: usize,

    /// View rotation around the vertical axis, radians.
    pub yaw: f64,

    /// View tilt, radians.
    pub pitch: f64,

    /// Current zoom level (1.0 = 100%).
    pub zoom: f32,

    /// Current pan offset from center.
    pub pan_offset: Vec2,
}

impl Default for VizState {
    fn default() -> Self {
        Self {
            shape: Projection::default(),
            radius: 1.0,
            grid_enabled: true,
            grid_circles: 12,
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
        }
    }
}

/// Top-level application state shared across UI panels.
#[derive(Default)]
pub struct AppState {
    pub viz: VizState,

    /// Status line shown in the side panel.
    pub status_message: String,

    /// Name of the currently loaded document.
    pub document_name: String,

    /// Geographic coordinate under the cursor, when the cursor is
    /// over the globe's surface.
    pub picked: Option<Coord<f64>>,

    /// Set by UI widgets when a change requires re-running the
    /// geometry pipeline.
    pub rebuild_requested: bool,

    /// Set by the side panel when the user asks for a file dialog.
    pub load_requested: bool,

    /// Set by the side panel to restore the embedded sample document.
    pub reset_requested: bool,
}
