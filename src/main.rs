#![warn(clippy::all)]

//! Globe Workbench - an interactive 3-D globe for GeoJSON data.
//!
//! Loads a GeoJSON document, runs it through the geometry pipeline
//! (container flattening, segment subdivision, surface projection),
//! and draws the resulting line primitives on an egui canvas as a
//! rotatable wireframe globe or a flat plane.

mod file_ops;
mod geo;
mod state;
mod ui;

use eframe::egui;
use file_ops::{DocumentLoadChannel, LoadResult};
use geo::{build_primitives, graticule, Primitive, Projection};
use state::AppState;

/// Rough world outlines and a few marker features, embedded so the
/// app has something to show before a document is loaded.
static SAMPLE_GEOJSON: &str = include_str!("../assets/sample.geojson");

const SAMPLE_NAME: &str = "sample.geojson";

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional surface token as the first argument, e.g.
    // `globe-workbench plane`. Rejected before the app starts.
    let shape = match std::env::args().nth(1) {
        Some(token) => match Projection::from_token(&token) {
            Ok(shape) => Some(shape),
            Err(e) => {
                log::error!("{e}");
                eprintln!("{e} (expected \"sphere\" or \"plane\")");
                std::process::exit(2);
            }
        },
        None => None,
    };

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Globe Workbench",
        native_options,
        Box::new(move |_cc| Ok(Box::new(GlobeApp::new(shape)))),
    )
}

/// Main application state and logic.
pub struct GlobeApp {
    /// Application state shared with the UI panels.
    state: AppState,

    /// Channel for async document loading.
    loader: DocumentLoadChannel,

    /// The decoded GeoJSON document currently on display.
    document: Option<serde_json::Value>,

    /// Primitives assembled from the document.
    primitives: Vec<Primitive>,

    /// Graticule strips, rebuilt alongside the document primitives.
    grid: Vec<Primitive>,
}

impl GlobeApp {
    /// Creates a new GlobeApp instance showing the embedded sample.
    pub fn new(shape: Option<Projection>) -> Self {
        let mut state = AppState::default();
        if let Some(shape) = shape {
            state.viz.shape = shape;
        }
        state.document_name = SAMPLE_NAME.to_string();
        state.rebuild_requested = true;

        Self {
            state,
            loader: DocumentLoadChannel::new(),
            document: parse_sample(),
            primitives: Vec::new(),
            grid: Vec::new(),
        }
    }

    /// Re-runs the geometry pipeline against the current document and
    /// view parameters. Pipeline errors clear the display and are
    /// surfaced in the status line; there is nothing to retry.
    fn rebuild(&mut self) {
        let radius = self.state.viz.radius;
        let shape = self.state.viz.shape;

        self.grid = if self.state.viz.grid_enabled && shape == Projection::Sphere {
            graticule(radius, self.state.viz.grid_circles)
        } else {
            Vec::new()
        };

        let Some(document) = &self.document else {
            self.primitives.clear();
            self.state.status_message = "No document loaded".to_string();
            return;
        };

        match build_primitives(document, radius, shape) {
            Ok(primitives) => {
                let marker_count = primitives
                    .iter()
                    .filter(|p| matches!(p, Primitive::Marker(_)))
                    .count();
                if marker_count > 0 {
                    // Emitted but never drawn: the line renderer has
                    // no point primitive (see ui::canvas).
                    log::error!(
                        "cannot render {marker_count} point marker(s): unsupported by the line renderer"
                    );
                }

                log::info!(
                    "populated {} primitive(s) from {}",
                    primitives.len(),
                    self.state.document_name
                );
                self.state.status_message = format!(
                    "{}: {} primitive(s)",
                    self.state.document_name,
                    primitives.len()
                );
                self.primitives = primitives;
            }
            Err(e) => {
                self.primitives.clear();
                log::error!("failed to populate from {}: {e}", self.state.document_name);
                self.state.status_message = format!("Error: {e}");
            }
        }
    }
}

/// Decodes the embedded sample document.
fn parse_sample() -> Option<serde_json::Value> {
    match serde_json::from_str(SAMPLE_GEOJSON) {
        Ok(document) => Some(document),
        Err(e) => {
            log::error!("embedded sample is not valid JSON: {e}");
            None
        }
    }
}

impl eframe::App for GlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a completed document load.
        if let Some(result) = self.loader.try_recv() {
            match result {
                LoadResult::Loaded {
                    file_name,
                    document,
                } => {
                    log::info!("loaded document: {}", file_name);
                    self.document = Some(document);
                    self.state.document_name = file_name;
                    self.state.rebuild_requested = true;
                }
                LoadResult::Cancelled => {
                    self.state.status_message = "File selection cancelled".to_string();
                }
                LoadResult::Failed(msg) => {
                    log::error!("{msg}");
                    self.state.status_message = msg;
                }
            }
        }

        if self.state.load_requested {
            self.state.load_requested = false;
            self.loader.pick_document(ctx.clone());
        }

        if self.state.reset_requested {
            self.state.reset_requested = false;
            self.document = parse_sample();
            self.state.document_name = SAMPLE_NAME.to_string();
            self.state.rebuild_requested = true;
        }

        if self.state.rebuild_requested {
            self.state.rebuild_requested = false;
            self.rebuild();
        }

        ui::render_side_panel(ctx, &mut self.state);
        ui::render_canvas(ctx, &mut self.state, &self.primitives, &self.grid);
    }
}
