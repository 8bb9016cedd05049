//! UI modules for the Globe Workbench application.
//!
//! The UI is split into two panels:
//! - Side panel: surface, graticule, and document controls
//! - Central canvas: the globe visualization

mod canvas;
mod side_panel;

pub use canvas::render_canvas;
pub use side_panel::render_side_panel;
