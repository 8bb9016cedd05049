//! Async GeoJSON document loading.
//!
//! Uses channel-based communication to bridge the async file dialog
//! with egui's synchronous update loop. This is the pipeline's only
//! suspension point: once the decoded document is delivered, all
//! geometry processing is synchronous.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Outcome of a document load request.
pub enum LoadResult {
    /// A document was picked and decoded.
    Loaded {
        file_name: String,
        document: serde_json::Value,
    },
    /// The user dismissed the dialog.
    Cancelled,
    /// The file could not be read or was not valid JSON.
    Failed(String),
}

/// Channel-based loader for async file dialog integration.
///
/// File dialogs are async but egui's `update()` is synchronous. This
/// struct provides a channel to pass results from the async load task
/// back to the UI thread.
pub struct DocumentLoadChannel {
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl Default for DocumentLoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns a file dialog on a worker thread, decoding the picked
    /// file as JSON. The result is sent through the channel and
    /// `ctx.request_repaint()` wakes the UI.
    pub fn pick_document(&self, ctx: egui::Context) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = pollster::block_on(async_load_document());
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed load.
    pub fn try_recv(&self) -> Option<LoadResult> {
        self.receiver.try_recv().ok()
    }
}

/// Async document picker implementation using rfd.
async fn async_load_document() -> LoadResult {
    let Some(file) = rfd::AsyncFileDialog::new()
        .set_title("Select GeoJSON File")
        .add_filter("GeoJSON", &["geojson", "json"])
        .pick_file()
        .await
    else {
        return LoadResult::Cancelled;
    };

    let file_name = file.file_name();
    let bytes = file.read().await;

    match serde_json::from_slice(&bytes) {
        Ok(document) => LoadResult::Loaded {
            file_name,
            document,
        },
        Err(e) => LoadResult::Failed(format!("failed to decode {}: {}", file_name, e)),
    }
}
