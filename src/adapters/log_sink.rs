//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured widget events to the
//! `log` facade.  The preview binary routes these through `env_logger`.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::resolver::Body;

/// Adapter that logs every [`AppEvent`].
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Rendered {
                refresh,
                decision,
                changed,
            } => {
                let body = match decision.body() {
                    Body::Image(kind) => format!("image={}", kind),
                    Body::Text(text) => format!("text={:?}", text),
                    Body::Empty => "empty".to_owned(),
                };
                info!(
                    "RENDER | #{} | {} | bubble={:?} | {}",
                    refresh,
                    body,
                    decision.bubble_text(),
                    if *changed { "changed" } else { "same" },
                );
            }
            AppEvent::StorageReadFailed { key, error } => {
                warn!("STORE | read '{}' failed: {} (treated as absent)", key, error);
            }
            AppEvent::Published {
                identifier,
                message,
            } => {
                info!("STORE | published pet={:?} message={:?}", identifier, message);
            }
            AppEvent::ConfigUpdated => {
                info!("CONFIG | updated");
            }
            AppEvent::ConfigRejected(e) => {
                warn!("CONFIG | rejected: {}", e);
            }
        }
    }
}
