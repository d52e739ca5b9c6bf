//! Outbound application events.
//!
//! The [`WidgetService`](super::service::WidgetService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::app::ports::{ConfigError, StorageError};
use crate::resolver::DisplayDecision;

/// Structured events emitted by the widget core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A refresh committed `decision` to a surface.
    Rendered {
        refresh: u64,
        decision: DisplayDecision,
        changed: bool,
    },

    /// A shared-storage read failed and was treated as absent.
    StorageReadFailed {
        key: String,
        error: StorageError,
    },

    /// The host bridge wrote new pet state.
    Published {
        identifier: Option<String>,
        message: Option<String>,
    },

    /// A configuration update was accepted.
    ConfigUpdated,

    /// A configuration update was rejected.
    ConfigRejected(ConfigError),
}
