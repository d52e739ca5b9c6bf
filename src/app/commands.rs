//! Inbound commands to the widget service.
//!
//! Platform lifecycle callbacks (update broadcasts, timeline reloads,
//! snapshot requests) all collapse into [`WidgetCommand::Refresh`].  The
//! remaining variants come from the host app side.

use crate::config::WidgetConfig;

/// Commands that external adapters can send into the widget core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    /// Re-read shared storage and re-render now.
    Refresh,

    /// Host app saved new pet state; write it to shared storage and re-render.
    /// `None` clears the corresponding key.
    Publish {
        identifier: Option<String>,
        message: Option<String>,
    },

    /// Remove both keys and re-render the empty state.
    Clear,

    /// Validate and hot-swap configuration.
    UpdateConfig(WidgetConfig),
}
