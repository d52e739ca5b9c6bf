//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to                    |
//! |----------------|--------------------|--------------------------------|
//! | `log_sink`     | EventSink          | `log` facade                   |
//! | `prefs`        | StoragePort        | Shared prefs / app-group store |
//! |                | ConfigPort         |                                |
//! | `remote_views` | RenderSurface      | Android app-widget views       |
//! | `timeline`     | RenderSurface      | iOS widget timeline            |
//! | `time`         | ClockPort          | System wall clock              |

pub mod log_sink;
pub mod prefs;
pub mod remote_views;
pub mod time;
pub mod timeline;
