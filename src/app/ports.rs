//! Port traits — the hexagonal boundary between the widget core and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ WidgetService (domain)
//! ```
//!
//! Driven adapters (shared storage, render surfaces, event sinks, clocks)
//! implement these traits.  The [`WidgetService`](super::service::WidgetService)
//! consumes them via generics, so the resolver never touches a platform API.
//!
//! ## Failure notes
//!
//! - **StoragePort** read failures are never fatal to a refresh; the service
//!   treats them as absent values.
//! - **ConfigPort** implementations MUST validate before persisting.

use crate::catalog::PetKind;
use crate::config::WidgetConfig;

// ───────────────────────────────────────────────────────────────
// Storage port (driven adapter: shared prefs / app group ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Key-value storage shared between the host app and the widget.
///
/// Keys are namespaced (app group on iOS, preferences file on Android).
pub trait StoragePort {
    /// Read a value.  Returns the number of bytes written to `buf`.
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value atomically.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Delete a key.  Returns `Ok(())` even if the key didn't exist.
    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError>;

    /// Check whether a key exists without reading it.
    fn exists(&self, namespace: &str, key: &str) -> bool;

    /// Read a whole value as UTF-8 text, growing the buffer until it fits.
    ///
    /// A read that fills the buffer exactly may be truncated, so it is
    /// retried with twice the room.
    fn read_string(&self, namespace: &str, key: &str) -> Result<String, StorageError> {
        let mut buf = vec![0u8; READ_CHUNK_BYTES];
        loop {
            let len = self.read(namespace, key, &mut buf)?;
            if len < buf.len() {
                buf.truncate(len);
                break;
            }
            buf.resize(buf.len() * 2, 0);
        }
        String::from_utf8(buf).map_err(|_| StorageError::InvalidData)
    }
}

/// Initial buffer for [`StoragePort::read_string`].
pub const READ_CHUNK_BYTES: usize = 256;

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists widget configuration.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`WidgetConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<WidgetConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &WidgetConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Render surface port (driven adapter: domain → native widget views)
// ───────────────────────────────────────────────────────────────

/// Native UI primitives a platform widget exposes.
///
/// One refresh issues a bubble call, a body call, the launch URI, then
/// [`commit`](RenderSurface::commit).
pub trait RenderSurface {
    /// Show the message bubble with `text`.
    fn show_bubble(&mut self, text: &str);

    /// Hide the message bubble.
    fn hide_bubble(&mut self);

    /// Show the bundled image for `kind` and hide the text element.
    fn show_image(&mut self, kind: PetKind);

    /// Show `text` literally and hide the image element.
    fn show_text(&mut self, text: &str);

    /// Hide both body elements.
    fn hide_body(&mut self);

    /// Wire the tap action to `uri`.
    fn set_launch_uri(&mut self, uri: &str);

    /// Push the staged state to the platform.
    fn commit(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Wall-clock source for timeline entry dates.
pub trait ClockPort {
    /// Seconds since the Unix epoch.
    fn now_unix_secs(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage (first launch).
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Underlying storage is full.
    StorageFull,
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from [`StoragePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Requested key does not exist.
    NotFound,
    /// Storage is full.
    Full,
    /// Generic I/O error (storage unavailable).
    IoError,
    /// Stored bytes are not a value of the expected type.
    InvalidData,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::StorageFull => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::Full => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
            Self::InvalidData => write!(f, "invalid data"),
        }
    }
}

impl From<StorageError> for ConfigError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound => Self::NotFound,
            StorageError::Full => Self::StorageFull,
            StorageError::IoError => Self::IoError,
            StorageError::InvalidData => Self::Corrupted,
        }
    }
}
