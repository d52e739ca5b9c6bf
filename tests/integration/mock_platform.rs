//! Mock platform adapters for integration tests.
//!
//! Records every surface call so tests can assert on the full render
//! history, and offers a store whose reads can be made to fail.

use petwidget::app::events::AppEvent;
use petwidget::app::ports::{EventSink, RenderSurface, StorageError, StoragePort};
use petwidget::catalog::PetKind;
use std::collections::{HashMap, HashSet};

// ── Surface call record ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ShowBubble(String),
    HideBubble,
    ShowImage(PetKind),
    ShowText(String),
    HideBody,
    LaunchUri(String),
    Commit,
}

// ── MockSurface ───────────────────────────────────────────────

pub struct MockSurface {
    pub calls: Vec<SurfaceCall>,
}

#[allow(dead_code)]
impl MockSurface {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn commits(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == SurfaceCall::Commit)
            .count()
    }

    /// Calls issued for the most recent commit, excluding the commit itself.
    pub fn last_frame(&self) -> &[SurfaceCall] {
        let end = self
            .calls
            .iter()
            .rposition(|c| *c == SurfaceCall::Commit)
            .unwrap_or(self.calls.len());
        let start = self.calls[..end]
            .iter()
            .rposition(|c| *c == SurfaceCall::Commit)
            .map_or(0, |i| i + 1);
        &self.calls[start..end]
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for MockSurface {
    fn show_bubble(&mut self, text: &str) {
        self.calls.push(SurfaceCall::ShowBubble(text.to_owned()));
    }

    fn hide_bubble(&mut self) {
        self.calls.push(SurfaceCall::HideBubble);
    }

    fn show_image(&mut self, kind: PetKind) {
        self.calls.push(SurfaceCall::ShowImage(kind));
    }

    fn show_text(&mut self, text: &str) {
        self.calls.push(SurfaceCall::ShowText(text.to_owned()));
    }

    fn hide_body(&mut self) {
        self.calls.push(SurfaceCall::HideBody);
    }

    fn set_launch_uri(&mut self, uri: &str) {
        self.calls.push(SurfaceCall::LaunchUri(uri.to_owned()));
    }

    fn commit(&mut self) {
        self.calls.push(SurfaceCall::Commit);
    }
}

// ── FlakyStore ────────────────────────────────────────────────

/// In-memory store; keys listed in `failing` return `IoError` on read.
pub struct FlakyStore {
    store: HashMap<String, Vec<u8>>,
    pub failing: HashSet<String>,
    pub read_only: bool,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            failing: HashSet::new(),
            read_only: false,
        }
    }

    pub fn fail_reads_of(mut self, key: &str) -> Self {
        self.failing.insert(key.to_owned());
        self
    }
}

impl Default for FlakyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoragePort for FlakyStore {
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError> {
        if self.failing.contains(key) {
            return Err(StorageError::IoError);
        }
        match self.store.get(&format!("{}::{}", namespace, key)) {
            Some(v) => {
                let n = v.len().min(buf.len());
                buf[..n].copy_from_slice(&v[..n]);
                Ok(n)
            }
            None => Err(StorageError::NotFound),
        }
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Full);
        }
        self.store
            .insert(format!("{}::{}", namespace, key), data.to_vec());
        Ok(())
    }

    fn exists(&self, namespace: &str, key: &str) -> bool {
        self.store.contains_key(&format!("{}::{}", namespace, key))
    }

    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::IoError);
        }
        self.store.remove(&format!("{}::{}", namespace, key));
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn storage_failures(&self) -> Vec<(&str, StorageError)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::StorageReadFailed { key, error } => Some((key.as_str(), *error)),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
