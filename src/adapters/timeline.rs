//! iOS timeline surface.
//!
//! A timeline provider answers three requests: a placeholder while the
//! gallery loads, a snapshot for previews, and the timeline itself.  The
//! first two never touch shared storage and show an empty pet; the
//! timeline carries one entry rendered from storage and asks to be
//! reloaded when that entry expires ([`ReloadPolicy::AtEnd`]).

use log::debug;
use serde::Serialize;

use crate::app::ports::{ClockPort, EventSink, RenderSurface, StoragePort};
use crate::app::service::WidgetService;
use crate::catalog::PetKind;

/// Body region as the SwiftUI view would draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BodyView {
    Image(PetKind),
    Text(String),
    Hidden,
}

/// Everything an entry view needs to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub bubble: Option<String>,
    pub body: BodyView,
    pub launch_uri: Option<String>,
}

impl WidgetView {
    const fn blank() -> Self {
        Self {
            bubble: None,
            body: BodyView::Hidden,
            launch_uri: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub date_unix_secs: u64,
    pub view: WidgetView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadPolicy {
    /// Request a new timeline once the last entry has been shown.
    AtEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub policy: ReloadPolicy,
}

/// Render surface that turns each commit into a timeline entry.
pub struct TimelineSurface<C: ClockPort> {
    clock: C,
    staged: WidgetView,
    entries: Vec<TimelineEntry>,
}

impl<C: ClockPort> TimelineSurface<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            staged: WidgetView::blank(),
            entries: Vec::new(),
        }
    }

    /// Gallery placeholder: empty pet, no storage access.
    pub fn placeholder(&self) -> TimelineEntry {
        self.blank_entry()
    }

    /// Preview snapshot: same as the placeholder.
    pub fn snapshot(&self) -> TimelineEntry {
        self.blank_entry()
    }

    /// Render one entry from shared storage and return the timeline.
    pub fn timeline(
        &mut self,
        service: &mut WidgetService,
        store: &impl StoragePort,
        sink: &mut impl EventSink,
    ) -> Timeline {
        service.refresh(store, self, sink);
        self.take_timeline()
    }

    /// Drain committed entries into a reload-at-end timeline.
    pub fn take_timeline(&mut self) -> Timeline {
        Timeline {
            entries: core::mem::take(&mut self.entries),
            policy: ReloadPolicy::AtEnd,
        }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    fn blank_entry(&self) -> TimelineEntry {
        TimelineEntry {
            date_unix_secs: self.clock.now_unix_secs(),
            view: WidgetView::blank(),
        }
    }
}

impl<C: ClockPort> RenderSurface for TimelineSurface<C> {
    fn show_bubble(&mut self, text: &str) {
        self.staged.bubble = Some(text.to_owned());
    }

    fn hide_bubble(&mut self) {
        self.staged.bubble = None;
    }

    fn show_image(&mut self, kind: PetKind) {
        self.staged.body = BodyView::Image(kind);
    }

    fn show_text(&mut self, text: &str) {
        self.staged.body = BodyView::Text(text.to_owned());
    }

    fn hide_body(&mut self) {
        self.staged.body = BodyView::Hidden;
    }

    fn set_launch_uri(&mut self, uri: &str) {
        self.staged.launch_uri = Some(uri.to_owned());
    }

    fn commit(&mut self) {
        let view = core::mem::replace(&mut self.staged, WidgetView::blank());
        let entry = TimelineEntry {
            date_unix_secs: self.clock.now_unix_secs(),
            view,
        };
        debug!("Timeline: entry at {}", entry.date_unix_secs);
        self.entries.push(entry);
    }
}
