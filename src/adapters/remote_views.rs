//! Android remote-views surface.
//!
//! Records the view operations an app-widget provider would batch into a
//! `RemoteViews` for the widget layout, in the order they are issued.
//! [`on_update`] mirrors the provider's update callback: one surface per
//! widget instance, each rendered and committed independently.
//!
//! | View ID                 | Role                         |
//! |-------------------------|------------------------------|
//! | `widget_root`           | tap target (deep link)       |
//! | `message_bubble_layout` | speech bubble container      |
//! | `widget_message_text`   | speech bubble text           |
//! | `widget_pet_image`      | pet drawable                 |
//! | `widget_emoji_text`     | fallback text / emoji        |

use log::{debug, warn};

use crate::app::ports::{EventSink, RenderSurface, StoragePort};
use crate::app::service::WidgetService;
use crate::catalog::PetKind;

/// A full render issues at most six ops: bubble (2), body (3), launch URI (1).
const MAX_VIEW_OPS: usize = 8;

/// Views in the widget layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    WidgetRoot,
    MessageBubbleLayout,
    WidgetMessageText,
    WidgetPetImage,
    WidgetEmojiText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Gone,
}

/// One staged remote-views call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    SetVisibility(ViewId, Visibility),
    SetText(ViewId, String),
    /// Drawable resource name.
    SetImageResource(ViewId, &'static str),
    SetOnClickUri(ViewId, String),
}

/// Staged remote views for one widget instance.
#[derive(Debug)]
pub struct RemoteViewsSurface {
    app_widget_id: i32,
    ops: heapless::Vec<ViewOp, MAX_VIEW_OPS>,
    committed: bool,
}

impl RemoteViewsSurface {
    pub fn new(app_widget_id: i32) -> Self {
        Self {
            app_widget_id,
            ops: heapless::Vec::new(),
            committed: false,
        }
    }

    pub fn app_widget_id(&self) -> i32 {
        self.app_widget_id
    }

    pub fn ops(&self) -> &[ViewOp] {
        &self.ops
    }

    /// Whether the current frame was handed to the widget manager.
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Final visibility of `view` after all staged ops.
    pub fn visibility(&self, view: ViewId) -> Option<Visibility> {
        self.ops.iter().rev().find_map(|op| match op {
            ViewOp::SetVisibility(id, v) if *id == view => Some(*v),
            _ => None,
        })
    }

    /// Final text of `view` after all staged ops.
    pub fn text(&self, view: ViewId) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            ViewOp::SetText(id, t) if *id == view => Some(t.as_str()),
            _ => None,
        })
    }

    /// Drawable currently set on the pet image view.
    pub fn image_resource(&self) -> Option<&'static str> {
        self.ops.iter().rev().find_map(|op| match op {
            ViewOp::SetImageResource(ViewId::WidgetPetImage, name) => Some(*name),
            _ => None,
        })
    }

    pub fn click_uri(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            ViewOp::SetOnClickUri(ViewId::WidgetRoot, uri) => Some(uri.as_str()),
            _ => None,
        })
    }

    /// Stage `op`; the first op after a commit starts a new frame.
    fn push(&mut self, op: ViewOp) {
        if self.committed {
            self.ops.clear();
            self.committed = false;
        }
        if let Err(op) = self.ops.push(op) {
            warn!(
                "RemoteViews[{}]: op buffer full, dropping {:?}",
                self.app_widget_id, op
            );
        }
    }
}

impl RenderSurface for RemoteViewsSurface {
    fn show_bubble(&mut self, text: &str) {
        self.push(ViewOp::SetVisibility(
            ViewId::MessageBubbleLayout,
            Visibility::Visible,
        ));
        self.push(ViewOp::SetText(ViewId::WidgetMessageText, text.to_owned()));
    }

    fn hide_bubble(&mut self) {
        self.push(ViewOp::SetVisibility(
            ViewId::MessageBubbleLayout,
            Visibility::Gone,
        ));
    }

    fn show_image(&mut self, kind: PetKind) {
        self.push(ViewOp::SetVisibility(ViewId::WidgetPetImage, Visibility::Visible));
        self.push(ViewOp::SetImageResource(
            ViewId::WidgetPetImage,
            kind.asset_name(),
        ));
        self.push(ViewOp::SetVisibility(ViewId::WidgetEmojiText, Visibility::Gone));
    }

    fn show_text(&mut self, text: &str) {
        self.push(ViewOp::SetVisibility(ViewId::WidgetPetImage, Visibility::Gone));
        self.push(ViewOp::SetVisibility(ViewId::WidgetEmojiText, Visibility::Visible));
        self.push(ViewOp::SetText(ViewId::WidgetEmojiText, text.to_owned()));
    }

    fn hide_body(&mut self) {
        self.push(ViewOp::SetVisibility(ViewId::WidgetPetImage, Visibility::Gone));
        self.push(ViewOp::SetVisibility(ViewId::WidgetEmojiText, Visibility::Gone));
    }

    fn set_launch_uri(&mut self, uri: &str) {
        self.push(ViewOp::SetOnClickUri(ViewId::WidgetRoot, uri.to_owned()));
    }

    fn commit(&mut self) {
        self.committed = true;
        debug!(
            "RemoteViews[{}]: updateAppWidget with {} ops",
            self.app_widget_id,
            self.ops.len()
        );
    }
}

/// Render every widget instance from the same shared storage.
pub fn on_update(
    service: &mut WidgetService,
    store: &impl StoragePort,
    app_widget_ids: &[i32],
    sink: &mut impl EventSink,
) -> Vec<RemoteViewsSurface> {
    app_widget_ids
        .iter()
        .map(|&id| {
            let mut views = RemoteViewsSurface::new(id);
            service.refresh(store, &mut views, sink);
            views
        })
        .collect()
}
