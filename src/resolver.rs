//! Pet display resolver.
//!
//! Maps the two raw strings a host app leaves in shared storage to a
//! [`DisplayDecision`].  Pure and total: every input, including `None`,
//! empty and garbage strings, produces a valid decision.
//!
//! ```text
//!  raw id ──▶ trim ──▶ last path segment ──▶ strip extension ──▶ lower-case
//!                                                                   │
//!               ┌───────────────────────────────────────────────────┘
//!               ▼
//!      supported? ──yes──▶ Image(kind)
//!         │ no
//!      legacy alias? ──yes──▶ Image(target)
//!         │ no
//!      Text(raw id)
//! ```

use serde::Serialize;

use crate::catalog::{self, PetKind};

/// What occupies the pet's body region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Body {
    /// Bundled image asset.
    Image(PetKind),
    /// Raw identifier shown verbatim (emoji and other non-asset values).
    Text(String),
    /// Nothing to show.
    Empty,
}

/// Rendering decision for one refresh.
///
/// The body is a single enum, so an image and fallback text can never both
/// be present.  The bubble is only ever `Some` with non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDecision {
    body: Body,
    bubble: Option<String>,
}

impl DisplayDecision {
    /// Decision with nothing visible.
    pub const fn empty() -> Self {
        Self {
            body: Body::Empty,
            bubble: None,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn image_asset(&self) -> Option<PetKind> {
        match self.body {
            Body::Image(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn fallback_text(&self) -> Option<&str> {
        match &self.body {
            Body::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn bubble_visible(&self) -> bool {
        self.bubble.is_some()
    }

    pub fn bubble_text(&self) -> Option<&str> {
        self.bubble.as_deref()
    }
}

impl Default for DisplayDecision {
    fn default() -> Self {
        Self::empty()
    }
}

/// Normalize a raw identifier into a lookup candidate.
///
/// Returns `None` when the identifier is blank.
pub fn canonicalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);

    let stem = match segment.rfind('.') {
        Some(0) | None => segment,
        Some(idx) => &segment[..idx],
    };

    Some(stem.to_lowercase())
}

/// Resolve raw identifier and message into a [`DisplayDecision`].
pub fn resolve(raw_identifier: Option<&str>, raw_message: Option<&str>) -> DisplayDecision {
    let bubble = raw_message
        .filter(|message| !message.is_empty())
        .map(str::to_owned);

    let body = match raw_identifier {
        None => Body::Empty,
        Some(raw) => match canonicalize(raw) {
            None => Body::Empty,
            Some(candidate) => match catalog::lookup(&candidate) {
                Some(kind) => Body::Image(kind),
                None => Body::Text(raw.to_owned()),
            },
        },
    };

    DisplayDecision { body, bubble }
}
