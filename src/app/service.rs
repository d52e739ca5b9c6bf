//! Widget service — the hexagonal core.
//!
//! [`WidgetService`] owns the live configuration and the last rendered
//! decision.  Every platform refresh callback funnels into
//! [`refresh`](WidgetService::refresh), which reads shared storage through
//! a [`StoragePort`], runs the resolver, and paints a [`RenderSurface`].
//!
//! ```text
//!  StoragePort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                  │     WidgetService       │
//! RenderSurface ◀──│  read · resolve · paint │
//!                  └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::resolver::{self, Body, DisplayDecision};

use super::commands::WidgetCommand;
use super::events::AppEvent;
use super::ports::{ConfigPort, EventSink, RenderSurface, StorageError, StoragePort};

// ───────────────────────────────────────────────────────────────
// WidgetService
// ───────────────────────────────────────────────────────────────

pub struct WidgetService {
    config: WidgetConfig,
    refresh_count: u64,
    last_decision: Option<DisplayDecision>,
}

impl WidgetService {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            refresh_count: 0,
            last_decision: None,
        }
    }

    /// Build the service from persisted configuration, falling back to
    /// defaults when nothing usable is stored.
    pub fn from_config_port(port: &impl ConfigPort) -> Self {
        let config = match port.load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Config load failed ({}), using defaults", e);
                WidgetConfig::default()
            }
        };
        Self::new(config)
    }

    // ── Refresh cycle ─────────────────────────────────────────

    /// Run one read → resolve → paint cycle.
    ///
    /// Storage failures degrade to absent values; a valid state is always
    /// committed.
    pub fn refresh(
        &mut self,
        store: &impl StoragePort,
        surface: &mut impl RenderSurface,
        sink: &mut impl EventSink,
    ) -> DisplayDecision {
        self.refresh_count += 1;

        let identifier = self.read_value(store, &self.config.pet_key, sink);
        let message = self.read_value(store, &self.config.message_key, sink);

        let decision = resolver::resolve(identifier.as_deref(), message.as_deref());
        self.apply_decision(&decision, surface);
        surface.set_launch_uri(&self.config.deep_link);
        surface.commit();

        let changed = self.last_decision.as_ref() != Some(&decision);
        if changed {
            info!("Widget decision changed: {:?}", decision);
        } else {
            debug!("Widget decision unchanged");
        }

        sink.emit(&AppEvent::Rendered {
            refresh: self.refresh_count,
            decision: decision.clone(),
            changed,
        });
        self.last_decision = Some(decision.clone());
        decision
    }

    /// Translate a decision into surface calls.
    pub fn apply_decision(&self, decision: &DisplayDecision, surface: &mut impl RenderSurface) {
        // ── Bubble ───────────────────────────────────────────
        match decision.bubble_text() {
            Some(text) => surface.show_bubble(text),
            None => surface.hide_bubble(),
        }

        // ── Body (image wins, then text, else nothing) ───────
        match decision.body() {
            Body::Image(kind) => surface.show_image(*kind),
            Body::Text(text) => surface.show_text(text),
            Body::Empty => surface.hide_body(),
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.
    pub fn handle_command(
        &mut self,
        cmd: WidgetCommand,
        store: &mut impl StoragePort,
        surface: &mut impl RenderSurface,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match cmd {
            WidgetCommand::Refresh => {
                self.refresh(&*store, surface, sink);
            }
            WidgetCommand::Publish {
                identifier,
                message,
            } => {
                self.publish(store, identifier.as_deref(), message.as_deref(), sink)?;
                self.refresh(&*store, surface, sink);
            }
            WidgetCommand::Clear => {
                self.publish(store, None, None, sink)?;
                self.refresh(&*store, surface, sink);
            }
            WidgetCommand::UpdateConfig(config) => {
                if let Err(e) = config.validate() {
                    warn!("Rejected config update: {}", e);
                    sink.emit(&AppEvent::ConfigRejected(e));
                    return Err(e.into());
                }
                self.config = config;
                sink.emit(&AppEvent::ConfigUpdated);
                info!("Configuration updated at runtime");
            }
        }
        Ok(())
    }

    /// Host-app side: persist pet state into shared storage.
    ///
    /// `None` deletes the key so the widget reads it as absent.
    pub fn publish(
        &self,
        store: &mut impl StoragePort,
        identifier: Option<&str>,
        message: Option<&str>,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        let ns = &self.config.app_group;
        for (key, value) in [
            (&self.config.pet_key, identifier),
            (&self.config.message_key, message),
        ] {
            match value {
                Some(v) => store.write(ns, key, v.as_bytes())?,
                None => store.delete(ns, key)?,
            }
        }

        sink.emit(&AppEvent::Published {
            identifier: identifier.map(str::to_owned),
            message: message.map(str::to_owned),
        });
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Total refreshes executed since construction.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub fn last_decision(&self) -> Option<&DisplayDecision> {
        self.last_decision.as_ref()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Read one string value; any failure reads as absent.
    fn read_value(
        &self,
        store: &impl StoragePort,
        key: &str,
        sink: &mut impl EventSink,
    ) -> Option<String> {
        match store.read_string(&self.config.app_group, key) {
            Ok(value) => Some(value),
            Err(StorageError::NotFound) => None,
            Err(error) => {
                warn!("Shared storage read of '{}' failed: {}", key, error);
                sink.emit(&AppEvent::StorageReadFailed {
                    key: key.to_owned(),
                    error,
                });
                None
            }
        }
    }
}
