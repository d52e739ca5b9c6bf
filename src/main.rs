//! PetWidget preview — renders one widget refresh on the host.
//!
//! ```text
//! petwidget [--platform android|ios] [SNAPSHOT.json]
//! ```
//!
//! `SNAPSHOT.json` is a flat object of shared-storage values, e.g.
//! `{"pet_emoji": "cat_01", "pet_message": "Hi!"}`.  Without it the store
//! is empty.  The resolved decision (Android) or timeline (iOS) is printed
//! as JSON on stdout; logs go to stderr under `RUST_LOG`.
//!
//! ```text
//!  snapshot ──▶ PrefsAdapter ──▶ WidgetService ──▶ RemoteViewsSurface
//!                                              └─▶ TimelineSurface
//! ```
#![deny(unused_must_use)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use petwidget::adapters::log_sink::LogEventSink;
use petwidget::adapters::prefs::PrefsAdapter;
use petwidget::adapters::remote_views;
use petwidget::adapters::time::SystemClock;
use petwidget::adapters::timeline::TimelineSurface;
use petwidget::app::service::WidgetService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Platform {
    Android,
    Ios,
}

#[derive(Parser)]
#[command(name = "petwidget")]
#[command(about = "Render one pet widget refresh from a shared-storage snapshot", long_about = None)]
struct Args {
    /// Widget surface to render through
    #[arg(long, value_enum, default_value_t = Platform::Android)]
    platform: Platform,

    /// Flat JSON object of shared-storage values
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_store = PrefsAdapter::new();
    let mut service = WidgetService::from_config_port(&config_store);
    let namespace = service.config().app_group.clone();

    let store = match &args.snapshot {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            PrefsAdapter::from_json(&namespace, &text)
                .map_err(|e| anyhow::anyhow!("parsing snapshot {}: {e}", path.display()))?
        }
        None => PrefsAdapter::new(),
    };

    info!(
        "Rendering {} ({:?}) from '{}'",
        service.config().widget_kind,
        args.platform,
        namespace
    );

    let mut sink = LogEventSink::new();
    let output = match args.platform {
        Platform::Android => {
            remote_views::on_update(&mut service, &store, &[0], &mut sink);
            let decision = service
                .last_decision()
                .context("refresh produced no decision")?;
            serde_json::to_string_pretty(decision)?
        }
        Platform::Ios => {
            let mut surface = TimelineSurface::new(SystemClock::new());
            let timeline = surface.timeline(&mut service, &store, &mut sink);
            serde_json::to_string_pretty(&timeline)?
        }
    };

    println!("{output}");
    Ok(())
}
