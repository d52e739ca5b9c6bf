//! Fuzz target: shared-storage snapshot import + refresh
//!
//! Feeds arbitrary bytes to `PrefsAdapter::from_json` and, when they
//! parse, runs a full refresh.  A refresh must always commit exactly once,
//! whatever the store holds.
//!
//! cargo fuzz run fuzz_snapshot_import

#![no_main]

use libfuzzer_sys::fuzz_target;
use petwidget::adapters::prefs::PrefsAdapter;
use petwidget::adapters::remote_views;
use petwidget::app::events::AppEvent;
use petwidget::app::ports::EventSink;
use petwidget::app::service::WidgetService;
use petwidget::config::WidgetConfig;

struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(json) = core::str::from_utf8(data) else {
        return;
    };

    let mut app = WidgetService::new(WidgetConfig::default());
    let namespace = app.config().app_group.clone();
    let Ok(store) = PrefsAdapter::from_json(&namespace, json) else {
        return;
    };

    let views = remote_views::on_update(&mut app, &store, &[1], &mut NoopSink);
    assert_eq!(views.len(), 1);
    assert!(views[0].is_committed());
    assert_eq!(views[0].click_uri(), Some("petwidget://yard"));
});
