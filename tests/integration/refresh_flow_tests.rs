//! Integration tests for the storage → resolver → surface refresh cycle.

use crate::mock_platform::{FlakyStore, MockSurface, RecordingSink, SurfaceCall};

use petwidget::adapters::prefs::PrefsAdapter;
use petwidget::app::commands::WidgetCommand;
use petwidget::app::events::AppEvent;
use petwidget::app::ports::{StorageError, StoragePort};
use petwidget::app::service::WidgetService;
use petwidget::catalog::PetKind;
use petwidget::config::WidgetConfig;

const NS: &str = "group.com.ssseregi.petWidgetApp";

fn make_app() -> (WidgetService, MockSurface, RecordingSink) {
    (
        WidgetService::new(WidgetConfig::default()),
        MockSurface::new(),
        RecordingSink::new(),
    )
}

#[test]
fn legacy_id_with_message_paints_image_and_bubble() {
    let (mut app, mut surface, mut sink) = make_app();
    let store = PrefsAdapter::from_json(NS, r#"{"pet_emoji":"cat_01","pet_message":"Hi!"}"#)
        .unwrap();

    app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(
        surface.last_frame(),
        &[
            SurfaceCall::ShowBubble("Hi!".into()),
            SurfaceCall::ShowImage(PetKind::Cat),
            SurfaceCall::LaunchUri("petwidget://yard".into()),
        ]
    );
    assert_eq!(surface.commits(), 1);
}

#[test]
fn path_like_identifier_from_host_resolves_to_asset() {
    let (mut app, mut surface, mut sink) = make_app();
    let store =
        PrefsAdapter::from_json(NS, r#"{"pet_emoji":"assets/images/pets/Horse_1.png"}"#).unwrap();

    let d = app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(d.image_asset(), Some(PetKind::Horse1));
    assert!(surface.last_frame().contains(&SurfaceCall::HideBubble));
}

#[test]
fn emoji_identifier_is_painted_as_text() {
    let (mut app, mut surface, mut sink) = make_app();
    let store = PrefsAdapter::from_json(NS, r#"{"pet_emoji":"🐹"}"#).unwrap();

    app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(
        surface.last_frame(),
        &[
            SurfaceCall::HideBubble,
            SurfaceCall::ShowText("🐹".into()),
            SurfaceCall::LaunchUri("petwidget://yard".into()),
        ]
    );
}

#[test]
fn empty_store_renders_valid_empty_state() {
    let (mut app, mut surface, mut sink) = make_app();
    let store = PrefsAdapter::new();

    let d = app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(d.image_asset(), None);
    assert_eq!(d.fallback_text(), None);
    assert!(!d.bubble_visible());
    assert!(surface.last_frame().contains(&SurfaceCall::HideBody));
    assert!(
        sink.storage_failures().is_empty(),
        "absent keys are not failures"
    );
}

#[test]
fn unavailable_storage_degrades_to_absent_and_still_commits() {
    let (mut app, mut surface, mut sink) = make_app();
    let mut store = FlakyStore::new().fail_reads_of("pet_emoji");
    store.write(NS, "pet_emoji", b"frog").unwrap();
    store.write(NS, "pet_message", b"still here").unwrap();

    let d = app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(d.image_asset(), None);
    assert_eq!(d.bubble_text(), Some("still here"));
    assert_eq!(surface.commits(), 1);
    assert_eq!(
        sink.storage_failures(),
        vec![("pet_emoji", StorageError::IoError)]
    );
}

#[test]
fn non_utf8_value_reads_as_absent() {
    let (mut app, mut surface, mut sink) = make_app();
    let mut store = PrefsAdapter::new();
    store.write(NS, "pet_emoji", &[0xC3, 0x28]).unwrap();

    let d = app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(d.fallback_text(), None);
    assert_eq!(
        sink.storage_failures(),
        vec![("pet_emoji", StorageError::InvalidData)]
    );
}

#[test]
fn long_values_render_whole() {
    for len in [1023, 1024, 1025, 8192] {
        let (mut app, mut surface, mut sink) = make_app();
        let mut store = FlakyStore::new();
        let message = "m".repeat(len);
        let identifier = format!("{}/frog.png", "d".repeat(len));
        store.write(NS, "pet_emoji", identifier.as_bytes()).unwrap();
        store.write(NS, "pet_message", message.as_bytes()).unwrap();

        let d = app.refresh(&store, &mut surface, &mut sink);

        assert_eq!(d.image_asset(), Some(PetKind::Frog), "len {len}");
        assert_eq!(d.bubble_text(), Some(message.as_str()), "len {len}");
        assert!(sink.storage_failures().is_empty(), "len {len}");
    }
}

#[test]
fn emoji_message_of_1024_bytes_shows_bubble() {
    let (mut app, mut surface, mut sink) = make_app();
    let message = "🐾".repeat(256);
    let json =
        serde_json::json!({ "pet_emoji": "cat", "pet_message": message.as_str() }).to_string();
    let store = PrefsAdapter::from_json(NS, &json).unwrap();

    let d = app.refresh(&store, &mut surface, &mut sink);

    assert!(d.bubble_visible());
    assert_eq!(surface.last_frame()[0], SurfaceCall::ShowBubble(message));
}

#[test]
fn non_string_snapshot_value_reads_as_absent() {
    let (mut app, mut surface, mut sink) = make_app();
    let store = PrefsAdapter::from_json(NS, r#"{"pet_emoji": 42, "pet_message": "hey"}"#).unwrap();

    let d = app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(d.image_asset(), None);
    assert_eq!(d.fallback_text(), None);
    assert_eq!(d.bubble_text(), Some("hey"));
}

#[test]
fn refresh_command_rerenders_latest_state() {
    let (mut app, mut surface, mut sink) = make_app();
    let mut store = PrefsAdapter::new();

    app.handle_command(WidgetCommand::Refresh, &mut store, &mut surface, &mut sink).unwrap();
    store.write(NS, "pet_emoji", b"rhino").unwrap();
    app.handle_command(WidgetCommand::Refresh, &mut store, &mut surface, &mut sink).unwrap();

    assert_eq!(app.refresh_count(), 2);
    assert_eq!(
        app.last_decision().and_then(|d| d.image_asset()),
        Some(PetKind::Rhino)
    );
    let changed: Vec<bool> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Rendered { changed, .. } => Some(*changed),
            _ => None,
        })
        .collect();
    assert_eq!(changed, vec![true, true]);
}

#[test]
fn updated_config_changes_keys_and_deep_link() {
    let (mut app, mut surface, mut sink) = make_app();
    let mut store = PrefsAdapter::new();
    store.write("HomeWidgetPreferences", "flutter.pet", b"dog_1").unwrap();

    let cfg = WidgetConfig {
        app_group: "HomeWidgetPreferences".into(),
        pet_key: "flutter.pet".into(),
        deep_link: "petwidget://friends".into(),
        ..Default::default()
    };
    app.handle_command(
        WidgetCommand::UpdateConfig(cfg),
        &mut store,
        &mut surface,
        &mut sink,
    )
    .unwrap();
    let d = app.refresh(&store, &mut surface, &mut sink);

    assert_eq!(d.image_asset(), Some(PetKind::Dog1));
    assert!(
        surface
            .last_frame()
            .contains(&SurfaceCall::LaunchUri("petwidget://friends".into()))
    );
    assert!(sink.events.contains(&AppEvent::ConfigUpdated));
}
