//! End-to-end row behavior: entry → element tree → click → actions → collaborators.

use marketplace_pane::app::{dispatch, handle_gesture, MarketplaceActions, Telemetry};
use marketplace_pane::ui::{render_item, Element, Gesture, ItemView, Node, Tag};
use marketplace_pane::{InstallState, ListingEntry};

#[derive(Default)]
struct RecordingHost {
    installs: Vec<String>,
    closes: usize,
    paths: Vec<String>,
}

impl MarketplaceActions for RecordingHost {
    fn install_plugin(&mut self, id: &str) {
        self.installs.push(id.to_string());
    }

    fn close_marketplace_modal(&mut self) {
        self.closes += 1;
    }

    fn navigate(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}

#[derive(Default)]
struct RecordingTelemetry {
    events: Vec<(String, String)>,
}

impl Telemetry for RecordingTelemetry {
    fn track_event(&mut self, category: &str, event: &str) {
        self.events.push((category.to_string(), event.to_string()));
    }
}

fn listed(id: &str) -> ListingEntry {
    let mut entry = ListingEntry::new(id, "Zoom", "Video calls", "1.4.0");
    entry.download_url = Some(format!("https://example.com/{id}.tar.gz"));
    entry
}

fn render(entry: &ListingEntry) -> Node {
    render_item(&ItemView::from_entry(entry))
}

fn action_button(row: &Node) -> &Element {
    row.find(&|e: &Element| e.tag == Tag::Button).expect("row has an action button")
}

/// Clicks `element` and runs the resulting actions.
fn click(entry: &ListingEntry, element: &Element) -> (RecordingHost, RecordingTelemetry) {
    let mut host = RecordingHost::default();
    let mut telemetry = RecordingTelemetry::default();
    if let Some(gesture) = element.click() {
        dispatch(&handle_gesture(entry, gesture), &mut host, &mut telemetry);
    }
    (host, telemetry)
}

#[test]
fn not_installed_rows_never_offer_configure() {
    let mut entry = listed("zoom");
    for error in [None, Some("boom".to_string())] {
        for installing in [false, true] {
            entry.error = error.clone();
            entry.installing = installing;
            let row = render(&entry);
            assert!(row.find_all(Tag::RouterLink).is_empty());
            assert_ne!(action_button(&row).text_content(), "Configure");
        }
    }
}

#[test]
fn installed_idle_row_configures_via_admin_path() {
    let mut entry = listed("zoom");
    entry.installed = InstallState::Installed("1.4.0".into());
    let row = render(&entry);

    let link = row.find_all(Tag::RouterLink);
    assert_eq!(link.len(), 1);
    assert_eq!(link[0].get_attr("to"), Some("/admin_console/plugins/plugin_zoom"));

    let (host, telemetry) = click(&entry, action_button(&row));
    assert_eq!(host.closes, 1);
    assert_eq!(host.paths, vec!["/admin_console/plugins/plugin_zoom"]);
    assert!(host.installs.is_empty());
    assert_eq!(telemetry.events, vec![("plugins".into(), "ui_marketplace_configure".into())]);
}

#[test]
fn update_prompt_follows_version_rule() {
    let cases = [
        (InstallState::NotInstalled, false, false),
        (InstallState::Installed("1.3.0".into()), false, true),
        (InstallState::Installed("1.4.0".into()), false, false),
        (InstallState::Installed("1.3.0".into()), true, false),
        (InstallState::Installed("2.0.0".into()), false, true),
    ];

    for (installed, installing, expected) in cases {
        let mut entry = listed("zoom");
        entry.installed = installed.clone();
        entry.installing = installing;
        let row = render(&entry);
        let prompt = row.find(&|e: &Element| e.has_class("update"));
        assert_eq!(prompt.is_some(), expected, "installed={installed:?} installing={installing}");
    }
}

#[test]
fn update_click_is_tagged_as_update() {
    let mut entry = listed("zoom");
    entry.installed = InstallState::Installed("1.3.0".into());
    entry.release_notes_url = Some("https://example.com/notes".into());
    let row = render(&entry);

    let prompt = row.find(&|e: &Element| e.has_class("update")).unwrap();
    assert!(prompt.text_content().starts_with("Update available: 1.4.0"));
    let update = row.find(&|e: &Element| e.has_class("update-action")).unwrap();

    let (host, telemetry) = click(&entry, update);
    assert_eq!(host.installs, vec!["zoom"]);
    assert_eq!(telemetry.events, vec![("plugins".into(), "ui_marketplace_download_update".into())]);
}

#[test]
fn icon_uses_image_or_placeholder() {
    let mut entry = listed("zoom");
    entry.icon_data = Some("data:image/png;base64,AAA".into());
    let images = render(&entry).find_all(Tag::Image).len();
    assert_eq!(images, 1);
    assert_eq!(
        render(&entry).find_all(Tag::Image)[0].get_attr("src"),
        Some("data:image/png;base64,AAA")
    );

    entry.icon_data = None;
    let row = render(&entry);
    assert!(row.find_all(Tag::Image).is_empty());
    assert_eq!(row.find_all(Tag::PlaceholderIcon).len(), 1);
}

#[test]
fn error_replaces_description_and_offers_retry() {
    let mut entry = listed("zoom");
    entry.error = Some("network failure".into());
    let row = render(&entry);

    let description = row.find(&|e: &Element| e.has_class("description")).unwrap();
    assert_eq!(description.text_content(), "network failure");
    assert!(description.has_class("error-text"));
    assert_eq!(action_button(&row).text_content(), "Try Again");
}

#[test]
fn missing_download_disables_install_while_installing_or_not() {
    for installing in [false, true] {
        let mut entry = listed("zoom");
        entry.download_url = None;
        entry.installing = installing;
        let row = render(&entry);
        let button = action_button(&row);
        assert!(button.disabled);

        let (host, telemetry) = click(&entry, button);
        assert!(host.installs.is_empty());
        assert!(telemetry.events.is_empty());
    }
}

#[test]
fn install_click_installs_once_with_one_download_event() {
    let entry = listed("plugin-123");
    let row = render(&entry);
    let (host, telemetry) = click(&entry, action_button(&row));

    assert_eq!(host.installs, vec!["plugin-123"]);
    assert_eq!(host.closes, 0);
    assert_eq!(telemetry.events, vec![("plugins".into(), "ui_marketplace_download".into())]);
}

#[test]
fn accessible_label_is_lowercased_name_and_description() {
    let mut entry = listed("zoom");
    entry.homepage_url = Some("https://zoom.example".into());
    let row = render(&entry);

    let link = row.find(&|e: &Element| e.has_class("row-link")).unwrap();
    assert_eq!(link.get_attr("aria-label"), Some("zoom, video calls"));
    assert_eq!(link.get_attr("href"), Some("https://zoom.example"));
    assert_eq!(row.find_by_id("marketplace-plugin-zoom").map(|e| e.tag), Some(Tag::Div));
}

#[test]
fn gesture_from_a_stale_view_is_rechecked_against_the_entry() {
    let mut entry = listed("zoom");
    let row = render(&entry);
    let gesture = action_button(&row).click();
    assert_eq!(gesture, Some(Gesture::Install));

    entry.installing = true;
    assert!(handle_gesture(&entry, Gesture::Install).is_empty());
}
