//! Host pane flow: listing load, keyboard events, install results, rendering.

use marketplace_pane::app::{handle_event, AppState, Event};
use marketplace_pane::domain::load_listing;
use marketplace_pane::ui::helpers::Canvas;
use marketplace_pane::ui::renderer::render_to_string;
use marketplace_pane::{install_outcome, Action, InstallState, MarketplaceError, Theme};
use std::io::Write;
use tempfile::NamedTempFile;

const LISTING: &str = r#"[
  {
    "id": "zoom",
    "name": "Zoom",
    "description": "Video calls",
    "version": "1.4.0",
    "downloadUrl": "https://example.com/zoom-1.4.0.tar.gz",
    "installedVersion": "1.3.0",
    "releaseNotesUrl": ""
  },
  {
    "id": "jira",
    "name": "Jira",
    "description": "Issue tracking",
    "version": "3.0.0",
    "downloadUrl": "https://example.com/jira-3.0.0.tar.gz"
  },
  {
    "id": "todo",
    "name": "Todo",
    "description": "Task lists",
    "version": "0.2.0"
  }
]"#;

fn listing_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LISTING.as_bytes()).unwrap();
    file
}

fn loaded_state() -> AppState {
    let file = listing_file();
    let entries = load_listing(file.path()).unwrap();
    let mut state = AppState::new(vec![], Theme::default());
    handle_event(&mut state, &Event::ListingLoaded { entries }).unwrap();
    state
}

fn plain(state: &AppState, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();
    canvas.push(&render_to_string(state, rows, cols));
    canvas.plain_text()
}

#[test]
fn listing_file_round_trips_into_state() {
    let state = loaded_state();
    assert_eq!(state.entries.len(), 3);
    assert_eq!(state.entries[0].installed, InstallState::Installed("1.3.0".into()));
    assert_eq!(state.entries[0].release_notes_url, None);
    assert_eq!(state.entries[2].download_url, None);
}

#[test]
fn install_then_success_turns_row_into_configure() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::KeyDown).unwrap();

    let (render, actions) = handle_event(&mut state, &Event::Activate).unwrap();
    assert!(render);
    assert_eq!(actions[1], Action::InstallPlugin { id: "jira".into() });
    assert!(plain(&state, 24, 80).contains("[ Installing... ]"));

    handle_event(&mut state, &Event::InstallFinished { id: "jira".into(), error: None }).unwrap();
    let frame = plain(&state, 24, 80);
    assert!(frame.contains("Jira (3.0.0)"));
    assert!(frame.contains("[ Configure ]"));
}

#[test]
fn failed_install_shows_error_and_retries() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::KeyDown).unwrap();
    handle_event(&mut state, &Event::Activate).unwrap();
    handle_event(
        &mut state,
        &Event::InstallFinished { id: "jira".into(), error: Some("network failure".into()) },
    )
    .unwrap();

    let frame = plain(&state, 24, 80);
    assert!(frame.contains("network failure"));
    assert!(frame.contains("[ Try Again ]"));

    let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
    assert_eq!(actions[1], Action::InstallPlugin { id: "jira".into() });
    assert_eq!(state.entries[1].error, None);
}

#[test]
fn update_key_updates_installed_plugin() {
    let mut state = loaded_state();
    assert!(plain(&state, 24, 80).contains("Update available: 1.4.0"));

    let (_, actions) = handle_event(&mut state, &Event::Update).unwrap();
    assert_eq!(actions[1], Action::InstallPlugin { id: "zoom".into() });

    handle_event(&mut state, &Event::InstallFinished { id: "zoom".into(), error: None }).unwrap();
    assert!(!plain(&state, 24, 80).contains("Update available"));
}

#[test]
fn plugin_without_download_cannot_be_activated() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::KeyUp).unwrap();
    assert_eq!(state.selected_entry().map(|e| e.id.as_str()), Some("todo"));

    let (render, actions) = handle_event(&mut state, &Event::Activate).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn filter_narrows_rendered_rows() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "issue".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    let frame = plain(&state, 24, 80);
    assert!(frame.contains("Filter:"));
    assert!(frame.contains("Jira"));
    assert!(!frame.contains("Zoom"));
    assert!(frame.contains("Plugin Marketplace (1)"));
}

#[test]
fn failed_listing_shows_reason() {
    let err = load_listing("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, MarketplaceError::Io(_)));

    let mut state = AppState::new(vec![], Theme::default());
    handle_event(&mut state, &Event::ListingFailed { error: err.to_string() }).unwrap();
    let frame = plain(&state, 24, 80);
    assert!(frame.contains("Marketplace unavailable"));
}

#[test]
fn install_result_for_unknown_plugin_is_an_error() {
    let mut state = loaded_state();
    let result = handle_event(&mut state, &Event::InstallFinished { id: "nope".into(), error: None });
    assert!(matches!(result, Err(MarketplaceError::Listing(_))));
}

#[test]
fn multi_line_install_error_renders_inside_its_row() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::KeyDown).unwrap();
    handle_event(&mut state, &Event::Activate).unwrap();

    let stderr = b"error: download failed\nhint: check network\ncaused by: timeout\n";
    let error = install_outcome(Some(1), stderr).unwrap_err().to_string();
    handle_event(&mut state, &Event::InstallFinished { id: "jira".into(), error: Some(error) }).unwrap();

    let frame = render_to_string(&state, 24, 40);
    assert!(!frame.contains('\n'));

    let text = plain(&state, 24, 40);
    let error_line = text.lines().find(|l| l.contains("download failed")).unwrap();
    assert!(error_line.starts_with("    Install error: download failed"));
    assert!(text.lines().all(|l| !l.starts_with("hint")));
}

#[test]
fn duplicate_ids_fail_to_load() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"[{"id":"zoom","name":"Zoom","description":"d","version":"1","downloadUrl":"u"},
            {"id":"zoom","name":"Zoom","description":"d","version":"2","downloadUrl":"u"}]"#,
    )
    .unwrap();

    let err = load_listing(file.path()).unwrap_err();
    assert!(matches!(err, MarketplaceError::Listing(_)));

    let mut state = AppState::new(vec![], Theme::default());
    handle_event(&mut state, &Event::ListingFailed { error: err.to_string() }).unwrap();
    assert!(state.entries.is_empty());
    assert!(plain(&state, 24, 80).contains("Marketplace unavailable"));
}
