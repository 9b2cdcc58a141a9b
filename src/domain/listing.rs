//! Marketplace listing entries.
//!
//! A [`ListingEntry`] is the metadata of one plugin as presented in the
//! marketplace listing. Entries are transient: the host re-creates or updates
//! them whenever the marketplace data or an install operation changes, and the
//! row view re-derives everything from the latest entry on each render.
//!
//! Listings arrive as JSON arrays with camelCase keys:
//!
//! ```json
//! [{
//!   "id": "zoom",
//!   "name": "Zoom",
//!   "description": "Video calls",
//!   "version": "1.4.0",
//!   "downloadUrl": "https://example.com/zoom-1.4.0.tar.gz",
//!   "installedVersion": "1.3.2"
//! }]
//! ```

use crate::domain::error::{MarketplaceError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Router path prefix for per-plugin admin pages.
pub const ADMIN_PLUGIN_PATH_PREFIX: &str = "/admin_console/plugins/plugin_";

/// Prefix for the element identifier of a listing row.
pub const ROW_ID_PREFIX: &str = "marketplace-plugin-";

/// Installation status of a plugin.
///
/// On the wire this is the `installedVersion` string, where an empty string
/// means the plugin is not installed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstallState {
    /// The plugin is not installed.
    #[default]
    NotInstalled,
    /// The plugin is installed at the given version.
    Installed(String),
}

impl InstallState {
    /// Returns the installed version, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::NotInstalled => None,
            Self::Installed(version) => Some(version),
        }
    }

    #[must_use]
    pub const fn is_installed(&self) -> bool {
        matches!(self, Self::Installed(_))
    }
}

impl From<String> for InstallState {
    fn from(version: String) -> Self {
        if version.is_empty() {
            Self::NotInstalled
        } else {
            Self::Installed(version)
        }
    }
}

impl From<InstallState> for String {
    fn from(state: InstallState) -> Self {
        match state {
            InstallState::NotInstalled => Self::new(),
            InstallState::Installed(version) => version,
        }
    }
}

/// One plugin in the marketplace listing.
///
/// Optional string fields treat the empty string as absent, matching how
/// marketplace payloads leave unset URLs blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    /// Opaque plugin identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Latest version available in the marketplace.
    pub version: String,

    /// Bundle URL; without one the plugin cannot be installed from here.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub release_notes_url: Option<String>,
    /// Icon image source (usually a `data:` URI).
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub icon_data: Option<String>,

    #[serde(default, rename = "installedVersion")]
    pub installed: InstallState,

    /// An install or update is in flight for this entry.
    #[serde(default)]
    pub installing: bool,

    /// Display-only error from the last install attempt.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl ListingEntry {
    /// Creates a not-installed entry with no optional metadata.
    ///
    /// # Example
    ///
    /// ```
    /// use marketplace_pane::ListingEntry;
    ///
    /// let entry = ListingEntry::new("zoom", "Zoom", "Video calls", "1.4.0");
    /// assert!(!entry.installed.is_installed());
    /// assert_eq!(entry.admin_path(), "/admin_console/plugins/plugin_zoom");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            version: version.into(),
            download_url: None,
            homepage_url: None,
            release_notes_url: None,
            icon_data: None,
            installed: InstallState::NotInstalled,
            installing: false,
            error: None,
        }
    }

    /// Path of the plugin's admin configuration page.
    #[must_use]
    pub fn admin_path(&self) -> String {
        format!("{ADMIN_PLUGIN_PATH_PREFIX}{}", self.id)
    }

    /// Identifier of the rendered row element.
    #[must_use]
    pub fn row_id(&self) -> String {
        format!("{ROW_ID_PREFIX}{}", self.id)
    }

    /// Accessible label: `"<name>, <description>"` lower-cased.
    #[must_use]
    pub fn accessible_label(&self) -> String {
        format!("{}, {}", self.name, self.description).to_lowercase()
    }

    #[must_use]
    pub const fn has_download(&self) -> bool {
        self.download_url.is_some()
    }

    /// Returns the available version when it differs from the installed one.
    ///
    /// Versions are compared as plain strings, so an installed version that is
    /// newer than the listed one still yields a prompt.
    #[must_use]
    pub fn pending_update(&self) -> Option<&str> {
        match self.installed.version() {
            Some(installed) if installed != self.version && !self.installing => {
                Some(&self.version)
            }
            _ => None,
        }
    }
}

/// Parses a JSON listing document.
///
/// # Errors
///
/// - [`MarketplaceError::Json`] if the document is not valid JSON
/// - [`MarketplaceError::Listing`] if an entry is missing required keys, has
///   wrong types, or has an empty or duplicate `id`
pub fn parse_listing(json: &str) -> Result<Vec<ListingEntry>> {
    let entries: Vec<ListingEntry> = serde_json::from_str(json).map_err(|e| {
        if e.is_data() {
            MarketplaceError::Listing(e.to_string())
        } else {
            MarketplaceError::Json(e)
        }
    })?;

    if let Some(position) = entries.iter().position(|entry| entry.id.is_empty()) {
        return Err(MarketplaceError::Listing(format!(
            "entry {position} has an empty id"
        )));
    }

    let duplicate = {
        let mut seen = HashSet::with_capacity(entries.len());
        entries.iter().position(|entry| !seen.insert(entry.id.as_str()))
    };
    if let Some(position) = duplicate {
        return Err(MarketplaceError::Listing(format!(
            "entry {position} reuses id {:?}",
            entries[position].id
        )));
    }

    tracing::debug!(entry_count = entries.len(), "parsed marketplace listing");
    Ok(entries)
}

/// Reads and parses a JSON listing file.
///
/// # Errors
///
/// Returns [`MarketplaceError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_listing`].
pub fn load_listing<P: AsRef<Path>>(path: P) -> Result<Vec<ListingEntry>> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    parse_listing(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_installed_version_means_not_installed() {
        let entries = parse_listing(
            r#"[{"id":"a","name":"A","description":"d","version":"1.0.0","installedVersion":""}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].installed, InstallState::NotInstalled);
    }

    #[test]
    fn installed_version_equal_to_latest_is_still_installed() {
        let entries = parse_listing(
            r#"[{"id":"a","name":"A","description":"d","version":"1.0.0","installedVersion":"1.0.0"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].installed, InstallState::Installed("1.0.0".into()));
        assert_eq!(entries[0].pending_update(), None);
    }

    #[test]
    fn blank_optional_strings_are_absent() {
        let entries = parse_listing(
            r#"[{"id":"a","name":"A","description":"d","version":"1",
                "downloadUrl":"","homepageUrl":"","error":"","iconData":""}]"#,
        )
        .unwrap();
        let entry = &entries[0];
        assert!(!entry.has_download());
        assert_eq!(entry.homepage_url, None);
        assert_eq!(entry.error, None);
        assert_eq!(entry.icon_data, None);
    }

    #[test]
    fn missing_required_key_is_a_listing_error() {
        let err = parse_listing(r#"[{"id":"a","name":"A","version":"1"}]"#).unwrap_err();
        assert!(matches!(err, MarketplaceError::Listing(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_listing("[{").unwrap_err();
        assert!(matches!(err, MarketplaceError::Json(_)));
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = parse_listing(r#"[{"id":"","name":"A","description":"d","version":"1"}]"#)
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::Listing(_)));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = parse_listing(
            r#"[{"id":"zoom","name":"Zoom","description":"d","version":"1"},
                {"id":"meet","name":"Meet","description":"d","version":"1"},
                {"id":"zoom","name":"Zoom Beta","description":"d","version":"2"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, MarketplaceError::Listing(ref msg) if msg.contains("entry 2") && msg.contains("zoom")));
    }

    #[test]
    fn downgrade_still_counts_as_pending_update() {
        let mut entry = ListingEntry::new("a", "A", "d", "1.0.0");
        entry.installed = InstallState::Installed("2.0.0".into());
        assert_eq!(entry.pending_update(), Some("1.0.0"));

        entry.installing = true;
        assert_eq!(entry.pending_update(), None);
    }

    #[test]
    fn install_state_serializes_back_to_string() {
        let mut entry = ListingEntry::new("a", "A", "d", "1");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["installedVersion"], "");

        entry.installed = InstallState::Installed("0.9".into());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["installedVersion"], "0.9");
    }
}
