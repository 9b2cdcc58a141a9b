//! Sandbox path helpers.

use std::path::PathBuf;

/// Sandbox mount point of the host directory Zellij was started from.
pub const HOST_ROOT: &str = "/host";

/// Data directory for the trace file.
///
/// `/host/.local/share/zellij/marketplace-pane`, which is
/// `~/.local/share/zellij/marketplace-pane` when Zellij runs from `$HOME`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("marketplace-pane")
}

/// Maps `~` and `~/...` to the sandbox host root. Other paths pass through.
///
/// ```
/// use marketplace_pane::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/listing.json"), "/host/listing.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/listing.json"), "/data/listing.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
