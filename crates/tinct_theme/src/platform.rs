//! System color-scheme detection

use std::env;

/// Environment variable that forces the detected scheme (`dark` or `light`)
pub const SCHEME_OVERRIDE_VAR: &str = "TINCT_COLOR_SCHEME";

/// Probe the host environment for a dark-mode setting.
///
/// Checks [`SCHEME_OVERRIDE_VAR`] first, then the GTK theme variant
/// (`GTK_THEME=Adwaita:dark`). Returns `None` when nothing is known, which
/// callers treat as "no system signal".
pub fn detect_system_dark() -> Option<bool> {
    detect_from(|key| env::var(key).ok())
}

fn detect_from(lookup: impl Fn(&str) -> Option<String>) -> Option<bool> {
    if let Some(value) = lookup(SCHEME_OVERRIDE_VAR) {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => return Some(true),
            "light" => return Some(false),
            other => tracing::warn!(value = other, "ignoring unrecognized {SCHEME_OVERRIDE_VAR}"),
        }
    }

    let gtk_theme = lookup("GTK_THEME")?;
    let variant = gtk_theme.rsplit_once(':').map(|(_, variant)| variant);
    Some(matches!(variant, Some(v) if v.eq_ignore_ascii_case("dark")))
}
