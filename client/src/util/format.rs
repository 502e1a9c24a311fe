//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a server timestamp (`2026-09-12T09:00:00Z`) as a short human
/// form (`2026-09-12 09:00`). Unrecognized input is shown as-is.
#[must_use]
pub fn short_timestamp(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    let hhmm = time.get(..5).unwrap_or(time);
    format!("{date} {hhmm}")
}
