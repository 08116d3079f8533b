/// Escape HTML-significant characters. Ampersand is replaced first so the
/// entities introduced by the later replacements are never re-matched.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape `text` and keep its line breaks, for insertion via `inner_html`.
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Bands always display with one decimal ("6" reads as "6.0").
pub fn format_band(band: f64) -> String {
    format!("{:.1}", band)
}
