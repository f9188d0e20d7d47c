//! HTML and code-snippet rendering for the pattern palette.
//!
//! The document is two concatenated HTML pages: the first shows the
//! `PatternColorScheme` enum body, the second a swatch table followed by the
//! `match` arms that map each variant to its foreground/background colors.
//! Snippet lines end in `\r\n` so they paste cleanly into either line-ending
//! convention; document lines end in `\n`.

use crate::models::PaletteEntry;
use std::fmt::Write as _;

/// Shared page head for both documents.
pub const STYLE_HEAD: &str = concat!(
    "<html><head><style>",
    "body {font: 16px Helvetica Neue, sans-serif;} td {padding: 4px} ",
    ".dark {color: white} .light {color: black}",
    "</style></head><body>"
);

/// Name of the generated enum.
pub const ENUM_NAME: &str = "PatternColorScheme";

const SNIPPET_EOL: &str = "\r\n";

/// Renders the enum declaration inside a `<pre>` block.
#[must_use]
pub fn render_enum(entries: &[PaletteEntry]) -> String {
    let mut output = format!("<pre>enum {ENUM_NAME} {{{SNIPPET_EOL}");
    for entry in entries {
        let _ = write!(output, "{},{SNIPPET_EOL}", entry.name);
    }
    output.push_str("}</pre>");
    output
}

/// Renders one swatch table row.
///
/// ```
/// use assetprep::models::{PaletteEntry, RgbColor};
/// use assetprep::palette::render::render_swatch_row;
///
/// let entry = PaletteEntry::new("Gray1", RgbColor::new(0, 0, 0));
/// assert_eq!(
///     render_swatch_row(&entry),
///     "<tr><td class=\"dark\" style=\"background-color:#000000;\">Gray1: 000000</td></tr>"
/// );
/// ```
#[must_use]
pub fn render_swatch_row(entry: &PaletteEntry) -> String {
    let hex = entry.color.hex_code();
    format!(
        "<tr><td class=\"{}\" style=\"background-color:#{hex};\">{}: {hex}</td></tr>",
        entry.contrast.css_class(),
        entry.name
    )
}

/// Renders one `match` arm mapping a variant to `(foreground, background)`.
#[must_use]
pub fn render_match_arm(entry: &PaletteEntry) -> String {
    format!(
        "{ENUM_NAME}::{} => (Color32::{}, Color32::from_rgb({}, {}, {})),{SNIPPET_EOL}",
        entry.name,
        entry.contrast.color32_constant(),
        entry.color.r,
        entry.color.g,
        entry.color.b
    )
}

/// Renders the complete two-page document.
#[must_use]
pub fn render_document(entries: &[PaletteEntry]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{STYLE_HEAD}");
    let _ = writeln!(output, "{}", render_enum(entries));

    let _ = writeln!(output, "{STYLE_HEAD}<table>");
    for entry in entries {
        let _ = writeln!(output, "{}", render_swatch_row(entry));
    }

    let arms: String = entries.iter().map(render_match_arm).collect();
    let _ = writeln!(output, "</table><pre>{arms}</pre>");
    output.push_str("</body></html>\n");

    output
}
