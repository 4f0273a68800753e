//! Inline SVG bar charts for the two per-category distributions.
//!
//! Charts are generated once at render time and embedded directly in the
//! HTML, keeping the report fully self-contained with no image files.

use super::html::escape_html;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 56.0;
const MARGIN_SIDE: f64 = 32.0;

/// One bar of a distribution chart.
#[derive(Debug, Clone)]
pub struct Bar {
    /// Text under the bar.
    pub label: String,
    /// Bar height in review counts.
    pub value: usize,
}

/// Render a vertical bar chart as a standalone `<svg>` element.
///
/// Bars are drawn in the given order and colored by cycling through
/// `colors`. Labels and the title are HTML-escaped.
pub fn bar_chart(title: &str, bars: &[Bar], colors: &[&str]) -> String {
    let plot_width = WIDTH - 2.0 * MARGIN_SIDE;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = HEIGHT - MARGIN_BOTTOM;
    let max_value = bars.iter().map(|b| b.value).max().unwrap_or(0).max(1) as f64;

    let mut body = String::new();
    let slot = if bars.is_empty() {
        plot_width
    } else {
        plot_width / bars.len() as f64
    };
    let bar_width = slot * 0.6;

    for (i, bar) in bars.iter().enumerate() {
        let color = colors.get(i % colors.len().max(1)).unwrap_or(&"#87ceeb");
        let height = (bar.value as f64 / max_value) * plot_height;
        let x = MARGIN_SIDE + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = MARGIN_TOP + (plot_height - height);
        let center = x + bar_width / 2.0;

        body.push_str(&format!(
            r##"  <rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{color}" rx="2"/>
  <text x="{center:.1}" y="{value_y:.1}" text-anchor="middle" font-size="14" fill="#333">{value}</text>
  <text x="{center:.1}" y="{label_y:.1}" text-anchor="middle" font-size="14" fill="#333">{label}</text>
"##,
            value_y = y - 6.0,
            value = bar.value,
            label_y = baseline + 20.0,
            label = escape_html(&bar.label),
        ));
    }

    format!(
        r##"<svg viewBox="0 0 {WIDTH:.0} {HEIGHT:.0}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{title}">
  <text x="{title_x:.1}" y="28" text-anchor="middle" font-size="18" font-weight="600" fill="#232f3e">{title}</text>
{body}  <line x1="{line_start:.1}" y1="{baseline:.1}" x2="{line_end:.1}" y2="{baseline:.1}" stroke="#ccc"/>
</svg>"##,
        title = escape_html(title),
        title_x = WIDTH / 2.0,
        line_start = MARGIN_SIDE,
        line_end = WIDTH - MARGIN_SIDE,
    )
}
