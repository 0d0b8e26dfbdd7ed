//! Minimal SVG emission for bar and line charts.
//!
//! One numeric series over a categorical/ordinal x axis, with x/y axis
//! labels. Graphics quality is explicitly not a goal; the output only has to
//! be a well-formed artifact a browser can open.

use tabex_core::types::{Scalar, Table};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 55.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 45.0;

const BAR_FILL: &str = "#4878cf";
const LINE_STROKE: &str = "#4878cf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    /// Anything other than "line" renders as a bar chart.
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("line") => ChartKind::Line,
            _ => ChartKind::Bar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

/// Render a chart of `y` over `x`, or `None` when either axis column is
/// missing from the table.
pub fn render(table: &Table, x: &str, y: &str, kind: ChartKind) -> Option<String> {
    let x_col = table.column(x)?;
    let y_col = table.column(y)?;

    let labels: Vec<String> = x_col.values.iter().map(ToString::to_string).collect();
    // Non-numeric y cells plot at zero.
    let values: Vec<f64> = y_col
        .values
        .iter()
        .map(|v| v.as_f64().unwrap_or(0.0))
        .collect();

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;
    let max = values.iter().cloned().fold(0.0f64, f64::max).max(1e-9);

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}">"#
    ));
    out.push('\n');

    // Axes.
    out.push_str(&format!(
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline}" stroke="black"/>"#
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<line x1="{MARGIN_LEFT}" y1="{baseline}" x2="{}" y2="{baseline}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w
    ));
    out.push('\n');

    let n = values.len();
    if n > 0 {
        let slot = plot_w / n as f64;
        match kind {
            ChartKind::Bar => {
                let bar_w = slot * 0.8;
                for (i, v) in values.iter().enumerate() {
                    let h = (v / max).max(0.0) * plot_h;
                    let bx = MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0;
                    out.push_str(&format!(
                        r#"<rect x="{bx:.2}" y="{:.2}" width="{bar_w:.2}" height="{h:.2}" fill="{BAR_FILL}"/>"#,
                        baseline - h
                    ));
                    out.push('\n');
                }
            }
            ChartKind::Line => {
                let points: Vec<String> = values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let px = MARGIN_LEFT + (i as f64 + 0.5) * slot;
                        let py = baseline - (v / max).max(0.0) * plot_h;
                        format!("{px:.2},{py:.2}")
                    })
                    .collect();
                out.push_str(&format!(
                    r#"<polyline points="{}" fill="none" stroke="{LINE_STROKE}" stroke-width="2"/>"#,
                    points.join(" ")
                ));
                out.push('\n');
            }
        }

        // Tick labels under each slot.
        for (i, label) in labels.iter().enumerate() {
            let cx = MARGIN_LEFT + (i as f64 + 0.5) * slot;
            out.push_str(&format!(
                r#"<text x="{cx:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
                baseline + 14.0,
                escape_xml(label)
            ));
            out.push('\n');
        }
    }

    // Axis titles, matching the usual xlabel/ylabel placement.
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="13" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 8.0,
        escape_xml(x)
    ));
    out.push('\n');
    let y_title_y = MARGIN_TOP + plot_h / 2.0;
    out.push_str(&format!(
        r#"<text x="14" y="{y_title_y:.2}" font-size="13" text-anchor="middle" transform="rotate(-90 14 {y_title_y:.2})">{}</text>"#,
        escape_xml(y)
    ));
    out.push('\n');

    out.push_str("</svg>\n");
    Some(out)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
