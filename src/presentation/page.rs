//! Standalone HTML document wrapping the rendered fragments.
use chrono::{DateTime, Utc};

use super::registry::HtmlChartSurface;
use crate::format::html_escape;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Wraps `body` in a full document and instantiates every live chart.
pub fn render_page(
    title: &str,
    body: &str,
    charts: &HtmlChartSurface,
    generated_at: DateTime<Utc>,
) -> serde_json::Result<String> {
    let mut scripts = String::new();
    for (slot, config) in charts.charts() {
        let json = serde_json::to_string(config)?;
        scripts.push_str(&format!(
            "new Chart(document.getElementById(\"{}\"), {});\n",
            slot.canvas_id(),
            // keep the JSON from closing the script element
            json.replace("</", "<\\/")
        ));
    }

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
<script src="{chart_js}"></script>
</head>
<body>
<main>
{body}</main>
<footer>Generated {generated}</footer>
<script>
Chart.defaults.color = "#ffffff";
{scripts}</script>
</body>
</html>
"##,
        title = html_escape(title),
        css = inline_css(),
        chart_js = CHART_JS_URL,
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    ))
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; background: #0b0b0b; color: #fff; font-family: "Space Grotesk", sans-serif; }
main { max-width: 1200px; margin: 0 auto; padding: 2rem; display: grid; gap: 1.5rem; }
.avatar { width: 96px; height: 96px; border-radius: 50%; }
.stats { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.stat-value { font-size: 1.5rem; font-weight: 700; display: block; }
.chart-card { position: relative; height: 320px; }
.repo-item { display: block; padding: 1rem; border-radius: 12px; background: #1a1a2e; color: inherit; text-decoration: none; margin-bottom: .75rem; }
.repo-stats { display: flex; gap: 1rem; opacity: .8; }
.language-dot, .legend-dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: .35rem; }
.dot-a, .bar-fill-a { background: #00d4ff; }
.dot-b, .bar-fill-b { background: #7c3aed; }
.bar { display: flex; height: 8px; border-radius: 4px; overflow: hidden; }
.insight-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; }
.winner-pill { display: inline-block; padding: .25rem .75rem; border-radius: 999px; background: #1a1a2e; }
.compare-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.error-message { padding: 1rem; border-radius: 12px; background: #4a1020; }
footer { text-align: center; opacity: .5; padding: 1rem; }
"#
}
