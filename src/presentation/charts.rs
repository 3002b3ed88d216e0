//! Chart.js compatible chart configurations.
use serde::Serialize;

use crate::{
    colors::{FALLBACK_COLOR, adjust_brightness, language_color},
    stats::{LanguageCount, StarredRepository, percentage},
};

const HOVER_BRIGHTEN: i16 = 20;
const HOVER_BORDER_COLOR: &str = "#00d4ff";
const STARS_FILL: &str = "rgba(102, 126, 234, 0.8)";

/// Where a chart is shown; decides border colors and legend detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTheme {
    /// The single-account profile view.
    Profile,
    /// One side of the comparison view.
    Compare,
}

impl ChartTheme {
    fn doughnut_border(self) -> &'static str {
        match self {
            ChartTheme::Profile => "#1a1a2e",
            ChartTheme::Compare => "#0b0b0b",
        }
    }

    fn bar_border(self) -> &'static str {
        match self {
            ChartTheme::Profile => "rgba(102, 126, 234, 1)",
            ChartTheme::Compare => "#0b0b0b",
        }
    }
}

/// The Chart.js chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Ring chart.
    Doughnut,
    /// Vertical bar chart.
    Bar,
}

/// A single color or one color per data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    /// Same color for every point.
    One(String),
    /// One color per point.
    Many(Vec<String>),
}

/// One Chart.js dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend text of the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// One value per label.
    pub data: Vec<u64>,
    /// Fill color.
    pub background_color: Paint,
    /// Outline color.
    pub border_color: String,
    /// Outline width in pixels.
    pub border_width: u32,
    /// Distance a hovered segment moves out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
    /// Outline width of a hovered segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_width: Option<u32>,
    /// Outline color of a hovered segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<String>,
    /// Fill color of each hovered segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<Vec<String>>,
    /// Corner radius of bars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    /// Whether a bar edge is left without border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
}

/// Labels and datasets of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// One label per data point.
    pub labels: Vec<String>,
    /// The plotted series.
    pub datasets: Vec<Dataset>,
}

/// Legend plugin options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    /// Whether the legend is drawn.
    pub display: bool,
    /// Where the legend is drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Plugin options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    /// Legend options.
    pub legend: Legend,
}

/// Top-level Chart.js options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Resize with the container.
    pub responsive: bool,
    /// Keep the canvas aspect ratio while resizing.
    pub maintain_aspect_ratio: bool,
    /// Size of the doughnut hole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    /// Plugin options.
    pub plugins: Plugins,
}

/// A complete chart description, serialized as the second argument of
/// `new Chart(canvas, config)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    /// Chart type.
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Labels and datasets.
    pub data: ChartData,
    /// Display options.
    pub options: ChartOptions,
}

/// Doughnut chart of repository counts per language.
///
/// The profile theme appends each language's share to its label, e.g.
/// `Rust (42.9%)`.
pub fn language_chart(languages: &[LanguageCount], theme: ChartTheme) -> ChartConfig {
    let total: usize = languages.iter().map(|l| l.repositories).sum();

    let labels = languages
        .iter()
        .map(|l| match theme {
            ChartTheme::Profile => {
                format!("{} ({:.1}%)", l.language, percentage(l.repositories, total))
            }
            ChartTheme::Compare => l.language.clone(),
        })
        .collect();
    let colors: Vec<String> =
        languages.iter().map(|l| language_color(&l.language).to_string()).collect();
    let hover_colors = colors
        .iter()
        .map(|c| adjust_brightness(c, HOVER_BRIGHTEN).unwrap_or_else(|| FALLBACK_COLOR.to_string()))
        .collect();

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: None,
                data: languages.iter().map(|l| l.repositories as u64).collect(),
                background_color: Paint::Many(colors),
                border_color: theme.doughnut_border().to_string(),
                border_width: 4,
                hover_offset: Some(12),
                hover_border_width: Some(6),
                hover_border_color: Some(HOVER_BORDER_COLOR.to_string()),
                hover_background_color: Some(hover_colors),
                border_radius: None,
                border_skipped: None,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: Some("60%".to_string()),
            plugins: Plugins {
                legend: Legend { display: true, position: Some("bottom".to_string()) },
            },
        },
    }
}

/// Bar chart of star counts of the top repositories.
pub fn stars_chart(repos: &[StarredRepository], theme: ChartTheme) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: repos.iter().map(|r| r.label.clone()).collect(),
            datasets: vec![Dataset {
                label: Some("Stars".to_string()),
                data: repos.iter().map(|r| r.stars).collect(),
                background_color: Paint::One(STARS_FILL.to_string()),
                border_color: theme.bar_border().to_string(),
                border_width: 1,
                hover_offset: None,
                hover_border_width: None,
                hover_border_color: None,
                hover_background_color: None,
                border_radius: Some(8),
                border_skipped: Some(false),
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: None,
            plugins: Plugins { legend: Legend { display: false, position: None } },
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn languages() -> Vec<LanguageCount> {
        vec![
            LanguageCount { language: "Rust".to_string(), repositories: 3 },
            LanguageCount { language: "Elm".to_string(), repositories: 1 },
        ]
    }

    #[test]
    fn test_language_chart_profile() {
        let chart = language_chart(&languages(), ChartTheme::Profile);

        assert_eq!(chart.kind, ChartKind::Doughnut);
        assert_eq!(chart.data.labels, vec!["Rust (75.0%)", "Elm (25.0%)"]);
        let dataset = &chart.data.datasets[0];
        assert_eq!(dataset.data, vec![3, 1]);
        assert_eq!(
            dataset.background_color,
            Paint::Many(vec!["#dea584".to_string(), "#ccc".to_string()])
        );
        assert_eq!(
            dataset.hover_background_color,
            Some(vec!["#f2b998".to_string(), "#e0e0e0".to_string()])
        );
        assert_eq!(dataset.border_color, "#1a1a2e");
    }

    #[test]
    fn test_language_chart_compare_uses_plain_labels() {
        let chart = language_chart(&languages(), ChartTheme::Compare);
        assert_eq!(chart.data.labels, vec!["Rust", "Elm"]);
        assert_eq!(chart.data.datasets[0].border_color, "#0b0b0b");
    }

    #[test]
    fn test_language_chart_empty() {
        let chart = language_chart(&[], ChartTheme::Profile);
        assert!(chart.data.labels.is_empty());
        assert!(chart.data.datasets[0].data.is_empty());
    }

    #[test]
    fn test_stars_chart_serializes_for_chart_js() {
        let repos = vec![StarredRepository {
            name: "a-very-long-repository".to_string(),
            label: "a-very-long-rep...".to_string(),
            stars: 42,
            html_url: "https://github.com/a/a".to_string(),
        }];

        let value = serde_json::to_value(stars_chart(&repos, ChartTheme::Profile)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "bar",
                "data": {
                    "labels": ["a-very-long-rep..."],
                    "datasets": [{
                        "label": "Stars",
                        "data": [42],
                        "backgroundColor": "rgba(102, 126, 234, 0.8)",
                        "borderColor": "rgba(102, 126, 234, 1)",
                        "borderWidth": 1,
                        "borderRadius": 8,
                        "borderSkipped": false
                    }]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "plugins": { "legend": { "display": false } }
                }
            })
        );
    }
}
