/// Chart.js configurations.
pub mod charts;
/// HTML fragments.
pub mod html;
/// The standalone page.
pub mod page;
/// Chart slots and their lifetime.
pub mod registry;

pub use charts::{ChartConfig, ChartTheme};
pub use page::render_page;
pub use registry::{ChartHandle, ChartSlot, ChartSurface, HtmlChartSurface, Session};

use crate::report::{ComparisonReport, ProfileReport};

/// Mounts the profile charts into `session` and returns the profile markup.
pub fn render_profile_view<S: ChartSurface>(
    session: &mut Session<S>,
    report: &ProfileReport,
    repositories_shown: usize,
) -> String {
    session.mount(
        ChartSlot::Language,
        &charts::language_chart(&report.stats.top_languages, ChartTheme::Profile),
    );
    session.mount(
        ChartSlot::Stars,
        &charts::stars_chart(&report.stats.top_starred, ChartTheme::Profile),
    );

    let mut out = html::render_profile_card(report);
    out.push_str(&html::render_chart_canvases(&[ChartSlot::Language, ChartSlot::Stars]));
    out.push_str(&html::render_repository_list(
        &report.snapshot.repositories,
        repositories_shown,
    ));
    out
}

/// Mounts both sides' charts into `session` and returns the comparison markup.
pub fn render_comparison_view<S: ChartSurface>(
    session: &mut Session<S>,
    report: &ComparisonReport,
) -> String {
    let sides = [
        (&report.a, 'A', ChartSlot::LanguageA, ChartSlot::StarsA),
        (&report.b, 'B', ChartSlot::LanguageB, ChartSlot::StarsB),
    ];

    let mut out = String::from("<section class=\"compare-grid\" id=\"compareResults\">\n");
    for (side, suffix, language_slot, stars_slot) in sides {
        session.mount(
            language_slot,
            &charts::language_chart(&side.stats.top_languages, ChartTheme::Compare),
        );
        session.mount(stars_slot, &charts::stars_chart(&side.stats.top_starred, ChartTheme::Compare));

        out.push_str("<div>\n");
        out.push_str(&html::render_compare_card(side.account(), side.stats.total_stars, suffix));
        out.push_str(&html::render_chart_canvases(&[language_slot, stars_slot]));
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
    out.push_str(&html::render_comparison_summary(report));
    out
}
