use crate::domain::query::CityAverage;
use maud::{html, Markup};

const CHART_WIDTH: f64 = 640.0;
const BAR_AREA_HEIGHT: f64 = 240.0;
const LABEL_BAND: f64 = 36.0;
const BAR_GAP: f64 = 18.0;

/// Server-rendered bar chart of average price per city. The caller
/// skips this entirely when no rows matched.
pub fn price_chart(averages: &[CityAverage]) -> Markup {
    let max = averages
        .iter()
        .map(|a| a.average_price)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let band = CHART_WIDTH / averages.len() as f64;
    let bar_width = (band - BAR_GAP).max(4.0);

    html! {
        section class="card" {
            h3 { "Average Price by City" }
            svg
                width=(CHART_WIDTH)
                height=(BAR_AREA_HEIGHT + LABEL_BAND)
                viewBox=(format!("0 0 {} {}", CHART_WIDTH, BAR_AREA_HEIGHT + LABEL_BAND))
                role="img"
            {
                @for (i, avg) in averages.iter().enumerate() {
                    @let bar_height = avg.average_price / max * (BAR_AREA_HEIGHT - 24.0);
                    @let x = i as f64 * band + BAR_GAP / 2.0;
                    @let y = BAR_AREA_HEIGHT - bar_height;
                    rect x=(x) y=(y) width=(bar_width) height=(bar_height) fill="#524ed2" {}
                    text x=(x + bar_width / 2.0) y=(y - 6.0) text-anchor="middle" font-size="12" {
                        (format!("${:.0}", avg.average_price))
                    }
                    text
                        x=(x + bar_width / 2.0)
                        y=(BAR_AREA_HEIGHT + 20.0)
                        text-anchor="middle"
                        font-size="13"
                    {
                        (avg.city)
                    }
                }
            }
        }
    }
}
