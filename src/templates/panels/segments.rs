use crate::analysis::{ScatterPoint, SegmentStats};
use crate::charts::{bar_chart, pie_chart, scatter_chart, Bar, Series, Slice};
use crate::domain::listing::PriceCategory;
use crate::templates::format::{count, euros, maybe_area};
use maud::{html, Markup};

/// Palette slot of a price band, shared by the pie and the scatter.
fn band_color(category: PriceCategory) -> usize {
    category as usize
}

pub fn segments_panel(stats: &[SegmentStats], scatter: &[ScatterPoint]) -> Markup {
    let slices: Vec<Slice> = stats
        .iter()
        .map(|s| Slice {
            label: s.category.label().to_string(),
            value: s.count as f64,
            color: band_color(s.category),
        })
        .collect();

    let bars: Vec<Bar> = stats
        .iter()
        .map(|s| Bar {
            label: s.category.label().to_string(),
            value: s.avg_rent,
            text: euros(s.avg_rent),
        })
        .collect();

    // one series per band present in the sample, in band order
    let series: Vec<Series> = PriceCategory::ALL
        .into_iter()
        .map(|category| Series {
            name: category.label().to_string(),
            color: band_color(category),
            points: scatter
                .iter()
                .filter(|p| p.category == category)
                .map(|p| (p.living_space, p.total_rent))
                .collect(),
        })
        .filter(|s| !s.points.is_empty())
        .collect();

    html! {
        section class="panel" {
            h2 { "Market Segments Analysis" }
            div class="columns" {
                (pie_chart("Market Share by Price Segment", &slices))
                (bar_chart("Average Rent by Segment", &bars, false))
            }
            (scatter_chart("Living Space vs Rent Relationship", &series, "Space (m²)", "Rent (€)"))
            @if !stats.is_empty() {
                table class="summary" {
                    thead {
                        tr { th { "Segment" } th { "Listings" } th { "Avg. Rent" } th { "Avg. Space" } }
                    }
                    tbody {
                        @for s in stats {
                            tr {
                                td { (s.category.label()) }
                                td { (count(s.count)) }
                                td { (euros(s.avg_rent)) }
                                td { (maybe_area(s.avg_space)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
