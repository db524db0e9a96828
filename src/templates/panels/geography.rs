use crate::analysis::RegionStats;
use crate::charts::{bar_chart, pie_chart, Bar, Slice};
use crate::domain::listing::region_label;
use crate::templates::format::{count, euros, maybe_area};
use maud::{html, Markup};

pub fn geography_panel(stats: &[RegionStats]) -> Markup {
    let bars: Vec<Bar> = stats
        .iter()
        .map(|s| Bar {
            label: region_label(&s.region),
            value: s.avg_rent,
            text: euros(s.avg_rent),
        })
        .collect();

    let slices: Vec<Slice> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| Slice {
            label: region_label(&s.region),
            value: s.count as f64,
            color: i,
        })
        .collect();

    html! {
        section class="panel" {
            h2 { "Geographic Analysis" }
            div class="columns" {
                (bar_chart("Average Rent by State", &bars, true))
                (pie_chart("Listings Distribution by State", &slices))
            }
            @if !stats.is_empty() {
                table class="summary" {
                    thead {
                        tr { th { "State" } th { "Listings" } th { "Avg. Rent" } th { "Avg. Space" } }
                    }
                    tbody {
                        @for s in stats {
                            tr {
                                td { (region_label(&s.region)) }
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
