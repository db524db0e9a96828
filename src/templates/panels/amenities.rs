use crate::analysis::AmenityStats;
use crate::charts::{bar_chart, Bar};
use crate::templates::alert;
use crate::templates::format::{pct, signed_pct};
use maud::{html, Markup};

pub fn amenities_panel(stats: &[AmenityStats]) -> Markup {
    // both charts share the premium ordering
    let premium: Vec<Bar> = stats
        .iter()
        .map(|s| Bar {
            label: s.amenity.column().to_string(),
            value: s.premium_pct,
            text: signed_pct(s.premium_pct),
        })
        .collect();

    let prevalence: Vec<Bar> = stats
        .iter()
        .map(|s| Bar {
            label: s.amenity.column().to_string(),
            value: s.prevalence_pct,
            text: pct(s.prevalence_pct),
        })
        .collect();

    html! {
        section class="panel" {
            h2 { "Amenities Analysis" }
            @if stats.is_empty() {
                (alert("info", "Not enough listings with and without each amenity to compare rents."))
            } @else {
                div class="columns" {
                    (bar_chart("Price Premium for Amenities", &premium, false))
                    (bar_chart("Amenity Prevalence", &prevalence, false))
                }
            }
        }
    }
}
