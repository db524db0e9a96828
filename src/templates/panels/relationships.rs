use crate::analysis::Crosstab;
use crate::charts::heatmap;
use crate::domain::listing::region_label;
use maud::{html, Markup};

pub fn relationships_panel(crosstab: &Crosstab) -> Markup {
    let rows: Vec<String> = crosstab.regions.iter().map(|r| region_label(r)).collect();
    let cols: Vec<String> = crosstab
        .categories
        .iter()
        .map(|c| c.label().to_string())
        .collect();

    html! {
        section class="panel" {
            h2 { "Relationship Analysis" }
            (heatmap("Price Segments by State (%)", &rows, &cols, &crosstab.percentages))
        }
    }
}
