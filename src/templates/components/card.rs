use maud::{html, Markup};

/// A single headline number.
pub fn metric_card(label: &str, value: &str) -> Markup {
    html! {
        div class="card metric" {
            span class="metric-label" { (label) }
            span class="metric-value" { (value) }
        }
    }
}
