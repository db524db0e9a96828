use crate::domain::filter::{Filter, ALL_SEGMENTS, ALL_STATES};
use crate::domain::listing::{region_label, PriceCategory};
use maud::{html, Markup};

/// Sidebar selectors. Changing either one resubmits the form, which
/// recomputes the page for the new selection.
pub fn filter_sidebar(
    regions: &[String],
    categories: &[PriceCategory],
    filter: &Filter,
    tab_slug: &str,
) -> Markup {
    html! {
        aside class="sidebar" {
            h2 { "🔍 Filter Data" }
            form method="get" action="/" {
                input type="hidden" name="tab" value=(tab_slug);

                label for="region" { "Select Federal State" }
                select name="region" id="region" onchange="this.form.submit()" {
                    option value=(ALL_STATES) selected[filter.region.is_none()] { (ALL_STATES) }
                    @for region in regions {
                        option value=(region) selected[filter.region.as_deref() == Some(region.as_str())] {
                            (region_label(region))
                        }
                    }
                }

                label for="segment" { "Select Price Segment" }
                select name="segment" id="segment" onchange="this.form.submit()" {
                    option value=(ALL_SEGMENTS) selected[filter.category.is_none()] { (ALL_SEGMENTS) }
                    @for category in categories {
                        option value=(category.label()) selected[filter.category == Some(*category)] {
                            (category.label())
                        }
                    }
                }

                noscript { button type="submit" { "Apply" } }
            }

            form method="post" action="/refresh" class="refresh" {
                button type="submit" { "Reload dataset" }
            }
        }
    }
}
