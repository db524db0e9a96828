use crate::dashboard::{DashboardVm, Panel, Tab};
use crate::templates::components::filter_sidebar;
use crate::templates::format::{count, maybe_area, maybe_euros, maybe_euros_1};
use crate::templates::panels::{
    amenities_panel, geography_panel, relationships_panel, segments_panel,
};
use crate::templates::{alert, desktop_layout, metric_card};
use maud::{html, Markup};

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let loaded = format!(
        "✅ Data loaded successfully! {} listings (as of {} UTC)",
        count(vm.total_listings),
        vm.loaded_at.format("%Y-%m-%d %H:%M")
    );

    desktop_layout(
        "German Rental Market Analysis",
        html! {
            div class="layout" {
                (filter_sidebar(&vm.regions, &vm.categories, &vm.filter, vm.tab.slug()))

                main class="container" {
                    (alert("success", &loaded))

                    section class="metrics" {
                        h2 { "📊 Key Metrics" }
                        div class="metric-row" {
                            (metric_card("Total Listings", &count(vm.metrics.count)))
                            (metric_card("Average Rent", &maybe_euros(vm.metrics.avg_rent)))
                            (metric_card("Average Space", &maybe_area(vm.metrics.avg_space)))
                            (metric_card("Price per m²", &maybe_euros_1(vm.metrics.avg_price_per_area)))
                        }
                    }

                    (tab_nav(vm))
                    (panel(&vm.panel))
                }
            }
        },
    )
}

fn tab_nav(vm: &DashboardVm) -> Markup {
    html! {
        nav class="tabs" {
            ul {
                @for tab in Tab::ALL {
                    li {
                        a href=(vm.tab_href(tab))
                            class=[(tab == vm.tab).then_some("active")]
                            aria-current=[(tab == vm.tab).then_some("page")]
                        { (tab.label()) }
                    }
                }
            }
        }
    }
}

fn panel(panel: &Panel) -> Markup {
    match panel {
        Panel::Segments { stats, scatter } => segments_panel(stats, scatter),
        Panel::Geography { stats } => geography_panel(stats),
        Panel::Amenities { stats } => amenities_panel(stats),
        Panel::Relationships { crosstab } => relationships_panel(crosstab),
    }
}
