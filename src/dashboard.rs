// dashboard.rs
//
// Turns (dataset, selection) into everything the page needs. One call per
// request; nothing here touches HTTP or markup.

use crate::analysis::{
    self, AmenityStats, Crosstab, Metrics, RegionStats, ScatterPoint, SegmentStats,
};
use crate::analysis::segments::SCATTER_SAMPLE_SIZE;
use crate::data::Snapshot;
use crate::domain::filter::{Filter, ALL_SEGMENTS, ALL_STATES};
use crate::domain::listing::PriceCategory;
use chrono::{DateTime, Utc};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Segments,
    Geography,
    Amenities,
    Relationships,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Segments, Tab::Geography, Tab::Amenities, Tab::Relationships];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Segments => "segments",
            Tab::Geography => "geography",
            Tab::Amenities => "amenities",
            Tab::Relationships => "relationships",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Segments => "🏘️ Market Segments",
            Tab::Geography => "🗺️ Geography",
            Tab::Amenities => "💎 Amenities",
            Tab::Relationships => "🔗 Relationships",
        }
    }

    /// Unknown or missing slugs land on the first tab.
    pub fn from_slug(slug: Option<&str>) -> Self {
        slug.and_then(|s| Self::ALL.into_iter().find(|t| t.slug() == s))
            .unwrap_or_default()
    }
}

/// Data for the active tab only.
#[derive(Debug)]
pub enum Panel {
    Segments {
        stats: Vec<SegmentStats>,
        scatter: Vec<ScatterPoint>,
    },
    Geography {
        stats: Vec<RegionStats>,
    },
    Amenities {
        stats: Vec<AmenityStats>,
    },
    Relationships {
        crosstab: Crosstab,
    },
}

#[derive(Debug)]
pub struct DashboardVm {
    pub total_listings: usize,
    pub loaded_at: DateTime<Utc>,
    /// Selector options, without the "all" sentinels.
    pub regions: Vec<String>,
    pub categories: Vec<PriceCategory>,
    pub filter: Filter,
    pub tab: Tab,
    pub metrics: Metrics,
    pub panel: Panel,
}

impl DashboardVm {
    pub fn build<R>(snapshot: &Snapshot, filter: Filter, tab: Tab, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let table = &snapshot.table;
        let rows = filter.apply(table.view());

        let panel = match tab {
            Tab::Segments => Panel::Segments {
                stats: analysis::segment_stats(&rows),
                scatter: analysis::scatter_sample(&rows, SCATTER_SAMPLE_SIZE, rng),
            },
            Tab::Geography => Panel::Geography {
                stats: analysis::region_stats(&rows),
            },
            Tab::Amenities => Panel::Amenities {
                stats: analysis::amenity_stats(&rows),
            },
            Tab::Relationships => Panel::Relationships {
                crosstab: analysis::crosstab(&rows),
            },
        };

        DashboardVm {
            total_listings: table.len(),
            loaded_at: snapshot.loaded_at,
            regions: table.regions().into_iter().map(String::from).collect(),
            categories: table.categories(),
            metrics: analysis::metrics(&rows),
            filter,
            tab,
            panel,
        }
    }

    /// Link to `tab` keeping the current selection.
    pub fn tab_href(&self, tab: Tab) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair(
            "region",
            self.filter.region.as_deref().unwrap_or(ALL_STATES),
        );
        query.append_pair(
            "segment",
            self.filter.category.map(|c| c.label()).unwrap_or(ALL_SEGMENTS),
        );
        query.append_pair("tab", tab.slug());

        format!("/?{}", query.finish())
    }
}
