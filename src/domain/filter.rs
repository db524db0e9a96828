// src/domain/filter.rs

use crate::domain::listing::{Listing, PriceCategory};

/// Selector value meaning "no region filter".
pub const ALL_STATES: &str = "All States";
/// Selector value meaning "no price band filter".
pub const ALL_SEGMENTS: &str = "All Segments";

/// The sidebar selection. `None` on either side means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub region: Option<String>,
    pub category: Option<PriceCategory>,
}

impl Filter {
    /// Builds a filter from raw selector values, treating missing, empty and
    /// sentinel values as "all".
    pub fn from_selection(region: Option<&str>, segment: Option<&str>) -> Result<Self, String> {
        let region = region
            .filter(|r| !r.is_empty() && *r != ALL_STATES)
            .map(str::to_string);

        let category = match segment.filter(|s| !s.is_empty() && *s != ALL_SEGMENTS) {
            Some(label) => Some(
                PriceCategory::from_label(label)
                    .ok_or_else(|| format!("Unknown price segment '{label}'"))?,
            ),
            None => None,
        };

        Ok(Filter { region, category })
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let region_ok = match &self.region {
            Some(region) => listing.region.as_deref() == Some(region.as_str()),
            None => true,
        };
        let category_ok = match self.category {
            Some(category) => listing.price_category == category,
            None => true,
        };

        region_ok && category_ok
    }

    /// Keeps the matching rows, preserving their order.
    pub fn apply<'a, I>(&self, rows: I) -> Vec<&'a Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        rows.into_iter().filter(|l| self.matches(l)).collect()
    }
}
