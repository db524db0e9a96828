use crate::domain::listing::{Listing, PriceCategory};
use std::collections::{BTreeMap, BTreeSet};

/// Region × price band distribution. Each row of `percentages` sums to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct Crosstab {
    pub regions: Vec<String>,
    pub categories: Vec<PriceCategory>,
    pub percentages: Vec<Vec<f64>>,
}

pub fn crosstab(rows: &[&Listing]) -> Crosstab {
    let mut counts: BTreeMap<&str, BTreeMap<PriceCategory, usize>> = BTreeMap::new();
    let mut present: BTreeSet<PriceCategory> = BTreeSet::new();

    for listing in rows {
        let Some(region) = listing.region.as_deref() else {
            continue;
        };
        *counts
            .entry(region)
            .or_default()
            .entry(listing.price_category)
            .or_default() += 1;
        present.insert(listing.price_category);
    }

    let categories: Vec<PriceCategory> = present.into_iter().collect();
    let percentages = counts
        .values()
        .map(|by_category| {
            let total: usize = by_category.values().sum();
            categories
                .iter()
                .map(|c| {
                    let n = by_category.get(c).copied().unwrap_or(0);
                    n as f64 / total as f64 * 100.0
                })
                .collect()
        })
        .collect();

    Crosstab {
        regions: counts.keys().map(|r| r.to_string()).collect(),
        categories,
        percentages,
    }
}
