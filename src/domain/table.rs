// src/domain/table.rs

use crate::domain::listing::{Listing, PriceCategory};
use std::collections::BTreeSet;

/// The loaded dataset. Immutable once built; views borrow its rows.
#[derive(Debug, Default)]
pub struct ListingTable {
    rows: Vec<Listing>,
}

impl ListingTable {
    pub fn new(rows: Vec<Listing>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows as a borrowed view, in load order.
    pub fn view(&self) -> Vec<&Listing> {
        self.rows.iter().collect()
    }

    /// Distinct regions, sorted. Rows without a region are skipped.
    pub fn regions(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|l| l.region.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Price bands present in the table, in band order.
    pub fn categories(&self) -> Vec<PriceCategory> {
        self.rows
            .iter()
            .map(|l| l.price_category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
