//! Aggregations behind each dashboard panel. Everything here is a pure
//! function of a filtered row set; undefined results are `None` or omitted.

pub mod amenities;
pub mod geography;
pub mod metrics;
pub mod relationships;
pub mod segments;

use crate::domain::listing::Listing;
use std::collections::BTreeMap;

pub use amenities::{amenity_stats, AmenityStats};
pub use geography::{region_stats, RegionStats};
pub use metrics::{metrics, Metrics};
pub use relationships::{crosstab, Crosstab};
pub use segments::{scatter_sample, segment_stats, ScatterPoint, SegmentStats};

/// Arithmetic mean of every value given; callers drop undefined values
/// first. `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Running sums for one group of rows.
#[derive(Debug, Default, Clone, Copy)]
struct GroupAcc {
    count: usize,
    rent_sum: f64,
    space_sum: f64,
    space_count: usize,
}

impl GroupAcc {
    fn push(&mut self, listing: &Listing) {
        self.count += 1;
        self.rent_sum += listing.total_rent;
        if let Some(space) = listing.living_space.filter(|s| !s.is_nan()) {
            self.space_sum += space;
            self.space_count += 1;
        }
    }

    /// Mean rent, rounded to one decimal. Groups are never empty.
    fn avg_rent(&self) -> f64 {
        round1(self.rent_sum / self.count as f64)
    }

    fn avg_space(&self) -> Option<f64> {
        (self.space_count > 0).then(|| round1(self.space_sum / self.space_count as f64))
    }
}

/// Groups rows by `key`, skipping rows for which it returns `None`.
fn group_by<'a, K, F>(rows: &[&'a Listing], key: F) -> BTreeMap<K, GroupAcc>
where
    K: Ord,
    F: Fn(&'a Listing) -> Option<K>,
{
    let mut groups: BTreeMap<K, GroupAcc> = BTreeMap::new();
    for &listing in rows {
        if let Some(k) = key(listing) {
            groups.entry(k).or_default().push(listing);
        }
    }
    groups
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_undefined() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(mean(vec![1.0, 2.0, 6.0]), Some(3.0));
    }

    #[test]
    fn round1_rounds_half_away_from_zero() {
        assert_eq!(round1(812.25), 812.3);
        assert_eq!(round1(-3.14), -3.1);
    }
}
