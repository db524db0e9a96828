use crate::analysis::group_by;
use crate::domain::listing::{Listing, PriceCategory};
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on points drawn in the space-vs-rent scatter.
pub const SCATTER_SAMPLE_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStats {
    pub category: PriceCategory,
    pub avg_rent: f64,
    pub count: usize,
    pub avg_space: Option<f64>,
}

/// Per price band aggregates, one row per band present, in band order.
pub fn segment_stats(rows: &[&Listing]) -> Vec<SegmentStats> {
    group_by(rows, |l| Some(l.price_category))
        .into_iter()
        .map(|(category, acc)| SegmentStats {
            category,
            avg_rent: acc.avg_rent(),
            count: acc.count,
            avg_space: acc.avg_space(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub living_space: f64,
    pub total_rent: f64,
    pub category: PriceCategory,
}

/// Draws up to `max` rows uniformly at random (all rows when there are
/// fewer) and keeps those with a living space to plot against.
pub fn scatter_sample<R>(rows: &[&Listing], max: usize, rng: &mut R) -> Vec<ScatterPoint>
where
    R: Rng + ?Sized,
{
    let picked: Vec<&Listing> = if rows.len() > max {
        rows.choose_multiple(rng, max).copied().collect()
    } else {
        rows.to_vec()
    };

    picked
        .into_iter()
        .filter_map(|l| {
            let living_space = l.living_space.filter(|s| s.is_finite())?;
            Some(ScatterPoint {
                living_space,
                total_rent: l.total_rent,
                category: l.price_category,
            })
        })
        .collect()
}
