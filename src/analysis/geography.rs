use crate::analysis::group_by;
use crate::domain::listing::Listing;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    pub region: String,
    pub avg_rent: f64,
    pub count: usize,
    pub avg_space: Option<f64>,
}

/// Per federal state aggregates, most expensive first. Rows without a
/// region are left out.
pub fn region_stats(rows: &[&Listing]) -> Vec<RegionStats> {
    let mut stats: Vec<RegionStats> = group_by(rows, |l| l.region.as_deref())
        .into_iter()
        .map(|(region, acc)| RegionStats {
            region: region.to_string(),
            avg_rent: acc.avg_rent(),
            count: acc.count,
            avg_space: acc.avg_space(),
        })
        .collect();

    // group_by yields regions in name order, so the stable sort keeps ties alphabetical
    stats.sort_by(|a, b| b.avg_rent.total_cmp(&a.avg_rent));
    stats
}
