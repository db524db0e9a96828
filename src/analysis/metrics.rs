use crate::analysis::mean;
use crate::domain::listing::Listing;

/// The four headline numbers above the tabs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub count: usize,
    pub avg_rent: Option<f64>,
    pub avg_space: Option<f64>,
    /// Mean of per-row rent/space ratios, not the ratio of the means.
    pub avg_price_per_area: Option<f64>,
}

pub fn metrics(rows: &[&Listing]) -> Metrics {
    Metrics {
        count: rows.len(),
        avg_rent: mean(rows.iter().map(|l| l.total_rent)),
        avg_space: mean(
            rows.iter()
                .filter_map(|l| l.living_space)
                .filter(|s| !s.is_nan()),
        ),
        avg_price_per_area: mean(rows.iter().filter_map(|l| l.price_per_area())),
    }
}
