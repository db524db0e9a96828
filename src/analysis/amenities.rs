use crate::analysis::mean;
use crate::domain::listing::{Amenity, Listing};

#[derive(Debug, Clone, PartialEq)]
pub struct AmenityStats {
    pub amenity: Amenity,
    /// Relative rent uplift of listings with the amenity over those without.
    pub premium_pct: f64,
    /// Share of all rows that have the amenity.
    pub prevalence_pct: f64,
}

/// Rent premium and prevalence for every amenity, highest premium first.
///
/// Rows with the flag missing count toward neither mean, but do count in the
/// prevalence denominator. Amenities whose premium is undefined (no rows
/// with the amenity, or a zero/undefined baseline) are omitted.
pub fn amenity_stats(rows: &[&Listing]) -> Vec<AmenityStats> {
    if rows.is_empty() {
        return Vec::new();
    }

    let mut stats: Vec<AmenityStats> = Amenity::ALL
        .into_iter()
        .filter_map(|amenity| stats_for(rows, amenity))
        .collect();

    stats.sort_by(|a, b| b.premium_pct.total_cmp(&a.premium_pct));
    stats
}

fn stats_for(rows: &[&Listing], amenity: Amenity) -> Option<AmenityStats> {
    let rent_where = |flag: bool| {
        mean(
            rows.iter()
                .filter(|l| l.amenities.get(amenity) == Some(flag))
                .map(|l| l.total_rent),
        )
    };

    let with = rent_where(true)?;
    let without = rent_where(false).filter(|m| *m != 0.0)?;

    let present = rows
        .iter()
        .filter(|l| l.amenities.get(amenity) == Some(true))
        .count();

    Some(AmenityStats {
        amenity,
        premium_pct: (with - without) / without * 100.0,
        prevalence_pct: present as f64 / rows.len() as f64 * 100.0,
    })
}
