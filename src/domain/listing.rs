// src/domain/listing.rs

use std::fmt;

/// Upper rent boundaries of each price band, paired with the band.
/// Bands are closed on the upper side: (0, 500], (500, 1000], ...
const PRICE_BANDS: [(f64, PriceCategory); 4] = [
    (500.0, PriceCategory::Budget),
    (1000.0, PriceCategory::Economy),
    (1500.0, PriceCategory::MidRange),
    (RENT_CEILING, PriceCategory::Premium),
];

/// Listings above this rent never make it into the table.
pub const RENT_CEILING: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceCategory {
    Budget,
    Economy,
    MidRange,
    Premium,
}

impl PriceCategory {
    pub const ALL: [PriceCategory; 4] = [
        PriceCategory::Budget,
        PriceCategory::Economy,
        PriceCategory::MidRange,
        PriceCategory::Premium,
    ];

    /// Bins a rent into its price band. Rents at or below zero, above the
    /// ceiling, or NaN have no band.
    pub fn from_rent(total_rent: f64) -> Option<Self> {
        if total_rent.is_nan() || total_rent <= 0.0 {
            return None;
        }

        PRICE_BANDS
            .iter()
            .find(|(upper, _)| total_rent <= *upper)
            .map(|(_, category)| *category)
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceCategory::Budget => "Budget",
            PriceCategory::Economy => "Economy",
            PriceCategory::MidRange => "Mid-Range",
            PriceCategory::Premium => "Premium",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Boolean attribute columns analysed by the amenities view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Balcony,
    HasKitchen,
    Lift,
    Garden,
    Cellar,
}

impl Amenity {
    pub const ALL: [Amenity; 5] = [
        Amenity::Balcony,
        Amenity::HasKitchen,
        Amenity::Lift,
        Amenity::Garden,
        Amenity::Cellar,
    ];

    /// Column name in the source CSV.
    pub fn column(self) -> &'static str {
        match self {
            Amenity::Balcony => "balcony",
            Amenity::HasKitchen => "hasKitchen",
            Amenity::Lift => "lift",
            Amenity::Garden => "garden",
            Amenity::Cellar => "cellar",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Amenities {
    pub balcony: Option<bool>,
    pub has_kitchen: Option<bool>,
    pub lift: Option<bool>,
    pub garden: Option<bool>,
    pub cellar: Option<bool>,
}

impl Amenities {
    pub fn get(&self, amenity: Amenity) -> Option<bool> {
        match amenity {
            Amenity::Balcony => self.balcony,
            Amenity::HasKitchen => self.has_kitchen,
            Amenity::Lift => self.lift,
            Amenity::Garden => self.garden,
            Amenity::Cellar => self.cellar,
        }
    }
}

/// One rental offer, as kept after load-time filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Federal state (`regio1`), e.g. `Nordrhein_Westfalen`.
    pub region: Option<String>,
    pub total_rent: f64,
    pub living_space: Option<f64>,
    pub price_category: PriceCategory,
    pub amenities: Amenities,
}

impl Listing {
    /// Builds a listing, deriving its price band. Returns `None` for rows
    /// that fall outside every band.
    pub fn new(
        region: Option<String>,
        total_rent: f64,
        living_space: Option<f64>,
        amenities: Amenities,
    ) -> Option<Self> {
        let price_category = PriceCategory::from_rent(total_rent)?;

        Some(Listing {
            region,
            total_rent,
            living_space,
            price_category,
            amenities,
        })
    }

    /// Rent per square meter; `None` when the ratio is undefined.
    pub fn price_per_area(&self) -> Option<f64> {
        self.living_space
            .map(|space| self.total_rent / space)
            .filter(|ratio| ratio.is_finite())
    }
}

/// Human-friendly region name (`Baden_Württemberg` -> `Baden Württemberg`).
pub fn region_label(region: &str) -> String {
    region.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_are_closed_on_the_upper_side() {
        assert_eq!(PriceCategory::from_rent(1.0), Some(PriceCategory::Budget));
        assert_eq!(PriceCategory::from_rent(500.0), Some(PriceCategory::Budget));
        assert_eq!(PriceCategory::from_rent(500.01), Some(PriceCategory::Economy));
        assert_eq!(PriceCategory::from_rent(750.0), Some(PriceCategory::Economy));
        assert_eq!(PriceCategory::from_rent(1000.0), Some(PriceCategory::Economy));
        assert_eq!(PriceCategory::from_rent(1500.0), Some(PriceCategory::MidRange));
        assert_eq!(PriceCategory::from_rent(1500.5), Some(PriceCategory::Premium));
        assert_eq!(PriceCategory::from_rent(3000.0), Some(PriceCategory::Premium));
    }

    #[test]
    fn rents_outside_the_bins_have_no_category() {
        assert_eq!(PriceCategory::from_rent(0.0), None);
        assert_eq!(PriceCategory::from_rent(-20.0), None);
        assert_eq!(PriceCategory::from_rent(3000.5), None);
        assert_eq!(PriceCategory::from_rent(f64::NAN), None);
    }

    #[test]
    fn labels_round_trip() {
        for category in PriceCategory::ALL {
            assert_eq!(PriceCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(PriceCategory::from_label("Luxury"), None);
    }

    #[test]
    fn price_per_area_is_undefined_without_space() {
        let mut listing = Listing::new(None, 900.0, Some(0.0), Amenities::default()).unwrap();
        assert_eq!(listing.price_per_area(), None);

        listing.living_space = None;
        assert_eq!(listing.price_per_area(), None);

        listing.living_space = Some(60.0);
        assert_eq!(listing.price_per_area(), Some(15.0));
    }
}
