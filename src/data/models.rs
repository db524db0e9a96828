use crate::domain::listing::{Amenities, Amenity, Listing};
use serde::{de, Deserialize, Deserializer};

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "regio1",
    "totalRent",
    "livingSpace",
    "balcony",
    "hasKitchen",
    "lift",
    "garden",
    "cellar",
];

// Keep the amenity columns in sync with the domain list.
const _: () = assert!(REQUIRED_COLUMNS.len() == 3 + Amenity::ALL.len());

/// One CSV record, as found in the dataset. Unlisted columns are ignored.
#[derive(Debug, Deserialize)]
pub struct RawListing {
    #[serde(rename = "regio1", deserialize_with = "text")]
    pub region: Option<String>,
    #[serde(rename = "totalRent", deserialize_with = "number")]
    pub total_rent: Option<f64>,
    #[serde(rename = "livingSpace", deserialize_with = "number")]
    pub living_space: Option<f64>,

    #[serde(deserialize_with = "flag")]
    pub balcony: Option<bool>,
    #[serde(rename = "hasKitchen", deserialize_with = "flag")]
    pub has_kitchen: Option<bool>,
    #[serde(deserialize_with = "flag")]
    pub lift: Option<bool>,
    #[serde(deserialize_with = "flag")]
    pub garden: Option<bool>,
    #[serde(deserialize_with = "flag")]
    pub cellar: Option<bool>,
}

impl RawListing {
    /// Converts the record into a `Listing`, or `None` when it has no rent
    /// or its rent falls outside the price bands.
    pub fn into_listing(self) -> Option<Listing> {
        let amenities = Amenities {
            balcony: self.balcony,
            has_kitchen: self.has_kitchen,
            lift: self.lift,
            garden: self.garden,
            cellar: self.cellar,
        };

        Listing::new(self.region, self.total_rent?, self.living_space, amenities)
    }
}

fn is_missing(raw: &str) -> bool {
    matches!(raw, "" | "NA" | "NaN" | "nan" | "null")
}

fn raw_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !is_missing(s)))
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    raw_cell(deserializer)
}

fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match raw_cell(deserializer)? {
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid number '{s}'"))),
        None => Ok(None),
    }
}

/// Accepts the usual spellings of a boolean; `1.0`/`0.0` show up when a
/// column went through a float conversion upstream.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "1.0" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "0.0" => Some(false),
        _ => None,
    }
}

fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match raw_cell(deserializer)? {
        Some(s) => parse_flag(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid boolean '{s}'"))),
        None => Ok(None),
    }
}
