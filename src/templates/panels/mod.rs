//! One renderer per dashboard tab.

mod amenities;
mod geography;
mod relationships;
mod segments;

pub use amenities::amenities_panel;
pub use geography::geography_panel;
pub use relationships::relationships_panel;
pub use segments::segments_panel;
