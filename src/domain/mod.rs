pub mod filter;
pub mod listing;
pub mod table;
