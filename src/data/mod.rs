mod cache;
mod load_error;
mod loader;
mod models;

pub use cache::{DatasetCache, Snapshot};
pub use load_error::LoadError;
pub use loader::DataSource;
