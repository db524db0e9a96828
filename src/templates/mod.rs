pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;
pub mod panels;

// Re-exports for convenience
pub use components::{alert, metric_card};
pub use layouts::desktop::desktop_layout;
