pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{amenity, badge};
pub use layouts::desktop::desktop_layout;
