pub mod home;

pub use home::{home_page, listing_grid, PROPERTY_TYPES};
