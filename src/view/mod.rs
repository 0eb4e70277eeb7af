pub mod sessions;
pub mod state;
pub mod storefront;

pub use sessions::SessionStore;
pub use state::{Phase, ViewSnapshot, ViewState};
pub use storefront::Storefront;
