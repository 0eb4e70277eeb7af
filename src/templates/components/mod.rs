use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod skeleton;

pub use card::property_card;
pub use error::{error_page, fetch_alert};
pub use skeleton::skeleton_cells;

pub fn badge(label: &str) -> Markup {
    html! {
        span class="badge inline-flex items-center rounded-full bg-white/10 px-3 py-1 text-xs font-medium text-white backdrop-blur border border-white/10" {
            (label)
        }
    }
}

pub fn amenity(label: &str) -> Markup {
    html! {
        span class="amenity inline-flex items-center gap-2 rounded-full bg-zinc-900/60 px-3 py-1 text-xs text-zinc-200 border border-white/10" {
            span class="h-1.5 w-1.5 rounded-full bg-emerald-400" {}
            (label)
        }
    }
}
