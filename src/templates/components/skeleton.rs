use maud::{html, Markup};

/// Placeholder cells rendered while a fetch is pending.
pub const SKELETON_COUNT: usize = 6;

pub fn skeleton_cells() -> Markup {
    html! {
        @for _ in 0..SKELETON_COUNT {
            div class="skeleton-card h-60 rounded-2xl bg-zinc-900/60 border border-white/10 animate-pulse" {}
        }
    }
}
