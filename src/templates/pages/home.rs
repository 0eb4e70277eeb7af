// templates/pages/home.rs

use crate::templates::{
    badge,
    components::{fetch_alert, property_card, skeleton_cells},
    desktop_layout,
};
use crate::view::{Phase, ViewSnapshot};
use maud::{html, Markup};

/// Values accepted by the listing service's `type` filter, with their labels.
pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("", "All types"),
    ("villa", "Villa"),
    ("farmhouse", "Farmhouse"),
    ("cottage", "Cottage"),
];

const GRID_CLASS: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6";

pub fn home_page(view: &ViewSnapshot, scene_url: &str) -> Markup {
    desktop_layout(
        "Stay in extraordinary villas & farmhouses",
        html! {
            (hero(view, scene_url))

            section id="listings" class="container mx-auto px-6 py-10" {
                div class="flex items-center justify-between mb-6" {
                    h2 class="text-xl md:text-2xl font-semibold" { "Featured stays" }
                    a
                        href="/listings/featured"
                        class="text-sm text-zinc-300 hover:text-white"
                        hx-get="/listings/featured"
                        hx-target="#listing-grid"
                        hx-swap="outerHTML"
                        hx-indicator="#listings"
                    { "Refresh" }
                }

                div class={ "pending-skeletons " (GRID_CLASS) } aria-hidden="true" {
                    (skeleton_cells())
                }

                (listing_grid(view))
            }
        },
    )
}

/// The swappable grid: skeletons while loading, otherwise one card per listing.
pub fn listing_grid(view: &ViewSnapshot) -> Markup {
    html! {
        @if view.is_loading() {
            // A newer fetch is still in flight; poll until it settles.
            div
                id="listing-grid"
                class=(GRID_CLASS)
                aria-busy="true"
                hx-get="/listings"
                hx-trigger="load delay:500ms"
                hx-swap="outerHTML"
            {
                (skeleton_cells())
            }
        } @else {
            div id="listing-grid" {
                @if let Phase::Failed(message) = &view.phase {
                    (fetch_alert(message))
                }
                @if view.items.is_empty() && view.phase == Phase::Ready {
                    p class="no-results text-zinc-400" { "No stays match your search yet." }
                }
                div class=(GRID_CLASS) {
                    @for item in &view.items {
                        (property_card(item))
                    }
                }
            }
        }
    }
}

fn hero(view: &ViewSnapshot, scene_url: &str) -> Markup {
    html! {
        section class="relative h-[68vh] w-full" {
            div class="absolute inset-0" {
                spline-viewer url=(scene_url) class="block h-full w-full" {}
            }
            div class="absolute inset-0 bg-gradient-to-b from-black/40 via-black/40 to-black pt-20 pointer-events-none" {}

            div class="relative z-10 h-full flex items-end" {
                div class="container mx-auto px-6 pb-10" {
                    div class="max-w-3xl" {
                        div class="flex gap-2 mb-4" {
                            (badge("Luxury"))
                            (badge("Villas"))
                            (badge("Farmhouses"))
                        }
                        h1 class="text-4xl md:text-6xl font-semibold tracking-tight" {
                            "Stay in extraordinary villas & farmhouses"
                        }
                        p class="mt-3 text-zinc-300 max-w-2xl" {
                            "Curated stays with private pools, serene views, and contemporary design. "
                            "Discover unique escapes tailored for groups, families, and weekend getaways."
                        }
                        (search_form(view))
                    }
                }
            }
        }
    }
}

fn search_form(view: &ViewSnapshot) -> Markup {
    html! {
        form
            id="search"
            method="get"
            action="/listings/search"
            class="mt-8 grid grid-cols-1 md:grid-cols-12 gap-3"
            hx-get="/listings/search"
            hx-target="#listing-grid"
            hx-swap="outerHTML"
            hx-indicator="#listings"
        {
            div class="md:col-span-6" {
                label class="sr-only" for="q" { "Search" }
                input
                    type="search"
                    id="q"
                    name="q"
                    value=(view.query)
                    placeholder="Search city, country or listing"
                    class="w-full rounded-xl bg-zinc-900/70 border border-white/10 px-4 py-3 outline-none focus:ring-2 ring-white/20";
            }
            div class="md:col-span-3" {
                label class="sr-only" for="type" { "Property type" }
                select
                    id="type"
                    name="type"
                    class="w-full rounded-xl bg-zinc-900/70 border border-white/10 px-4 py-3 outline-none focus:ring-2 ring-white/20"
                {
                    @for (value, label) in PROPERTY_TYPES {
                        option value=(value) selected[view.property_type == *value] { (label) }
                    }
                }
            }
            div class="md:col-span-3" {
                button
                    type="submit"
                    class="w-full rounded-xl bg-white/90 text-black font-medium px-4 py-3 hover:bg-white transition"
                { "Search" }
            }
        }
    }
}
