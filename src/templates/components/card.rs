use crate::domain::Listing;
use crate::templates::{amenity, badge};
use maud::{html, Markup};

pub fn property_card(item: &Listing) -> Markup {
    html! {
        article
            class="property-card group relative overflow-hidden rounded-2xl border border-white/10 bg-zinc-900/60 backdrop-blur transition hover:-translate-y-0.5 hover:shadow-2xl"
            data-listing-id=(item.id)
        {
            div class="aspect-[16/11] w-full overflow-hidden" {
                img
                    class="cover h-full w-full object-cover transition duration-500 group-hover:scale-105"
                    src=(item.cover_url())
                    alt=(item.title)
                    loading="lazy";
            }
            div class="p-4" {
                div class="flex items-center justify-between" {
                    h3 class="text-white font-semibold truncate pr-2" { (item.title) }
                    (badge(&item.price_label()))
                }
                p class="mt-1 text-zinc-400 text-sm line-clamp-2" { (item.place()) }
                div class="mt-3 flex flex-wrap gap-2" {
                    @for label in item.shown_amenities() {
                        (amenity(label))
                    }
                }
            }
        }
    }
}
