// src/domain/listing.rs

use serde::{Deserialize, Deserializer};

/// Placeholder cover used when a listing has no usable image.
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1499696010189-9d2150aee9f6";

/// Appended to every cover URL so the image CDN serves a cropped thumbnail.
pub const COVER_SUFFIX: &str = "?auto=format&fit=crop&w=1200&q=60";

/// Only this many amenity badges are shown on a card.
pub const MAX_AMENITIES: usize = 3;

/// A rentable property as returned by the listing service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawListing")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    pub country: String,
    pub price_per_night: f64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
}

// Wire shape. Records come from more than one backend revision: the id may be
// `_id`, `id` or both, the price snake or camel cased, and any field null.
#[derive(Deserialize)]
struct RawListing {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    price_per_night: Option<f64>,
    #[serde(rename = "pricePerNight", default, deserialize_with = "null_as_default")]
    price_per_night_camel: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    amenities: Vec<String>,
}

impl From<RawListing> for Listing {
    fn from(raw: RawListing) -> Self {
        Self {
            id: raw.mongo_id.or(raw.id).unwrap_or_default(),
            title: raw.title,
            location: raw.location,
            country: raw.country,
            price_per_night: raw
                .price_per_night
                .or(raw.price_per_night_camel)
                .unwrap_or_default(),
            images: raw.images,
            amenities: raw.amenities,
        }
    }
}

impl Listing {
    /// Cover image URL including the crop suffix.
    pub fn cover_url(&self) -> String {
        let cover = self
            .images
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_IMAGE);

        format!("{cover}{COVER_SUFFIX}")
    }

    /// "$120/night", or "$99.50/night" for fractional prices.
    pub fn price_label(&self) -> String {
        let price = self.price_per_night;
        if price.fract() == 0.0 {
            format!("${price:.0}/night")
        } else {
            format!("${price:.2}/night")
        }
    }

    pub fn place(&self) -> String {
        format!("{}, {}", self.location, self.country)
    }

    pub fn shown_amenities(&self) -> &[String] {
        let n = self.amenities.len().min(MAX_AMENITIES);
        &self.amenities[..n]
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
