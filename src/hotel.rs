use crate::amenities::{map_facilities, Amenity};
use crate::provider::ProviderHotel;
use serde::{Deserialize, Serialize};

pub const BOOKING_BASE_URL: &str = "https://booking.com/hotel";

// Normalized hotel shape handed to callers
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub price: f64,
    pub image: String,
    pub amenities: Vec<Amenity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl HotelSummary {
    // Provider deep link when we have one, otherwise the public hotel page
    pub fn booking_url(&self) -> String {
        match self.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => format!("{}/{}", BOOKING_BASE_URL, self.id),
        }
    }
}

impl From<ProviderHotel> for HotelSummary {
    fn from(hotel: ProviderHotel) -> Self {
        let amenities = map_facilities(
            hotel
                .facilities
                .iter()
                .map(|facility| facility.facility_name.as_str()),
        );

        HotelSummary {
            id: hotel.hotel_id,
            name: hotel.hotel_name,
            location: hotel.address.clone().unwrap_or_default(),
            rating: hotel.review_score.unwrap_or(0.0),
            price: hotel.min_total_price.unwrap_or(0.0),
            image: hotel.max_photo_url.unwrap_or_default(),
            amenities,
            review_score: hotel.review_score,
            review_count: hotel.review_nr,
            stars: hotel.class,
            address: hotel.address,
            latitude: hotel.latitude,
            longitude: hotel.longitude,
            url: hotel.url,
        }
    }
}

pub fn map_hotels(hotels: Vec<ProviderHotel>) -> Vec<HotelSummary> {
    hotels.into_iter().map(HotelSummary::from).collect()
}
