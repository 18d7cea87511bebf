// Upstream hotel-inventory provider: wire types and the trait the adapter talks through

use crate::criteria::SearchCriteria;
use crate::error::SearchError;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

pub const PROVIDER_LOCALE: &str = "en-us";
pub const PROVIDER_UNITS: &str = "metric";
pub const PROVIDER_ORDER_BY: &str = "popularity";
pub const PROVIDER_CURRENCY: &str = "USD";

// Data structures for the provider's location search response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationCandidate {
    // Absent when the provider sends no usable id for the candidate
    #[serde(
        rename = "dest_id",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_id: Option<String>,
    #[serde(rename = "name", default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}

// Data structures for the provider's hotel search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSearchResponse {
    pub result: Vec<ProviderHotel>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderHotel {
    #[serde(deserialize_with = "null_as_default")]
    pub hotel_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub hotel_name: String,
    pub address: Option<String>,
    pub review_score: Option<f64>,
    pub review_nr: Option<u64>,
    pub class: Option<f64>,
    pub min_total_price: Option<f64>,
    pub max_photo_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub facilities: Vec<ProviderFacility>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderFacility {
    #[serde(default, deserialize_with = "null_as_default")]
    pub facility_name: String,
}

// Query parameters for the hotel search endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelSearchParams {
    pub dest_id: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub room_number: u32,
    pub adults_number: u32,
    pub units: &'static str,
    pub order_by: &'static str,
    pub locale: &'static str,
    pub currency: &'static str,
}

impl HotelSearchParams {
    // Dates go through verbatim; the provider is the one to reject them
    pub fn for_destination(dest_id: &str, criteria: &SearchCriteria) -> Self {
        Self {
            dest_id: dest_id.to_string(),
            checkin_date: criteria.check_in.clone(),
            checkout_date: criteria.check_out.clone(),
            room_number: criteria.room_count(),
            adults_number: criteria.adult_count(),
            units: PROVIDER_UNITS,
            order_by: PROVIDER_ORDER_BY,
            locale: PROVIDER_LOCALE,
            currency: PROVIDER_CURRENCY,
        }
    }
}

#[async_trait]
pub trait HotelProvider: Send + Sync + 'static {
    // Location candidates for a free-text place name, in provider order
    async fn resolve_locations(&self, query: &str) -> Result<Vec<LocationCandidate>, SearchError>;

    // Raw hotel records for a resolved destination
    async fn search_hotels(
        &self,
        params: &HotelSearchParams,
    ) -> Result<Vec<ProviderHotel>, SearchError>;

    // Detail payload, untouched
    async fn hotel_details(&self, hotel_id: &str) -> Result<serde_json::Value, SearchError>;
}

// dest_id may arrive as a string, a bare number or null
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Some(value),
        serde_json::Value::Number(value) => Some(value.to_string()),
        _ => None,
    })
}

// One null field must not sink the whole response
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
