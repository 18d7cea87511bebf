// Results page shaping: client-selected sort order plus booking deep links

use crate::criteria::SearchCriteria;
use crate::hotel::HotelSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    // Provider popularity order
    #[default]
    Recommended,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortOrder {
    // Unknown tokens fall back to the provider's order
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some("price_low") => SortOrder::PriceLow,
            Some("price_high") => SortOrder::PriceHigh,
            Some("rating") => SortOrder::Rating,
            _ => SortOrder::Recommended,
        }
    }

    // Stable sort in place; ties keep provider order
    pub fn apply(&self, hotels: &mut [HotelSummary]) {
        let compare: fn(&HotelSummary, &HotelSummary) -> Ordering = match self {
            SortOrder::Recommended => return,
            SortOrder::PriceLow => |a, b| a.price.total_cmp(&b.price),
            SortOrder::PriceHigh => |a, b| b.price.total_cmp(&a.price),
            SortOrder::Rating => |a, b| b.rating.total_cmp(&a.rating),
        };
        hotels.sort_by(compare);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    #[serde(flatten)]
    pub hotel: HotelSummary,
    pub booking_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPage {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub room_type: String,
    pub nights: Option<i64>,
    pub sort_by: SortOrder,
    pub total: usize,
    pub hotels: Vec<ResultCard>,
}

impl ResultsPage {
    pub fn build(
        criteria: &SearchCriteria,
        mut hotels: Vec<HotelSummary>,
        sort_by: SortOrder,
    ) -> Self {
        sort_by.apply(&mut hotels);

        let hotels: Vec<ResultCard> = hotels
            .into_iter()
            .map(|hotel| ResultCard {
                booking_url: hotel.booking_url(),
                hotel,
            })
            .collect();

        Self {
            location: criteria.location.clone(),
            check_in: criteria.check_in.clone(),
            check_out: criteria.check_out.clone(),
            room_type: criteria.room_type.clone(),
            nights: criteria.nights(),
            sort_by,
            total: hotels.len(),
            hotels,
        }
    }
}
