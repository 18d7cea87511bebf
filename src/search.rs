// Hotel search adapter: resolves the destination, searches, and reshapes provider records

use crate::criteria::SearchCriteria;
use crate::error::SearchError;
use crate::hotel::{map_hotels, HotelSummary};
use crate::provider::{HotelProvider, HotelSearchParams, LocationCandidate};
use std::sync::Arc;

#[derive(Clone)]
pub struct HotelSearchService {
    provider: Arc<dyn HotelProvider>,
}

impl HotelSearchService {
    pub fn new(provider: Arc<dyn HotelProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, SearchError> {
        self.provider.resolve_locations(query).await
    }

    // The destination is whatever the provider lists first; there is no disambiguation.
    // No candidates, or a first candidate without an id, ends the search before any
    // hotel search is issued. Results keep the provider's popularity order.
    pub async fn search_hotels(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<HotelSummary>, SearchError> {
        let candidates = self.provider.resolve_locations(&criteria.location).await?;

        let dest_id = match candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.destination_id)
            .filter(|id| !id.is_empty())
        {
            Some(id) => id,
            None => {
                let err = SearchError::LocationNotFound(criteria.location.clone());
                tracing::warn!(
                    location = %criteria.location,
                    kind = err.kind(),
                    "No destination for location"
                );
                return Err(err);
            }
        };

        tracing::debug!(
            location = %criteria.location,
            dest_id = %dest_id,
            "Resolved destination"
        );

        let params = HotelSearchParams::for_destination(&dest_id, criteria);
        let hotels = self.provider.search_hotels(&params).await?;

        tracing::info!(
            dest_id = %dest_id,
            hotels = hotels.len(),
            "Hotel search completed"
        );
        Ok(map_hotels(hotels))
    }

    pub async fn get_hotel_details(
        &self,
        hotel_id: &str,
    ) -> Result<serde_json::Value, SearchError> {
        self.provider.hotel_details(hotel_id).await
    }
}
