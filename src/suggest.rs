use crate::error::SearchError;
use crate::provider::LocationCandidate;
use crate::search::HotelSearchService;
use serde::Serialize;

// Shorter queries are not worth a provider round-trip
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSuggestion {
    pub dest_id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}

impl LocationSuggestion {
    // Candidates without a destination id can't be searched, so they are not offered
    pub fn from_candidate(candidate: LocationCandidate) -> Option<Self> {
        let dest_id = candidate.destination_id.filter(|id| !id.is_empty())?;

        let place = candidate
            .city_name
            .as_deref()
            .filter(|city| !city.is_empty())
            .unwrap_or(&candidate.display_name);

        let label = match candidate.country_name.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => format!("{}, {}", place, country),
            None => place.to_string(),
        };

        Some(Self {
            dest_id,
            label,
            city_name: candidate.city_name,
            country_name: candidate.country_name,
        })
    }
}

// Autocomplete entries for a partially typed location, backed by the provider's location search
pub async fn suggest_locations(
    service: &HotelSearchService,
    query: &str,
) -> Result<Vec<LocationSuggestion>, SearchError> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Ok(Vec::new());
    }

    let candidates = service.resolve_locations(query).await?;
    Ok(candidates
        .into_iter()
        .filter_map(LocationSuggestion::from_candidate)
        .collect())
}
