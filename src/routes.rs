// HTTP surface: the inbound side of the adapter

use crate::criteria::{RawSearchQuery, SearchCriteria};
use crate::error::SearchError;
use crate::results::{ResultsPage, SortOrder};
use crate::search::HotelSearchService;
use crate::suggest::suggest_locations;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: HotelSearchService,
}

// Adapter failures all surface the same way; the specific kind was already logged
pub struct ApiFailure(SearchError);

impl From<SearchError> for ApiFailure {
    fn from(err: SearchError) -> Self {
        ApiFailure(err)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": message })),
        )
            .into_response()
    }
}

// Query string parameters; a repeated key keeps its first value
#[derive(Debug, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = HashMap::new();
        for (name, value) in pairs {
            params.entry(name).or_insert(value);
        }
        Self(params)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn search(&self) -> RawSearchQuery {
        let field = |name: &str| self.get(name).map(str::to_string);
        RawSearchQuery {
            location: field("location"),
            check_in: field("checkIn"),
            check_out: field("checkOut"),
            room_type: field("roomType"),
            guests: field("guests"),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/hotels", get(hotels))
        .route("/api/locations", get(locations))
        .route("/api/results", get(results))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// A non-empty hotelId selects the details path, otherwise the query is a search
async fn hotels(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiFailure> {
    let params = QueryParams::from_pairs(pairs);
    if let Some(hotel_id) = params.get("hotelId").filter(|id| !id.is_empty()) {
        let details = state.service.get_hotel_details(hotel_id).await?;
        return Ok(Json(details).into_response());
    }

    let criteria = SearchCriteria::normalize(&params.search());
    let hotels = state.service.search_hotels(&criteria).await?;
    Ok(Json(hotels).into_response())
}

async fn locations(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiFailure> {
    let params = QueryParams::from_pairs(pairs);
    let suggestions =
        suggest_locations(&state.service, params.get("query").unwrap_or_default()).await?;
    Ok(Json(suggestions).into_response())
}

async fn results(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ResultsPage>, ApiFailure> {
    let params = QueryParams::from_pairs(pairs);
    let criteria = SearchCriteria::normalize(&params.search());
    let sort_by = SortOrder::from_token(params.get("sortBy"));
    let hotels = state.service.search_hotels(&criteria).await?;
    Ok(Json(ResultsPage::build(&criteria, hotels, sort_by)))
}
