// Hotel search adapter: query normalization, provider access and result shaping

pub mod amenities;
pub mod config;
pub mod criteria;
pub mod error;
pub mod hotel;
pub mod provider;
pub mod rapidapi;
pub mod results;
pub mod routes;
pub mod search;
pub mod suggest;
pub mod telemetry;

// Re-export key types for convenience
pub use amenities::Amenity;
pub use config::{ProviderConfig, ServerConfig};
pub use criteria::{RawSearchQuery, SearchCriteria};
pub use error::{ConfigError, SearchError};
pub use hotel::HotelSummary;
pub use provider::{HotelProvider, LocationCandidate};
pub use rapidapi::RapidApiProvider;
pub use results::{ResultsPage, SortOrder};
pub use search::HotelSearchService;
pub use suggest::LocationSuggestion;
