// RapidAPI-hosted Booking.com inventory client

use crate::config::ProviderConfig;
use crate::error::{ConfigError, SearchError};
use crate::provider::{
    HotelProvider, HotelSearchParams, LocationCandidate, ProviderHotel, ProviderSearchResponse,
    PROVIDER_LOCALE,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const KEY_HEADER: &str = "x-rapidapi-key";
const HOST_HEADER: &str = "x-rapidapi-host";

// Longest upstream error body we keep in an error message
const MAX_ERROR_BODY: usize = 200;

pub struct RapidApiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct LocationQuery<'a> {
    name: &'a str,
    locale: &'static str,
}

#[derive(Serialize)]
struct DetailsQuery<'a> {
    hotel_id: &'a str,
    locale: &'static str,
}

impl RapidApiProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(KEY_HEADER, header_value(KEY_HEADER, &config.api_key)?);
        headers.insert(HOST_HEADER, header_value(HOST_HEADER, &config.api_host)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ConfigError::InitError(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, SearchError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::info!(path = path, "Calling hotel provider");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(path, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(path, e))?;

        if !status.is_success() {
            let err = SearchError::Provider {
                status_code: Some(status.as_u16()),
                message: truncate(&body, MAX_ERROR_BODY),
            };
            tracing::error!(path = path, kind = err.kind(), error = %err, "Hotel provider rejected request");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            let err = SearchError::malformed(format!("Malformed payload from {}: {}", path, e));
            tracing::error!(path = path, kind = err.kind(), error = %err, "Hotel provider returned malformed payload");
            err
        })
    }

    fn transport_error(&self, path: &str, e: reqwest::Error) -> SearchError {
        let err = if e.is_timeout() {
            SearchError::Timeout(self.config.timeout_ms)
        } else {
            SearchError::Transport(e.to_string())
        };
        tracing::error!(path = path, kind = err.kind(), error = %err, "Failed to reach hotel provider");
        err
    }
}

#[async_trait]
impl HotelProvider for RapidApiProvider {
    async fn resolve_locations(&self, query: &str) -> Result<Vec<LocationCandidate>, SearchError> {
        self.get_json(
            "/hotels/locations",
            &LocationQuery {
                name: query,
                locale: PROVIDER_LOCALE,
            },
        )
        .await
    }

    async fn search_hotels(
        &self,
        params: &HotelSearchParams,
    ) -> Result<Vec<ProviderHotel>, SearchError> {
        let response: ProviderSearchResponse = self.get_json("/hotels/search", params).await?;
        Ok(response.result)
    }

    async fn hotel_details(&self, hotel_id: &str) -> Result<serde_json::Value, SearchError> {
        self.get_json(
            "/hotels/details",
            &DetailsQuery {
                hotel_id,
                locale: PROVIDER_LOCALE,
            },
        )
        .await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    let mut value = HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: "<redacted>".to_string(),
    })?;
    value.set_sensitive(true);
    Ok(value)
}

fn truncate(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
