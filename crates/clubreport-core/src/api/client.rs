//! API client for the Sqorz results service.
//!
//! This module provides the `SqorzClient` struct for fetching club event
//! summaries and series rankings. The client is an explicit value handed to
//! whoever needs it; there is no process-wide instance.

use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{ClubEvent, ClubEventsResponse, SeriesResponse, SeriesResult};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the public Sqorz JSON endpoints
pub const API_BASE_URL: &str = "https://our.sqorz.com/json";

/// User agent identifying this tool to Sqorz
pub const USER_AGENT: &str = "https://github.com/alexgisby/bmx_club_reporter/1.0.0";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for `SqorzClient`.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// API client for Sqorz.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SqorzClient {
    client: Client,
    base_url: String,
}

impl SqorzClient {
    /// Create a new API client
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response, path: &str) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, path, &headers, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_response(response, path).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", url, e))
        })
    }

    // ===== Data Fetching Methods =====

    /// Fetch the organization's events held in `year`, oldest first.
    pub async fn fetch_club_events(&self, org: &str, year: i32) -> Result<Vec<ClubEvent>, ApiError> {
        let response: ClubEventsResponse = self.get(&format!("/org/{}", org)).await?;

        let mut events: Vec<ClubEvent> = response
            .events
            .iter()
            .filter(|e| e.year() == Some(year))
            .map(|e| e.to_club_event())
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date));

        debug!(org = org, year = year, total = response.events.len(), kept = events.len(), "Fetched club events");
        Ok(events)
    }

    /// Fetch the qualified riders of every class in a series.
    pub async fn fetch_series_leaders(&self, series_id: &str) -> Result<SeriesResult, ApiError> {
        let response: SeriesResponse = self.get(&format!("/series/{}", series_id)).await?;
        Ok(SeriesResult::from_response(series_id, &response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> SqorzClient {
        let config = ApiConfig {
            base_url: server.base_url(),
            ..ApiConfig::default()
        };
        SqorzClient::new(&config).expect("Failed to build test client")
    }

    fn event(name: &str, date: &str) -> serde_json::Value {
        serde_json::json!({
            "eventName": name,
            "eventDate": date,
            "entered": 10,
            "registered": 12,
            "peopleCount": { "entered": 8, "registered": 9 },
            "completeRaces": 20,
            "enabledClasses": 6
        })
    }

    #[tokio::test]
    async fn test_fetch_club_events_filters_and_sorts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/org/testclub")
                    .header("accept", "application/json")
                    .header("user-agent", USER_AGENT);
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "events": [
                            event("Club Night 3", "2024-03-08T18:00:00"),
                            event("Last Year", "2023-11-10T18:00:00"),
                            event("Club Night 1", "2024-02-09T18:00:00"),
                        ]
                    }));
            })
            .await;

        let events = client_for(&server).fetch_club_events("testclub", 2024).await.unwrap();

        mock.assert_async().await;
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Club Night 1", "Club Night 3"]);
        assert_eq!(events[0].people, 8);
        assert_eq!(events[0].classes_count, 6);
    }

    #[tokio::test]
    async fn test_fetch_series_leaders() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/series/s-1");
                then.status(200).json_body(serde_json::json!({
                    "seriesId": "s-1",
                    "seriesDescription": { "seriesName": "Summer Series" },
                    "seriesRankClasses": [{
                        "className": "Girls 12",
                        "participationOnly": false,
                        "seriesRankCompetitors": [
                            { "firstName": "Ava", "lastName": "Lee", "seriesQualificationStatus": 3, "seriesRank": 3 },
                            { "firstName": "Mia", "lastName": "Ng", "seriesQualificationStatus": 1, "seriesRank": 1 }
                        ]
                    }]
                }));
            })
            .await;

        let series = client_for(&server).fetch_series_leaders("s-1").await.unwrap();
        assert_eq!(series.id, "s-1");
        assert_eq!(series.name, "Summer Series");
        assert_eq!(series.classes[0].qualified_riders.len(), 1);
        assert_eq!(series.classes[0].qualified_riders[0].first_name, "Ava");
        assert_eq!(series.classes[0].qualified_riders[0].rank, 1);
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/series/missing");
                then.status(404).body("no such series");
            })
            .await;

        let err = client_for(&server).fetch_series_leaders("missing").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::UnknownResource { ref path, ref body } if path == "/series/missing" && body == "no such series"
        ));
    }

    #[tokio::test]
    async fn test_unexpected_shape() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/series/odd");
                then.status(200).json_body(serde_json::json!({ "unexpected": true }));
            })
            .await;

        let err = client_for(&server).fetch_series_leaders("odd").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }
}
