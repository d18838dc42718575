use serde::de::DeserializeOwned;

use crate::constants::{INITIAL_DATA_ENDPOINT, TRAINS_ENDPOINT};
use crate::models::{group_by_route, InitialData, Train, TrainsByRoute};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Path serving the active trains of `route_ids`
#[must_use]
pub fn trains_path(route_ids: &[String]) -> String {
    format!("{TRAINS_ENDPOINT}/{}", route_ids.join(","))
}

/// Resolves `path` against the page origin; the HTTP client needs an
/// absolute URL
fn absolute_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{path}")
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = absolute_url(path);
    let body = fetch_text(&url)
        .await
        .map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
}

async fn fetch_text(url: &str) -> Result<String, reqwest::Error> {
    reqwest::get(url).await?.error_for_status()?.text().await
}

/// Fetch the station tables and route metadata
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The response body cannot be deserialized
pub async fn fetch_initial_data() -> Result<InitialData, ApiError> {
    get_json(INITIAL_DATA_ENDPOINT).await
}

/// Fetch the active trains of `route_ids`, grouped by route
///
/// # Errors
///
/// Same conditions as [`fetch_initial_data`].
pub async fn fetch_trains(route_ids: &[String]) -> Result<TrainsByRoute, ApiError> {
    let trains: Vec<Train> = get_json(&trains_path(route_ids)).await?;
    Ok(group_by_route(trains))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trains_path() {
        let routes = vec!["Green-B".to_string(), "Green-C".to_string(), "Orange".to_string()];
        assert_eq!(trains_path(&routes), "/trains/Green-B,Green-C,Orange");
    }

    #[test]
    fn test_initial_data_format() {
        let json = r#"{
            "stations_by_route": {
                "Orange": [
                    {"id": "place-ogmnl", "name": "Oak Grove", "position": {"x": 0.0, "y": 0.0}},
                    {
                        "id": "place-mlmnl",
                        "name": "Malden Center",
                        "position": {"x": 0.0, "y": 15.0}
                    }
                ]
            },
            "routes_info": {
                "Orange": {"id": "Orange", "line": "Orange", "name": "Orange Line"}
            }
        }"#;
        let data: InitialData = serde_json::from_str(json).unwrap();
        assert_eq!(data.stations_by_route["Orange"].len(), 2);
        assert_eq!(data.routes_info["Orange"].name, "Orange Line");
    }

    #[test]
    fn test_decode_error_names_url() {
        let source = serde_json::from_str::<Vec<Train>>("{").unwrap_err();
        let error = ApiError::Decode {
            url: "/trains/Orange".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Failed to decode response from /trains/Orange:"));
    }
}
