//! HTTP client for the Course Compass backend.
//!
//! The backend itself lives elsewhere; this crate only knows its four
//! endpoints:
//! - `GET /courses` returns `{ "courses": [...] }`
//! - `POST /chat` takes `{ "message" }` and returns `{ "response" }`
//! - `POST /recommendations` takes a [`RecommendationRequest`] and returns
//!   `{ "courses": [...] }`
//! - `POST /roadmap` takes `{ "career_goal", "courses" }` and returns a PNG
//!
//! Course lists are decoded one record at a time with the catalog parser,
//! so one bad record in a response doesn't sink the rest. Any non-2xx
//! status becomes [`ApiError::Status`]. Nothing is retried.

use advisor::RecommendationRequest;
use catalog::{parser, Course};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur when talking to the backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ApiError>;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Serialize)]
struct RoadmapRequest<'a> {
    career_goal: &'a str,
    courses: &'a [String],
}

/// Client for the backend API.
#[derive(Debug, Clone)]
pub struct CompassClient {
    http: Client,
    base_url: Url,
}

impl CompassClient {
    /// Build a client for `base_url` (e.g. "http://localhost:8000").
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let invalid = |reason: String| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        // a trailing slash makes join() append instead of replacing the last segment
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| invalid(e.to_string()))?;

        info!("API client ready for {}", url);
        Ok(Self { http, base_url: url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `GET /courses`
    pub async fn fetch_courses(&self) -> Result<Vec<Course>> {
        let endpoint = "courses";
        let response = self.send(endpoint, self.http.get(self.url(endpoint)?)).await?;
        let courses = decode_courses(endpoint, response).await?;
        info!("Fetched {} courses from the API", courses.len());
        Ok(courses)
    }

    /// `POST /chat`
    pub async fn chat(&self, message: &str) -> Result<String> {
        let endpoint = "chat";
        let request = self
            .http
            .post(self.url(endpoint)?)
            .json(&ChatRequest { message });
        let response = self.send(endpoint, request).await?;
        let body: ChatResponse = response.json().await.map_err(|e| invalid_response(endpoint, e))?;
        Ok(body.response)
    }

    /// `POST /recommendations`
    pub async fn recommendations(&self, request: &RecommendationRequest) -> Result<Vec<Course>> {
        let endpoint = "recommendations";
        debug!("Requesting recommendations for {:?}", request.career_goal);
        let response = self
            .send(endpoint, self.http.post(self.url(endpoint)?).json(request))
            .await?;
        decode_courses(endpoint, response).await
    }

    /// `POST /roadmap`, returning the PNG bytes.
    pub async fn roadmap(&self, career_goal: &str, course_codes: &[String]) -> Result<Vec<u8>> {
        let endpoint = "roadmap";
        let request = self.http.post(self.url(endpoint)?).json(&RoadmapRequest {
            career_goal,
            courses: course_codes,
        });
        let response = self.send(endpoint, request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| transport(endpoint, source))?;
        if bytes.is_empty() {
            return Err(ApiError::InvalidResponse {
                endpoint: endpoint.to_string(),
                reason: "empty roadmap image".to_string(),
            });
        }
        debug!("Received {} byte roadmap", bytes.len());
        Ok(bytes.to_vec())
    }

    fn url(&self, endpoint: &str) -> Result<Url> {
        self.base_url.join(endpoint).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{}", self.base_url, endpoint),
            reason: e.to_string(),
        })
    }

    /// Send a request and turn non-2xx statuses into errors.
    async fn send(&self, endpoint: &str, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| transport(endpoint, source))?;

        let status = response.status();
        debug!("/{} responded with {}", endpoint, status);
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("/{} failed with {}: {}", endpoint, status, body);
        Err(ApiError::Status {
            endpoint: format!("/{endpoint}"),
            status: status.as_u16(),
            body,
        })
    }
}

async fn decode_courses(endpoint: &str, response: Response) -> Result<Vec<Course>> {
    let text = response
        .text()
        .await
        .map_err(|source| transport(endpoint, source))?;
    parser::parse_courses_json(&text).map_err(|e| invalid_response(endpoint, e))
}

fn transport(endpoint: &str, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        endpoint: format!("/{endpoint}"),
        source,
    }
}

fn invalid_response(endpoint: &str, reason: impl std::fmt::Display) -> ApiError {
    ApiError::InvalidResponse {
        endpoint: format!("/{endpoint}"),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = CompassClient::new("http://localhost:8000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/");
        assert_eq!(
            client.url("courses").unwrap().as_str(),
            "http://localhost:8000/api/courses"
        );
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(matches!(
            CompassClient::new("not a url", DEFAULT_TIMEOUT),
            Err(ApiError::InvalidUrl { .. })
        ));
        assert!(matches!(
            CompassClient::new("ftp://example.com", DEFAULT_TIMEOUT),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
