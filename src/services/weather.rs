/// OpenWeatherMap client
///
/// Current conditions in metric units. Any failure is reported as a
/// `WeatherError`; the weather skill decides what the user sees.

use crate::services::WeatherLookup;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Upper bound on one lookup, connect through body
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum WeatherError {
    /// No API key was provided
    #[error("weather service not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-200 reply, e.g. an unknown city or a rejected key
    #[error("weather service returned status {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    BadResponse(String),
}

/// Temperature and a short description
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature: f64,
    pub description: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    main: ApiMain,
    weather: Vec<ApiCondition>,
}

#[derive(Deserialize)]
struct ApiMain {
    temp: f64,
}

#[derive(Deserialize)]
struct ApiCondition {
    description: String,
}

pub struct OpenWeatherMap {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl OpenWeatherMap {
    /// Create a client. An empty key counts as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl WeatherLookup for OpenWeatherMap {
    async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::NotConfigured)?;

        debug!("Fetching weather for {}", city);
        let response = self
            .client
            .get(API_URL)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: ApiResponse = response.json().await?;
        let description = body
            .weather
            .into_iter()
            .next()
            .map(|condition| condition.description)
            .ok_or_else(|| WeatherError::BadResponse("no weather conditions".to_string()))?;

        Ok(WeatherReport {
            temperature: body.main.temp,
            description,
        })
    }
}
