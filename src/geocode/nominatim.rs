use super::{ResolvedLocation, Resolver, HTTP_CLIENT};
use crate::core::geo::LatLng;
use crate::Result;
use async_trait::async_trait;
use instant::Instant;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;

/// One entry of a Nominatim search response; lat/lon arrive as strings
#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

/// Public fallback tier: queries the Nominatim search endpoint.
///
/// Consecutive queries are spaced by a minimum interval to stay within the
/// public service's usage policy.
pub struct NominatimResolver {
    endpoint: String,
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimResolver {
    pub fn new(endpoint: String, min_interval: Duration) -> Self {
        Self {
            endpoint,
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    async fn throttle(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(at) = *last {
            let elapsed = at.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn request(&self, query: &str) -> Result<Option<ResolvedLocation>> {
        self.throttle().await;

        let response = HTTP_CLIENT
            .get(&self.endpoint)
            .query(&[("format", "json"), ("limit", "1"), ("q", query)])
            .header("Accept-Language", "en")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()).into());
        }

        let results: Vec<SearchResult> = response.json().await?;
        let Some(first) = results.into_iter().next() else {
            return Ok(None);
        };

        let lat: f64 = first.lat.parse()?;
        let lon: f64 = first.lon.parse()?;
        let location = ResolvedLocation::new(LatLng::new(lat, lon));

        Ok(Some(match first.display_name {
            Some(name) => location.with_label(name),
            None => location,
        }))
    }
}

#[async_trait]
impl Resolver for NominatimResolver {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    async fn resolve(&self, query: &str) -> Option<ResolvedLocation> {
        match self.request(query).await {
            Ok(found) => found,
            Err(e) => {
                log::warn!("public Nominatim fallback failed: {}", e);
                None
            }
        }
    }
}
