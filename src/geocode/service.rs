use super::{ResolvedLocation, Resolver, HTTP_CLIENT};
use crate::core::geo::LatLng;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct GeocodeQuery<'a> {
    query: &'a str,
}

/// Payload returned by the geocoder service; a missing or non-numeric
/// lat/lng fails deserialization and counts as a miss.
#[derive(Deserialize)]
struct GeocodeReply {
    lat: f64,
    lng: f64,
    formatted: Option<String>,
}

/// Primary tier: POSTs the query to a locally deployed geocoder service
pub struct ServiceResolver {
    endpoint: String,
    timeout: Duration,
}

impl ServiceResolver {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    async fn request(&self, query: &str) -> Result<ResolvedLocation> {
        let response = HTTP_CLIENT
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&GeocodeQuery { query })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()).into());
        }

        let reply: GeocodeReply = response.json().await?;
        let location = ResolvedLocation::new(LatLng::new(reply.lat, reply.lng));

        Ok(match reply.formatted {
            Some(formatted) => location.with_label(formatted),
            None => location.with_label(query.to_string()),
        })
    }
}

#[async_trait]
impl Resolver for ServiceResolver {
    fn name(&self) -> &'static str {
        "service"
    }

    async fn resolve(&self, query: &str) -> Option<ResolvedLocation> {
        match self.request(query).await {
            Ok(location) => Some(location),
            Err(e) => {
                log::warn!("geocoder service fallback: {}", e);
                None
            }
        }
    }
}
