use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    Config,
    error::{Result, WeatherError, truncate_body},
    model::LocationInfo,
};

const SERVICE: &str = "ip-api.com";

/// Finds out where the caller is.
#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    async fn resolve(&self) -> Result<LocationInfo>;
}

/// Looks up the caller's public IP address with ip-api.com.
#[derive(Debug, Clone)]
pub struct IpApiResolver {
    url: String,
    http: Client,
}

impl IpApiResolver {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.geo_url.clone())
    }
}

#[async_trait]
impl LocationResolver for IpApiResolver {
    async fn resolve(&self) -> Result<LocationInfo> {
        tracing::debug!(url = %self.url, "resolving location");

        let network = |source| WeatherError::Network {
            service: SERVICE,
            source,
        };

        let res = self.http.get(&self.url).send().await.map_err(network)?;
        let status = res.status();
        let body = res.text().await.map_err(network)?;

        if !status.is_success() {
            tracing::warn!(%status, "geolocation request failed");
            return Err(WeatherError::Status {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        let info: LocationInfo =
            serde_json::from_str(&body).map_err(|source| WeatherError::Decode {
                service: SERVICE,
                source,
            })?;

        // ip-api answers 200 even when it cannot place the address.
        if info.status == "fail" {
            return Err(WeatherError::Lookup {
                message: info.message.unwrap_or_else(|| "unknown reason".to_string()),
            });
        }

        tracing::info!(
            country = %info.country,
            city = %info.city,
            lat = info.lat,
            lon = info.lon,
            "location resolved"
        );

        Ok(info)
    }
}
