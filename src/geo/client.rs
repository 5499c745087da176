//! HTTP client for the IBGE localities API.
//!
//! Two read-only endpoints are used: the state collection and the
//! municipalities of one state. Both return JSON arrays whose records carry
//! many more fields than the picker needs; only the ones below are decoded,
//! and each is optional so a partial record never fails the whole payload.

use crate::config::ApiConfig;
use crate::geo::error::GeoError;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// One entry of `GET /estados`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateRecord {
    #[serde(rename = "sigla", default)]
    pub short_code: Option<String>,
}

/// One entry of `GET /estados/{uf}/municipios`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityRecord {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
}

pub struct GeoClient {
    http: reqwest::Client,
    base: Url,
    order_by: String,
}

impl GeoClient {
    pub fn new(config: &ApiConfig) -> Result<Self, GeoError> {
        let base = Url::parse(&config.base_url).map_err(|e| GeoError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(GeoError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ecoleta/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base,
            order_by: config.order_by.clone(),
        })
    }

    pub fn states_url(&self) -> Result<Url, GeoError> {
        self.endpoint(&["estados"])
    }

    pub fn cities_url(&self, state_code: &str) -> Result<Url, GeoError> {
        self.endpoint(&["estados", state_code, "municipios"])
    }

    pub async fn fetch_states(&self) -> Result<Vec<StateRecord>, GeoError> {
        let url = self.states_url()?;
        self.get_records(url).await
    }

    pub async fn fetch_cities(&self, state_code: &str) -> Result<Vec<CityRecord>, GeoError> {
        let url = self.cities_url(state_code)?;
        self.get_records(url).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GeoError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GeoError::InvalidUrl {
                url: self.base.to_string(),
                reason: "not a hierarchical URL".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        if !self.order_by.is_empty() {
            url.query_pairs_mut().append_pair("orderBy", &self.order_by);
        }
        Ok(url)
    }

    async fn get_records<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, GeoError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status { status });
        }
        let body = response.text().await?;
        parse_records(&body)
    }
}

/// Decode a JSON array of records. Elements that do not fit `T` (e.g.
/// `null`, or a name that is not a string) are skipped; only a body that is
/// not an array fails.
pub fn parse_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, GeoError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "skipping malformed record");
                None
            }
        })
        .collect();
    if records.len() < total {
        debug!(skipped = total - records.len(), total, "partial payload");
    }
    Ok(records)
}
