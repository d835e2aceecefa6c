use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::datamall_record::Record;

pub const TRAFFIC_SPEED_BANDS_PATH: &str = "/ltaodataservice/v3/TrafficSpeedBands";
pub const CAR_PARK_AVAILABILITY_PATH: &str = "/ltaodataservice/CarParkAvailabilityv2";
pub const TRAFFIC_INCIDENTS_PATH: &str = "/ltaodataservice/TrafficIncidents";

#[derive(Clone, Debug)]
pub struct DatamallConfig {
    pub host: String,
    pub account_key: String,
    pub timeout: Duration,
}

#[derive(Error, Debug)]
pub enum DatamallClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct DatamallClient {
    config: DatamallConfig,
    client: reqwest::Client,
}

impl DatamallClient {
    pub fn new(config: DatamallConfig) -> Result<Self, DatamallClientError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    /// Fetches `path` and returns the object entries of its `value` array.
    ///
    /// A payload that decodes but has no usable `value` array is not an error
    /// and yields an empty list. The status code is not checked: DataMall
    /// error bodies fall through the same path.
    pub async fn fetch_records(&self, path: &str) -> Result<Vec<Record>, DatamallClientError> {
        let url = format!("{}{}", self.config.host, path);

        let resp = self
            .client
            .get(&url)
            .header("AccountKey", &self.config.account_key)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("DataMall responded {} for {}", status, path);
        }

        let body = resp.bytes().await?;
        let payload: Value = serde_json::from_slice(&body)?;

        let records = extract_records(payload);
        debug!("Fetched {} records from {}", records.len(), path);

        Ok(records)
    }
}

fn extract_records(payload: Value) -> Vec<Record> {
    let Value::Object(mut payload) = payload else {
        return Vec::new();
    };

    match payload.remove("value") {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
