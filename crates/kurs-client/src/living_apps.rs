//! HTTP client for the Living Apps REST service

use std::time::Duration;

use async_trait::async_trait;
use kurs_core::config::{AppIds, DataServiceConfig};
use kurs_core::{Collection, Course, Enrollment, Instructor, Participant, Record, Room};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::source::DataSource;

/// [`DataSource`] backed by `GET {base_url}/apps/{app_id}/records`
#[derive(Debug, Clone)]
pub struct LivingAppsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    apps: AppIds,
}

impl LivingAppsClient {
    /// Create a client from the data service settings
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an app identifier is missing, or an
    /// HTTP error if the underlying client cannot be built.
    pub fn new(config: &DataServiceConfig) -> ClientResult<Self> {
        let missing = config.apps.missing();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            return Err(ClientError::configuration(format!(
                "no app id configured for {}",
                names.join(", ")
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            apps: config.apps.clone(),
        })
    }

    /// Records endpoint of a collection
    pub fn records_url(&self, collection: Collection) -> String {
        format!(
            "{}/apps/{}/records",
            self.base_url,
            self.apps.for_collection(collection).trim()
        )
    }

    async fn fetch_records<F>(&self, collection: Collection) -> ClientResult<Vec<Record<F>>>
    where
        F: DeserializeOwned + Default,
    {
        let url = self.records_url(collection);
        debug!("Fetching {} from {}", collection, url);

        let mut request = self.client.get(&url);

        if let Some(ref api_key) = self.api_key {
            request = request.header("X-API-Key", api_key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::unexpected_status(collection, status.as_u16()));
        }

        let body = response.bytes().await?;
        let records = decode_records(collection, &body)?;

        debug!("Fetched {} {} records", records.len(), collection);
        Ok(records)
    }
}

#[async_trait]
impl DataSource for LivingAppsClient {
    async fn instructors(&self) -> ClientResult<Vec<Instructor>> {
        self.fetch_records(Collection::Instructors).await
    }

    async fn participants(&self) -> ClientResult<Vec<Participant>> {
        self.fetch_records(Collection::Participants).await
    }

    async fn rooms(&self) -> ClientResult<Vec<Room>> {
        self.fetch_records(Collection::Rooms).await
    }

    async fn courses(&self) -> ClientResult<Vec<Course>> {
        self.fetch_records(Collection::Courses).await
    }

    async fn enrollments(&self) -> ClientResult<Vec<Enrollment>> {
        self.fetch_records(Collection::Enrollments).await
    }

    fn name(&self) -> &str {
        "living-apps"
    }
}

/// Decode a records response body
///
/// The service answers with an object keyed by record id, whose key becomes
/// the record's `record_id`, or with a plain array of records.
///
/// # Errors
///
/// Returns a decode error for invalid JSON or any other shape.
pub fn decode_records<F>(collection: Collection, body: &[u8]) -> ClientResult<Vec<Record<F>>>
where
    F: DeserializeOwned + Default,
{
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| ClientError::decode(collection, e))?;

    match payload {
        Value::Object(by_id) => by_id
            .into_iter()
            .map(|(record_id, value)| {
                let mut record: Record<F> = serde_json::from_value(value)?;
                record.record_id = record_id;
                Ok(record)
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()
            .map_err(|e| ClientError::decode(collection, e)),
        other => serde_json::from_value(other).map_err(|e| ClientError::decode(collection, e)),
    }
}
