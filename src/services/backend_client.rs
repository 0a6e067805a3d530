use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::domain::{ComparisonRow, DomainProfile, SearchOutcome};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Serialize)]
struct SearchBody<'a> {
    query: &'a str,
}

/// JSON client for the external search service. Field names on the wire come
/// from the domain profile, so one client serves both UI flavors.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: Url,
    profile: &'static DomainProfile,
}

impl BackendClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        profile: &'static DomainProfile,
    ) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(BackendClient {
            client,
            base_url,
            profile,
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    pub async fn search(&self, query: &str) -> Result<SearchOutcome, BackendError> {
        let response = self
            .client
            .post(self.endpoint("/search"))
            .json(&SearchBody { query })
            .send()
            .await?;
        let body: Value = response.json().await?;

        log::info!(
            "Search response for '{}' with status: {:?}",
            query,
            body.get("status")
        );

        Ok(SearchOutcome::from_response(&body, self.profile))
    }

    pub async fn price_comparison(&self, id: &str) -> Result<Vec<ComparisonRow>, BackendError> {
        let mut body = serde_json::Map::new();
        body.insert(
            self.profile.id_key.to_string(),
            Value::String(id.to_string()),
        );

        let response = self
            .client
            .post(self.endpoint("/price-comparison"))
            .json(&Value::Object(body))
            .send()
            .await?;
        let payload: Value = response.json().await?;

        let rows = match payload.get("price_comparison") {
            Some(rows) => serde_json::from_value::<Vec<ComparisonRow>>(rows.clone())?,
            None => vec![],
        };

        log::info!("Price comparison for {} returned {} rows", id, rows.len());
        Ok(rows)
    }
}
