//! HTTP ChartRepository implementation.
//!
//! Talks to a PostgREST-style endpoint for the `charts` table under
//! `{base}/rest/v1/charts`. Row filters travel as query parameters
//! (`id=eq.<id>`, `user_id=eq.<owner>`); inserts ask for the stored row
//! back via `Prefer: return=representation`.
//!
//! Row-level authorization is the service's job. This client's obligation
//! is to always attach the acting identity: the owner filter on list calls
//! and the current bearer token on every request.

use crate::config_service::ServiceConfig;
use crate::dto::chart::{ChartRowDto, InsertChartDto};
use async_trait::async_trait;
use chartdesk_core::auth::TokenSource;
use chartdesk_core::chart::{Chart, ChartRepository, NewChart};
use chartdesk_core::error::{ChartdeskError, Result};
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const TABLE: &str = "charts";

/// Chart repository backed by the remote REST service.
#[derive(Clone)]
pub struct HttpChartRepository {
    client: Client,
    base_url: String,
    anon_key: String,
    tokens: Arc<dyn TokenSource>,
}

impl HttpChartRepository {
    /// Creates a repository for the configured service.
    ///
    /// `tokens` supplies the acting session's bearer token; while logged
    /// out, requests fall back to the anon key as bearer.
    pub fn new(config: &ServiceConfig, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChartdeskError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            anon_key: config.anon_key.clone(),
            tokens,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    /// Attaches the anon key and the current bearer token.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .tokens
            .access_token()
            .unwrap_or_else(|| self.anon_key.clone());
        request.header("apikey", &self.anon_key).bearer_auth(bearer)
    }

    fn transport(context: &str, err: reqwest::Error) -> ChartdeskError {
        tracing::warn!("Chart request failed ({context}): {err}");
        ChartdeskError::data_access(format!("Chart request failed ({context}): {err}"))
    }

    async fn fetch_rows(&self, context: &str, query: &[(&str, &str)]) -> Result<Vec<ChartRowDto>> {
        let response = self
            .authorize(self.client.get(self.table_url()).query(query))
            .send()
            .await
            .map_err(|e| Self::transport(context, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartdeskError::data_access(format!(
                "Chart query failed ({context}) with status {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Self::transport(context, e))
    }
}

#[async_trait]
impl ChartRepository for HttpChartRepository {
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Chart>> {
        let owner_filter = format!("eq.{owner_id}");
        let rows = self
            .fetch_rows(
                "list",
                &[
                    ("select", "*"),
                    ("user_id", owner_filter.as_str()),
                    ("order", "created_at.desc"),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Chart::from).collect())
    }

    async fn find_by_id(&self, chart_id: &str) -> Result<Option<Chart>> {
        let id_filter = format!("eq.{chart_id}");
        let rows = self
            .fetch_rows("get", &[("select", "*"), ("id", id_filter.as_str())])
            .await?;
        Ok(rows.into_iter().next().map(Chart::from))
    }

    async fn insert(&self, chart: &NewChart) -> Result<Chart> {
        let response = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&InsertChartDto::from(chart))
            .send()
            .await
            .map_err(|e| Self::transport("insert", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartdeskError::data_access(format!(
                "Chart insert failed with status {status}"
            )));
        }

        let rows: Vec<ChartRowDto> = response
            .json()
            .await
            .map_err(|e| Self::transport("insert response", e))?;
        rows.into_iter()
            .next()
            .map(Chart::from)
            .ok_or_else(|| ChartdeskError::data_access("Chart insert returned no row"))
    }

    async fn delete(&self, chart_id: &str) -> Result<()> {
        let id_filter = format!("eq.{chart_id}");
        let response = self
            .authorize(
                self.client
                    .delete(self.table_url())
                    .query(&[("id", id_filter.as_str())]),
            )
            .send()
            .await
            .map_err(|e| Self::transport("delete", e))?;

        let status = response.status();
        // The service answers success whether or not a row matched, which
        // gives delete its idempotent contract for free.
        if !status.is_success() {
            return Err(ChartdeskError::data_access(format!(
                "Chart delete failed with status {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoToken;

    impl TokenSource for NoToken {
        fn access_token(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_table_url() {
        let repo = HttpChartRepository::new(
            &ServiceConfig {
                service_url: "https://example.test/".to_string(),
                anon_key: "anon".to_string(),
            },
            Arc::new(NoToken),
        )
        .unwrap();
        assert_eq!(repo.table_url(), "https://example.test/rest/v1/charts");
    }
}
