//! Analytics API Client
//!
//! A read-only client for the storefront analytics API, consuming the
//! precomputed KPI, sales, order-status, and product aggregates.

use crate::analytics::AnalyticsApi;
use crate::analytics::error::AnalyticsError;
use crate::analytics::types::{Envelope, KpiSummary, ProductSummary, SalesPoint, StatusCount};
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use chrono::NaiveDate;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("storepulse/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: Client,
    environment: Environment,
}

impl AnalyticsClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    /// Join the environment's base URL with an endpoint path. The backend
    /// routes all collection endpoints with a trailing slash.
    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, AnalyticsError> {
        if !response.status().is_success() {
            return Err(AnalyticsError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, AnalyticsError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .query(query)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    /// Fetch an endpoint and unwrap its `{ "data": ... }` envelope.
    async fn get_payload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, AnalyticsError> {
        let envelope: Envelope<T> = self.get_request(endpoint, query).await?;
        envelope.data.ok_or_else(|| AnalyticsError::MissingData {
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl AnalyticsApi for AnalyticsClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn kpi_summary(&self) -> Result<KpiSummary, AnalyticsError> {
        self.get_payload("kpis", &[]).await
    }

    async fn sales_over_time(&self) -> Result<Vec<SalesPoint>, AnalyticsError> {
        self.get_payload("sales-over-time", &[]).await
    }

    async fn order_status_breakdown(&self) -> Result<Vec<StatusCount>, AnalyticsError> {
        self.get_payload("order-status-breakdown", &[]).await
    }

    async fn top_products(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ProductSummary>, AnalyticsError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(date) = start_date {
            query.push(("start_date", date.to_string()));
        }
        if let Some(date) = end_date {
            query.push(("end_date", date.to_string()));
        }
        self.get_payload("products", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Base URLs with and without trailing slashes must join cleanly.
    fn test_build_url_normalizes_slashes() {
        let client = AnalyticsClient::new(Environment::custom("http://localhost:8000/api/v1/analytics/"));
        assert_eq!(
            client.build_url("kpis"),
            "http://localhost:8000/api/v1/analytics/kpis/"
        );

        let client = AnalyticsClient::new(Environment::custom("http://localhost:8000/api/v1/analytics"));
        assert_eq!(
            client.build_url("/sales-over-time/"),
            "http://localhost:8000/api/v1/analytics/sales-over-time/"
        );
    }
}
