use crate::analytics::error::AnalyticsError;
use crate::analytics::types::{KpiSummary, ProductSummary, SalesPoint, StatusCount};
use crate::environment::Environment;
use chrono::NaiveDate;

pub(crate) mod client;
pub use client::AnalyticsClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AnalyticsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Aggregate KPI figures for the storefront.
    async fn kpi_summary(&self) -> Result<KpiSummary, AnalyticsError>;

    /// Daily revenue series, in chronological order.
    async fn sales_over_time(&self) -> Result<Vec<SalesPoint>, AnalyticsError>;

    /// Order counts grouped by status.
    async fn order_status_breakdown(&self) -> Result<Vec<StatusCount>, AnalyticsError>;

    /// Per-product sales totals, optionally restricted to a date range.
    async fn top_products(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ProductSummary>, AnalyticsError>;
}
