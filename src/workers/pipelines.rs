//! The four dashboard fetch pipelines.
//!
//! Each pipeline performs a single GET against the analytics API and, on
//! success, delivers a typed payload to its panel. Pipelines are spawned
//! together, run concurrently, and are fully isolated: a failure is reported
//! on the diagnostic channel and is terminal for that pipeline only, leaving
//! its panel in the loading state. There is no retry, backoff, or re-fetch.

use crate::analytics::AnalyticsApi;
use crate::events::Pipeline;
use crate::workers::core::{PanelUpdate, PipelineSender};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawn all four pipelines. Returns their join handles; each handle
/// completes as soon as its pipeline has delivered or failed.
pub fn start_pipelines(
    client: Arc<dyn AnalyticsApi>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    sender: PipelineSender,
) -> Vec<JoinHandle<()>> {
    vec![
        tokio::spawn(load_kpis(client.clone(), sender.clone())),
        tokio::spawn(load_sales_over_time(client.clone(), sender.clone())),
        tokio::spawn(load_order_status_breakdown(client.clone(), sender.clone())),
        tokio::spawn(load_top_products(client, start_date, end_date, sender)),
    ]
}

async fn load_kpis(client: Arc<dyn AnalyticsApi>, sender: PipelineSender) {
    sender.refresh(Pipeline::Kpis, "Fetching KPI summary...").await;
    match client.kpi_summary().await {
        Ok(kpis) => {
            sender.success(Pipeline::Kpis, "KPI summary loaded").await;
            sender.update(PanelUpdate::Kpis(kpis)).await;
        }
        Err(e) => sender.error(Pipeline::Kpis, &e).await,
    }
}

async fn load_sales_over_time(client: Arc<dyn AnalyticsApi>, sender: PipelineSender) {
    sender
        .refresh(Pipeline::SalesOverTime, "Fetching sales series...")
        .await;
    match client.sales_over_time().await {
        Ok(points) => {
            sender
                .success(
                    Pipeline::SalesOverTime,
                    format!("Sales series loaded ({} days)", points.len()),
                )
                .await;
            sender.update(PanelUpdate::Sales(points)).await;
        }
        Err(e) => sender.error(Pipeline::SalesOverTime, &e).await,
    }
}

async fn load_order_status_breakdown(client: Arc<dyn AnalyticsApi>, sender: PipelineSender) {
    sender
        .refresh(Pipeline::OrderStatus, "Fetching order status breakdown...")
        .await;
    match client.order_status_breakdown().await {
        Ok(statuses) => {
            sender
                .success(
                    Pipeline::OrderStatus,
                    format!("Order status breakdown loaded ({} statuses)", statuses.len()),
                )
                .await;
            sender.update(PanelUpdate::Statuses(statuses)).await;
        }
        Err(e) => sender.error(Pipeline::OrderStatus, &e).await,
    }
}

async fn load_top_products(
    client: Arc<dyn AnalyticsApi>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    sender: PipelineSender,
) {
    sender
        .refresh(Pipeline::TopProducts, "Fetching top products...")
        .await;
    match client.top_products(start_date, end_date).await {
        Ok(products) => {
            sender
                .success(
                    Pipeline::TopProducts,
                    format!("Product ranking loaded ({} products)", products.len()),
                )
                .await;
            sender.update(PanelUpdate::Products(products)).await;
        }
        Err(e) => sender.error(Pipeline::TopProducts, &e).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MockAnalyticsApi;
    use crate::analytics::error::AnalyticsError;
    use crate::analytics::types::{KpiSummary, ProductSummary, SalesPoint, StatusCount};
    use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, UPDATE_QUEUE_SIZE};
    use crate::events::{Event, EventType};
    use tokio::sync::mpsc;

    fn sample_kpis() -> KpiSummary {
        KpiSummary {
            total_revenue: Some(1000.0),
            total_orders: None,
            total_customers: Some(5),
            new_customers: Some(2),
        }
    }

    fn sample_sales() -> Vec<SalesPoint> {
        vec![SalesPoint {
            date: "2026-07-01".to_string(),
            daily_revenue: 120.5,
        }]
    }

    fn sample_statuses() -> Vec<StatusCount> {
        vec![StatusCount {
            status: "pending".to_string(),
            count: 7,
        }]
    }

    fn sample_products() -> Vec<ProductSummary> {
        vec![ProductSummary {
            product_name: "Canvas Tote".to_string(),
            total_units_sold: 42,
            total_revenue: 1234.5,
            total_profit: None,
        }]
    }

    fn channels() -> (
        PipelineSender,
        mpsc::Receiver<Event>,
        mpsc::Receiver<PanelUpdate>,
    ) {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (update_sender, update_receiver) = mpsc::channel(UPDATE_QUEUE_SIZE);
        (
            PipelineSender::new(event_sender, update_sender),
            event_receiver,
            update_receiver,
        )
    }

    #[tokio::test]
    // All four pipelines deliver their payloads when every fetch succeeds.
    async fn test_all_pipelines_deliver_payloads() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_kpi_summary()
            .times(1)
            .returning(|| Ok(sample_kpis()));
        mock.expect_sales_over_time()
            .times(1)
            .returning(|| Ok(sample_sales()));
        mock.expect_order_status_breakdown()
            .times(1)
            .returning(|| Ok(sample_statuses()));
        mock.expect_top_products()
            .times(1)
            .returning(|_, _| Ok(sample_products()));

        let (sender, _events, mut updates) = channels();
        let handles = start_pipelines(Arc::new(mock), None, None, sender);
        for handle in handles {
            handle.await.unwrap();
        }

        let mut delivered = Vec::new();
        while let Ok(update) = updates.try_recv() {
            delivered.push(update.pipeline());
        }
        delivered.sort_by_key(|p| format!("{p:?}"));

        assert_eq!(delivered.len(), 4);
        assert!(delivered.contains(&Pipeline::Kpis));
        assert!(delivered.contains(&Pipeline::SalesOverTime));
        assert!(delivered.contains(&Pipeline::OrderStatus));
        assert!(delivered.contains(&Pipeline::TopProducts));
    }

    #[tokio::test]
    // A failed fetch on one endpoint must not prevent the other three from
    // delivering.
    async fn test_failed_pipeline_is_isolated() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_kpi_summary().times(1).returning(|| {
            Err(AnalyticsError::Http {
                status: 500,
                message: "internal error".to_string(),
            })
        });
        mock.expect_sales_over_time()
            .times(1)
            .returning(|| Ok(sample_sales()));
        mock.expect_order_status_breakdown()
            .times(1)
            .returning(|| Ok(sample_statuses()));
        mock.expect_top_products()
            .times(1)
            .returning(|_, _| Ok(sample_products()));

        let (sender, mut events, mut updates) = channels();
        let handles = start_pipelines(Arc::new(mock), None, None, sender);
        for handle in handles {
            handle.await.unwrap();
        }

        let delivered: Vec<Pipeline> = std::iter::from_fn(|| updates.try_recv().ok())
            .map(|u| u.pipeline())
            .collect();
        assert_eq!(delivered.len(), 3);
        assert!(!delivered.contains(&Pipeline::Kpis));

        // The failure surfaced exactly once, on the diagnostic channel.
        let errors: Vec<Event> = std::iter::from_fn(|| events.try_recv().ok())
            .filter(|e| e.event_type == EventType::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].pipeline, Pipeline::Kpis);
    }

    #[tokio::test]
    // A missing data payload is an error, not an empty render.
    async fn test_missing_data_delivers_nothing() {
        let mut mock = MockAnalyticsApi::new();
        mock.expect_kpi_summary().times(1).returning(|| {
            Err(AnalyticsError::MissingData {
                endpoint: "kpis".to_string(),
            })
        });
        mock.expect_sales_over_time()
            .times(1)
            .returning(|| Ok(vec![]));
        mock.expect_order_status_breakdown()
            .times(1)
            .returning(|| Ok(vec![]));
        mock.expect_top_products().times(1).returning(|_, _| Ok(vec![]));

        let (sender, _events, mut updates) = channels();
        let handles = start_pipelines(Arc::new(mock), None, None, sender);
        for handle in handles {
            handle.await.unwrap();
        }

        let delivered: Vec<PanelUpdate> = std::iter::from_fn(|| updates.try_recv().ok()).collect();
        assert!(
            delivered
                .iter()
                .all(|u| u.pipeline() != Pipeline::Kpis)
        );
    }

    #[tokio::test]
    // The date range is forwarded to the products endpoint untouched.
    async fn test_products_date_range_forwarded() {
        let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 7, 31).unwrap();

        let mut mock = MockAnalyticsApi::new();
        mock.expect_kpi_summary().returning(|| Ok(sample_kpis()));
        mock.expect_sales_over_time().returning(|| Ok(vec![]));
        mock.expect_order_status_breakdown().returning(|| Ok(vec![]));
        mock.expect_top_products()
            .times(1)
            .withf(move |s, e| *s == Some(start) && *e == Some(end))
            .returning(|_, _| Ok(sample_products()));

        let (sender, _events, _updates) = channels();
        let handles = start_pipelines(Arc::new(mock), Some(start), Some(end), sender);
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
