//! Core pipeline utilities
//!
//! Channel plumbing shared by the four fetch pipelines.

use crate::analytics::error::AnalyticsError;
use crate::analytics::types::{KpiSummary, ProductSummary, SalesPoint, StatusCount};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Pipeline};
use tokio::sync::mpsc;

/// Typed payload delivered by a pipeline to its dashboard panel.
///
/// Each variant targets a disjoint panel; delivery order between pipelines
/// does not matter.
#[derive(Debug, Clone)]
pub enum PanelUpdate {
    Kpis(KpiSummary),
    Sales(Vec<SalesPoint>),
    Statuses(Vec<StatusCount>),
    Products(Vec<ProductSummary>),
}

impl PanelUpdate {
    /// The pipeline that produces this update.
    pub fn pipeline(&self) -> Pipeline {
        match self {
            PanelUpdate::Kpis(_) => Pipeline::Kpis,
            PanelUpdate::Sales(_) => Pipeline::SalesOverTime,
            PanelUpdate::Statuses(_) => Pipeline::OrderStatus,
            PanelUpdate::Products(_) => Pipeline::TopProducts,
        }
    }
}

/// Common sending utilities for pipelines: diagnostic events on one channel,
/// panel payloads on the other. Sends are best-effort; a dropped receiver
/// (UI already gone) is not an error.
#[derive(Clone)]
pub struct PipelineSender {
    event_sender: mpsc::Sender<Event>,
    update_sender: mpsc::Sender<PanelUpdate>,
    classifier: ErrorClassifier,
}

impl PipelineSender {
    pub fn new(
        event_sender: mpsc::Sender<Event>,
        update_sender: mpsc::Sender<PanelUpdate>,
    ) -> Self {
        Self {
            event_sender,
            update_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Send a fetch-started event.
    pub async fn refresh(&self, pipeline: Pipeline, message: impl Into<String>) {
        let _ = self
            .event_sender
            .send(Event::refresh(pipeline, message.into()))
            .await;
    }

    /// Send a success event.
    pub async fn success(&self, pipeline: Pipeline, message: impl Into<String>) {
        let _ = self
            .event_sender
            .send(Event::success(pipeline, message.into()))
            .await;
    }

    /// Classify a fetch error and report it on the diagnostic channel.
    pub async fn error(&self, pipeline: Pipeline, error: &AnalyticsError) {
        let level = self.classifier.classify_fetch_error(error);
        let _ = self
            .event_sender
            .send(Event::error(pipeline, format!("{pipeline}: {error}"), level))
            .await;
    }

    /// Deliver a payload to its panel.
    pub async fn update(&self, update: PanelUpdate) {
        let _ = self.update_sender.send(update).await;
    }
}
