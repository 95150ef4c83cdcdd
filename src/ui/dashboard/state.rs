//! Dashboard state management
//!
//! Contains the dashboard state struct and per-panel load slots

use crate::analytics::types::{KpiSummary, ProductSummary, SalesPoint, StatusCount};
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, PIPELINE_COUNT};
use crate::environment::Environment;
use crate::events::Event as PipelineEvent;
use crate::ui::app::UIConfig;
use crate::workers::PanelUpdate;

use std::collections::VecDeque;
use std::time::Instant;

/// Load lifecycle of one dashboard panel.
///
/// A panel starts in `Loading` and stays there if its pipeline fails; there
/// is no error state to render, matching the page it replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelData<T> {
    #[default]
    Loading,
    Ready(T),
}

impl<T> PanelData<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            PanelData::Loading => None,
            PanelData::Ready(value) => Some(value),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PanelData::Ready(_))
    }
}

/// Dashboard state: one slot per panel plus the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// KPI tiles payload.
    pub kpis: PanelData<KpiSummary>,
    /// Revenue line chart payload.
    pub sales: PanelData<Vec<SalesPoint>>,
    /// Order-status bar chart payload.
    pub statuses: PanelData<Vec<StatusCount>>,
    /// Top products table payload.
    pub products: PanelData<Vec<ProductSummary>>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<PipelineEvent>,
    /// Queue of panel payloads waiting to be applied
    pub pending_updates: VecDeque<PanelUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<PipelineEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            kpis: PanelData::Loading,
            sales: PanelData::Loading,
            statuses: PanelData::Loading,
            products: PanelData::Loading,
            pending_events: VecDeque::new(),
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Number of panels that have received their payload.
    pub fn panels_ready(&self) -> usize {
        [
            self.kpis.is_ready(),
            self.sales.is_ready(),
            self.statuses.is_ready(),
            self.products.is_ready(),
        ]
        .iter()
        .filter(|ready| **ready)
        .count()
    }

    /// Whether every pipeline has delivered.
    pub fn all_panels_ready(&self) -> bool {
        self.panels_ready() == PIPELINE_COUNT
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: PipelineEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: PipelineEvent) {
        self.pending_events.push_back(event);
    }

    /// Add a panel payload to the processing queue
    pub fn add_update(&mut self, update: PanelUpdate) {
        self.pending_updates.push_back(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, Pipeline};

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Production,
            Instant::now(),
            UIConfig::new(false),
        )
    }

    #[test]
    fn test_panels_start_loading() {
        let state = state();
        assert_eq!(state.panels_ready(), 0);
        assert!(!state.all_panels_ready());
        assert!(state.kpis.ready().is_none());
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::success(Pipeline::Kpis, format!("event {i}")));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        // The oldest entries were dropped.
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 10");
    }
}
