//! Dashboard state update logic
//!
//! Drains the queued events and panel payloads into the state

use super::state::{DashboardState, PanelData};
use crate::workers::PanelUpdate;

impl DashboardState {
    /// Update the dashboard state with new tick, queued events, and payloads.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        // Apply queued panel payloads. Each pipeline delivers at most once,
        // so a payload simply replaces its panel's loading slot.
        while let Some(update) = self.pending_updates.pop_front() {
            self.apply_update(update);
        }
    }

    fn apply_update(&mut self, update: PanelUpdate) {
        match update {
            PanelUpdate::Kpis(kpis) => self.kpis = PanelData::Ready(kpis),
            PanelUpdate::Sales(points) => self.sales = PanelData::Ready(points),
            PanelUpdate::Statuses(statuses) => self.statuses = PanelData::Ready(statuses),
            PanelUpdate::Products(products) => self.products = PanelData::Ready(products),
        }
    }
}
