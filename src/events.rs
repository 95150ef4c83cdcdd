//! Event System
//!
//! Types and implementations for pipeline events and logging

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

/// The four fetch pipelines, each owning one dashboard panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Pipeline {
    /// Fetches the KPI summary for the stat tiles.
    #[strum(serialize = "KPIs")]
    Kpis,
    /// Fetches the daily revenue series for the line chart.
    #[strum(serialize = "Sales")]
    SalesOverTime,
    /// Fetches the order-status counts for the bar chart.
    #[strum(serialize = "Orders")]
    OrderStatus,
    /// Fetches the product ranking for the table.
    #[strum(serialize = "Products")]
    TopProducts,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub pipeline: Pipeline,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(pipeline: Pipeline, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            pipeline,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    /// A pipeline has delivered its payload.
    pub fn success(pipeline: Pipeline, msg: String) -> Self {
        Self::new(pipeline, msg, EventType::Success, LogLevel::Info)
    }

    /// A pipeline failed; its panel keeps the loading state.
    pub fn error(pipeline: Pipeline, msg: String, log_level: LogLevel) -> Self {
        Self::new(pipeline, msg, EventType::Error, log_level)
    }

    /// A pipeline has started fetching.
    pub fn refresh(pipeline: Pipeline, msg: String) -> Self {
        Self::new(pipeline, msg, EventType::Refresh, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = Event::success(Pipeline::Kpis, "KPI summary loaded".to_string());
        assert!(event.should_display());
    }

    #[test]
    fn test_error_events_carry_their_level() {
        let event = Event::error(
            Pipeline::TopProducts,
            "HTTP error with status 500".to_string(),
            LogLevel::Warn,
        );
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::success(Pipeline::SalesOverTime, "Sales series loaded".to_string());
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("] Sales series loaded"));
    }
}
