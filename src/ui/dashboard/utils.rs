//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Pipeline;
use ratatui::prelude::Color;

/// Line color of the revenue chart, matching the web dashboard's teal.
pub const REVENUE_LINE_COLOR: Color = Color::Rgb(75, 192, 192);

/// Fixed palette for the order-status chart, assigned by index. Indices
/// beyond the palette fall back to the widget default; cycling is not
/// handled.
pub const STATUS_PALETTE: [Color; 6] = [
    Color::Rgb(255, 99, 132),
    Color::Rgb(54, 162, 235),
    Color::Rgb(255, 206, 86),
    Color::Rgb(75, 192, 192),
    Color::Rgb(153, 102, 255),
    Color::Rgb(255, 159, 64),
];

/// Get a ratatui color for a pipeline based on the panel it feeds
pub fn get_pipeline_color(pipeline: &Pipeline) -> Color {
    match pipeline {
        Pipeline::Kpis => Color::Cyan,
        Pipeline::SalesOverTime => Color::Green,
        Pipeline::OrderStatus => Color::Yellow,
        Pipeline::TopProducts => Color::Magenta,
    }
}

/// Color for an order-status slice by its index in the server's ordering.
pub fn status_slice_color(index: usize) -> Color {
    STATUS_PALETTE.get(index).copied().unwrap_or(Color::Gray)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("ConnectTimeout") {
        return "Connection timeout".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("TimedOut") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_assignment_by_index() {
        assert_eq!(status_slice_color(0), Color::Rgb(255, 99, 132));
        assert_eq!(status_slice_color(5), Color::Rgb(255, 159, 64));
        // Beyond the palette: widget default, no cycling.
        assert_eq!(status_slice_color(6), Color::Gray);
        assert_eq!(status_slice_color(42), Color::Gray);
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-08-06 14:03:27"),
            "08-06 14:03"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
