//! Revenue-over-time chart component
//!
//! Renders the daily revenue series as a filled line chart

use super::super::state::DashboardState;
use super::super::utils::REVENUE_LINE_COLOR;
use crate::analytics::types::SalesPoint;
use crate::format::format_currency;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

fn panel_block() -> Block<'static> {
    Block::default()
        .title("REVENUE OVER TIME")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(REVENUE_LINE_COLOR))
}

/// Render the revenue line chart, or its loading placeholder until the
/// sales pipeline delivers.
pub fn render_sales_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(points) = state.sales.ready() else {
        let placeholder = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel_block());
        f.render_widget(placeholder, area);
        return;
    };

    if points.is_empty() {
        let placeholder = Paragraph::new("No sales recorded")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel_block());
        f.render_widget(placeholder, area);
        return;
    }

    // Points are plotted by index; the server guarantees chronological order.
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.daily_revenue))
        .collect();

    let max_revenue = data.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max).max(1.0);
    let max_x = (data.len() - 1).max(1) as f64;

    let dataset = Dataset::default()
        .name("Revenue")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(REVENUE_LINE_COLOR))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(panel_block())
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(date_labels(points)),
        )
        .y_axis(
            Axis::default()
                .title("Revenue")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_revenue])
                .labels(vec![
                    format_currency(Some(0.0)),
                    format_currency(Some(max_revenue / 2.0)),
                    format_currency(Some(max_revenue)),
                ]),
        );

    f.render_widget(chart, area);
}

/// First, middle, and last dates of the series for the x-axis.
fn date_labels(points: &[SalesPoint]) -> Vec<String> {
    match points.len() {
        0 => vec![],
        1 => vec![points[0].date.clone()],
        2 => vec![points[0].date.clone(), points[1].date.clone()],
        n => vec![
            points[0].date.clone(),
            points[n / 2].date.clone(),
            points[n - 1].date.clone(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str) -> SalesPoint {
        SalesPoint {
            date: date.to_string(),
            daily_revenue: 1.0,
        }
    }

    #[test]
    fn test_date_labels_pick_first_middle_last() {
        let points: Vec<SalesPoint> = ["01", "02", "03", "04", "05"]
            .iter()
            .map(|d| point(&format!("2026-07-{d}")))
            .collect();
        assert_eq!(
            date_labels(&points),
            vec!["2026-07-01", "2026-07-03", "2026-07-05"]
        );
    }

    #[test]
    fn test_date_labels_short_series() {
        assert!(date_labels(&[]).is_empty());
        assert_eq!(date_labels(&[point("2026-07-01")]), vec!["2026-07-01"]);
    }
}
