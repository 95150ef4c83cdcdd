//! Order-status breakdown component
//!
//! Renders per-status order counts as a bar chart. The web dashboard drew a
//! doughnut; a bar chart is the closest terminal widget that keeps the
//! per-status color and count semantics.

use super::super::state::DashboardState;
use super::super::utils::status_slice_color;
use crate::format::capitalize;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

fn panel_block() -> Block<'static> {
    Block::default()
        .title("ORDER STATUS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
}

/// Render the order-status bar chart, or its loading placeholder until the
/// status pipeline delivers.
pub fn render_status_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(statuses) = state.statuses.ready() else {
        let placeholder = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel_block());
        f.render_widget(placeholder, area);
        return;
    };

    if statuses.is_empty() {
        let placeholder = Paragraph::new("No orders recorded")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel_block());
        f.render_widget(placeholder, area);
        return;
    }

    // One bar per status, colored by index from the fixed palette.
    let bars: Vec<Bar> = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let color = status_slice_color(i);
            Bar::default()
                .label(capitalize(&status.status).into())
                .value(status.count)
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_width = bar_width_for(area.width, bars.len());
    let chart = BarChart::default()
        .block(panel_block())
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2);

    f.render_widget(chart, area);
}

/// Fit the bars to the panel, keeping room for capitalized labels.
fn bar_width_for(area_width: u16, bar_count: usize) -> u16 {
    if bar_count == 0 {
        return 1;
    }
    let usable = area_width.saturating_sub(2); // borders
    let gaps = 2 * (bar_count as u16 - 1);
    (usable.saturating_sub(gaps) / bar_count as u16).clamp(3, 12)
}
