//! KPI tile components
//!
//! Renders the four aggregate metric tiles

use super::super::state::DashboardState;
use crate::format::{format_count, format_currency};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the row of four KPI tiles.
pub fn render_kpi_tiles(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let tile_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let kpis = state.kpis.ready();

    let tiles = [
        (
            "TOTAL REVENUE",
            kpis.map(|k| format_currency(k.total_revenue)),
            Color::LightGreen,
        ),
        (
            "TOTAL ORDERS",
            kpis.map(|k| format_count(k.total_orders)),
            Color::LightBlue,
        ),
        (
            "TOTAL CUSTOMERS",
            kpis.map(|k| format_count(k.total_customers)),
            Color::LightYellow,
        ),
        (
            "NEW CUSTOMERS",
            kpis.map(|k| format_count(k.new_customers)),
            Color::LightMagenta,
        ),
    ];

    for (i, (title, value, color)) in tiles.into_iter().enumerate() {
        render_tile(f, tile_chunks[i], title, value, color);
    }
}

/// One tile: a bordered block with the formatted value, or the loading
/// placeholder until the KPI pipeline delivers.
fn render_tile(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    value: Option<String>,
    color: Color,
) {
    let (text, value_style) = match value {
        Some(value) => (
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        None => ("Loading...".to_string(), Style::default().fg(Color::DarkGray)),
    };

    let tile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(value_style)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(tile, area);
}
