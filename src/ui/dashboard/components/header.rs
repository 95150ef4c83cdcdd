//! Dashboard header component
//!
//! Renders the title and load-progress gauge

use super::super::state::DashboardState;
use crate::consts::cli_consts::PIPELINE_COUNT;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and panel load progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section
    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("STOREPULSE v{} - {}", version, state.environment);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: panels loaded so far. A failed pipeline never reports, so
    // the gauge can legitimately stay below 100% for the life of the process.
    let loaded = state.panels_ready();
    let (progress_text, gauge_color, progress_percent) = if state.all_panels_ready() {
        ("READY - All panels loaded".to_string(), Color::LightGreen, 100)
    } else {
        (
            format!("LOADING - {} of {} panels ready", loaded, PIPELINE_COUNT),
            Color::LightBlue,
            (loaded * 100 / PIPELINE_COUNT) as u16,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
