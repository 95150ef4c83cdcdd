//! Top products table component
//!
//! Renders the product ranking as a three-column table

use super::super::state::DashboardState;
use crate::analytics::types::ProductSummary;
use crate::consts::cli_consts::TOP_PRODUCTS_LIMIT;
use crate::format::{format_count, format_currency};
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

fn panel_block() -> Block<'static> {
    Block::default()
        .title("TOP PRODUCTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
}

/// Project the payload onto displayable rows: the first `min(5, available)`
/// products in server order, formatted for display. Product names are kept
/// as plain text cells; nothing is interpolated into markup.
pub fn visible_rows(products: &[ProductSummary]) -> Vec<[String; 3]> {
    products
        .iter()
        .take(TOP_PRODUCTS_LIMIT)
        .map(|product| {
            [
                product.product_name.clone(),
                format_count(Some(product.total_units_sold)),
                format_currency(Some(product.total_revenue)),
            ]
        })
        .collect()
}

/// Render the top products table, or its loading placeholder until the
/// products pipeline delivers.
pub fn render_products_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(products) = state.products.ready() else {
        let placeholder = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel_block());
        f.render_widget(placeholder, area);
        return;
    };

    let header = Row::new(["Product", "Units Sold", "Revenue"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = visible_rows(products)
        .into_iter()
        .map(|[name, units, revenue]| {
            Row::new(vec![
                Cell::from(name),
                Cell::from(units),
                Cell::from(revenue),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(panel_block());

    f.render_widget(table, area);
}
