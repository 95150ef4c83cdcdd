//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::cli_consts::TOP_PRODUCTS_LIMIT;
use crate::format::{capitalize, format_count, format_currency};
use crate::print_cmd_info;
use crate::workers::PanelUpdate;
use futures::future::join_all;
use std::error::Error;

/// Runs the application in headless mode
///
/// Prints pipeline events and fetched figures to the console and exits once
/// all four pipelines have terminated (or on Ctrl+C).
///
/// # Arguments
/// * `session` - Session data from setup
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    let mut events_done = false;
    let mut updates_done = false;

    // Event loop: log events and figures until every pipeline sender is gone
    while !(events_done && updates_done) {
        tokio::select! {
            event = session.event_receiver.recv(), if !events_done => {
                match event {
                    Some(event) if event.should_display() => println!("{}", event),
                    Some(_) => {}
                    None => events_done = true,
                }
            }
            update = session.update_receiver.recv(), if !updates_done => {
                match update {
                    Some(update) => print_update(&update),
                    None => updates_done = true,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    // Wait for the pipelines to finish
    print_session_shutdown();
    join_all(session.join_handles).await;
    print_session_exit_success();

    Ok(())
}

/// Print one panel's figures the way the dashboard would render them.
fn print_update(update: &PanelUpdate) {
    match update {
        PanelUpdate::Kpis(kpis) => {
            print_cmd_info!(
                "KPI summary",
                "revenue {} | orders {} | customers {} | new customers {}",
                format_currency(kpis.total_revenue),
                format_count(kpis.total_orders),
                format_count(kpis.total_customers),
                format_count(kpis.new_customers)
            );
        }
        PanelUpdate::Sales(points) => {
            let total: f64 = points.iter().map(|p| p.daily_revenue).sum();
            print_cmd_info!(
                "Sales over time",
                "{} days, {} total revenue",
                points.len(),
                format_currency(Some(total))
            );
        }
        PanelUpdate::Statuses(statuses) => {
            let breakdown = statuses
                .iter()
                .map(|s| format!("{} {}", capitalize(&s.status), s.count))
                .collect::<Vec<_>>()
                .join(", ");
            print_cmd_info!("Order status", "{}", breakdown);
        }
        PanelUpdate::Products(products) => {
            for product in products.iter().take(TOP_PRODUCTS_LIMIT) {
                let mut line = format!(
                    "{} | {} units | {}",
                    product.product_name,
                    format_count(Some(product.total_units_sold)),
                    format_currency(Some(product.total_revenue))
                );
                if let Some(profit) = product.total_profit {
                    line.push_str(&format!(" | {} profit", format_currency(Some(profit))));
                }
                print_cmd_info!("Top product", "{}", line);
            }
        }
    }
}
