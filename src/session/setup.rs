//! Session setup and initialization

use crate::analytics::AnalyticsClient;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, UPDATE_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::{PanelUpdate, PipelineSender, start_pipelines};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Diagnostic events from the pipelines
    pub event_receiver: mpsc::Receiver<Event>,
    /// Typed panel payloads from the pipelines
    pub update_receiver: mpsc::Receiver<PanelUpdate>,
    /// Join handles for the pipeline tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// The environment the session is running against
    pub environment: Environment,
}

/// Sets up a dashboard session.
///
/// Common setup for both TUI and headless modes: creates the analytics
/// client and the event/update channels, then spawns the four fetch
/// pipelines. Each pipeline runs once; there is no re-fetch interval.
pub fn setup_session(
    environment: Environment,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> SessionData {
    let client = AnalyticsClient::new(environment.clone());

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (update_sender, update_receiver) = mpsc::channel::<PanelUpdate>(UPDATE_QUEUE_SIZE);
    let sender = PipelineSender::new(event_sender, update_sender);

    let join_handles = start_pipelines(Arc::new(client), start_date, end_date, sender);

    SessionData {
        event_receiver,
        update_receiver,
        join_handles,
        environment,
    }
}
