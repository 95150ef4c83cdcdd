//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as PipelineEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::PanelUpdate;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the analytics panels.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives diagnostic events from the pipelines.
    event_receiver: mpsc::Receiver<PipelineEvent>,

    /// Receives panel payloads from the pipelines.
    update_receiver: mpsc::Receiver<PanelUpdate>,

    /// Whether to enable background colors
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<PipelineEvent>,
        update_receiver: mpsc::Receiver<PanelUpdate>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            update_receiver,
            with_background_color: ui_config.with_background_color,
        }
    }

    fn new_dashboard_state(&self) -> Box<DashboardState> {
        Box::new(DashboardState::new(
            self.environment.clone(),
            self.start_time,
            UIConfig::new(self.with_background_color),
        ))
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events and payloads for processing. Payloads
        // arriving during the splash are not lost; they stay queued in the
        // channel until the dashboard screen exists to drain them.
        if let Screen::Dashboard(state) = &mut app.current_screen {
            while let Ok(event) = app.event_receiver.try_recv() {
                state.add_event(event);
            }
            while let Ok(update) = app.update_receiver.try_recv() {
                state.add_update(update);
            }
            // Update the dashboard with the queued work and a new tick
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Dashboard(app.new_dashboard_state());
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                // Any other key press skips the splash screen
                if let Screen::Splash = app.current_screen {
                    app.current_screen = Screen::Dashboard(app.new_dashboard_state());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
