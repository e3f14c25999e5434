use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::app::{App, View};
use super::widgets;
use crate::api::ApiClient;

const TICK: Duration = Duration::from_millis(50);

/// Dashboard manages the TUI lifecycle
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl Dashboard {
    /// Create new dashboard instance
    pub fn new(client: Arc<ApiClient>) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self {
            terminal,
            app: App::new(client),
        })
    }

    /// Run the dashboard event loop
    pub async fn run(&mut self) -> Result<()> {
        self.app.mount();

        loop {
            self.app.drain_completions();
            self.app.expire_notifications(Instant::now());

            let app = &self.app;
            self.terminal.draw(|f| ui(f, app))?;

            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.app.handle_key(key);
                    }
                }
            } else {
                tokio::time::sleep(TICK).await;
            }

            if self.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Cleanup terminal on exit
    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to restore terminal")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;

        Ok(())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the UI
fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    // Tabs, notification line, body, status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    widgets::render_tabs(main_chunks[0], f.buffer_mut(), app.view);
    widgets::render_notification(main_chunks[1], f.buffer_mut(), app.notification());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[2]);

    widgets::render_form(
        columns[0],
        f.buffer_mut(),
        app.form(app.view),
        &widgets::FormStyle {
            title: form_title(app),
            selected: app.selected_field,
            enabled: app.inputs_enabled(),
            reveal_secrets: app.reveal_password,
        },
    );

    render_side_panel(f, app, columns[1]);

    widgets::render_status_bar(
        main_chunks[3],
        f.buffer_mut(),
        app.is_submitting(),
        app.view == View::Profile && app.profile.is_editing(),
    );

    // Render help overlay if active
    if app.show_help {
        let help_area = centered_rect(60, 80, size);
        widgets::render_help_overlay(help_area, f.buffer_mut());
    }
}

fn form_title(app: &App) -> &'static str {
    match app.view {
        View::Exercise => " Log Exercise ",
        View::Goals => " Set Your Goals ",
        View::Progress => " Track Your Progress ",
        View::NutritionGoals => " Set Nutrition Goals ",
        View::FoodLog => " Log Food ",
        View::Profile if app.profile.is_editing() => " Profile (editing) ",
        View::Profile => " Profile ",
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    match app.view {
        View::Exercise => {
            widgets::render_chart(halves[0], f.buffer_mut(), &app.exercise.chart());
            widgets::render_exercise_logs(halves[1], f.buffer_mut(), app.exercise.logs.items());
        }
        View::Goals => {
            widgets::render_goal_hint(area, f.buffer_mut());
        }
        View::Progress => {
            widgets::render_chart(area, f.buffer_mut(), &app.progress.chart());
        }
        View::NutritionGoals => {
            widgets::render_chart(area, f.buffer_mut(), &app.nutrition_goals.chart());
        }
        View::FoodLog => {
            widgets::render_chart(halves[0], f.buffer_mut(), &app.food_log.chart());
            widgets::render_food_log(halves[1], f.buffer_mut(), app.food_log.logged.items());
        }
        View::Profile => {
            widgets::render_history(area, f.buffer_mut(), app.profile.history.items());
        }
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
