// Terminal UI module using ratatui

mod app;
mod dashboard;
mod widgets;

pub use app::{App, Completion, View};
pub use dashboard::Dashboard;
