use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Tabs, Widget, Wrap},
};

use super::app::View;
use crate::chart::{self, ChartView};
use crate::form::{format_number, FieldKind, FormView, Notification};
use crate::models::{ExerciseEntry, FoodLogEntry, HealthRecord};

const SERIES_COLORS: [Color; 2] = [Color::Cyan, Color::Magenta];

/// How a form panel is drawn
pub struct FormStyle {
    pub title: &'static str,
    pub selected: usize,
    pub enabled: bool,
    pub reveal_secrets: bool,
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Gray))
}

/// Render the view tabs
pub fn render_tabs(area: Rect, buf: &mut Buffer, view: View) {
    let titles = View::ALL.iter().map(|v| Line::from(v.title()));

    Tabs::new(titles)
        .select(view.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🩺 Health & Wellness "),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .render(area, buf);
}

/// Render the single notification line
pub fn render_notification(area: Rect, buf: &mut Buffer, notification: Option<&Notification>) {
    let Some(notification) = notification else {
        return;
    };

    let (icon, color) = if notification.is_error() {
        ("✗", Color::Red)
    } else {
        ("✓", Color::Green)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {} ", icon, notification.message),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled("  Esc to dismiss", Style::default().fg(Color::DarkGray)),
    ]);
    Paragraph::new(line).render(area, buf);
}

/// Render a form's inputs
pub fn render_form(area: Rect, buf: &mut Buffer, form: &dyn FormView, style: &FormStyle) {
    let border_style = if style.enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(style.title)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = Vec::new();
    for (idx, (field, value)) in form.fields().iter().zip(form.values()).enumerate() {
        let is_selected = idx == style.selected;

        let shown = match field.kind {
            FieldKind::Secret if !style.reveal_secrets => "•".repeat(value.chars().count()),
            FieldKind::Choice(_) => format!("‹ {} ›", value),
            _ => value.clone(),
        };

        let value_style = match (style.enabled, is_selected) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White),
        };

        let marker = if is_selected { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}: ", field.label), Style::default().fg(Color::Gray)),
            Span::styled(shown, value_style),
        ]));
        lines.push(Line::from(""));
    }

    let hint = if form.is_submitting() {
        Span::styled("Submitting...", Style::default().fg(Color::Yellow))
    } else if style.enabled {
        Span::styled("Enter to submit", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled("Ctrl+E to edit", Style::default().fg(Color::DarkGray))
    };
    lines.push(Line::from(hint));

    Paragraph::new(lines).render(inner, buf);
}

/// Render a chart as grouped bars, one group per label
pub fn render_chart(area: Rect, buf: &mut Buffer, view: &ChartView) {
    let chart = match view {
        ChartView::Placeholder(text) => {
            Paragraph::new(*text)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .block(panel(" 📈 Chart "))
                .render(area, buf);
            return;
        }
        ChartView::Chart(chart) => chart,
    };

    let block = panel(&chart.title);
    let inner = block.inner(area);
    block.render(area, buf);

    let legend = Line::from(
        chart
            .datasets
            .iter()
            .zip(SERIES_COLORS.iter().cycle())
            .map(|(d, color)| Span::styled(format!("■ {}  ", d.label), Style::default().fg(*color)))
            .collect::<Vec<_>>(),
    );
    Paragraph::new(legend).render(Rect { height: 1, ..inner }, buf);

    let series: Vec<Vec<u64>> = chart.datasets.iter().map(chart::bar_values).collect();

    let mut barchart = BarChart::default().bar_width(7).bar_gap(1).group_gap(3);
    for (idx, label) in chart.labels.iter().enumerate() {
        let bars: Vec<Bar> = chart
            .datasets
            .iter()
            .zip(&series)
            .zip(SERIES_COLORS.iter().cycle())
            .map(|((dataset, values), color)| {
                let value = values.get(idx).copied().unwrap_or(0);
                let raw = dataset.values.get(idx).copied().unwrap_or(0.0);
                Bar::default()
                    .value(value)
                    .text_value(format_number(raw))
                    .style(Style::default().fg(*color))
                    .value_style(Style::default().fg(Color::Black).bg(*color))
            })
            .collect();

        barchart = barchart.data(BarGroup::default().label(Line::from(label.clone())).bars(&bars));
    }

    let chart_area = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    };
    barchart.render(chart_area, buf);
}

/// Render the list of exercise sessions
pub fn render_exercise_logs(area: Rect, buf: &mut Buffer, entries: &[ExerciseEntry]) {
    let block = panel(" 🏃 Your Exercise Logs ");
    let inner = block.inner(area);
    block.render(area, buf);

    if entries.is_empty() {
        Paragraph::new(chart::NO_EXERCISE_LOGS)
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(format!(
                "{:<18} {:>5} min {:>6} km {:>6} kcal",
                e.exercise_type.as_str(),
                format_number(e.duration),
                format_number(e.distance),
                format_number(e.calories_burned),
            )))
        })
        .collect();

    List::new(items).render(inner, buf);
}

/// Render the food items logged this session
pub fn render_food_log(area: Rect, buf: &mut Buffer, entries: &[FoodLogEntry]) {
    let block = panel(" 🍎 Logged Today ");
    let inner = block.inner(area);
    block.render(area, buf);

    if entries.is_empty() {
        Paragraph::new("Nothing logged yet.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(format!(
                "{:<10} {:<16} {:>6} kcal  P {} / C {} / F {}",
                e.meal_type.as_str(),
                e.food_name,
                format_number(e.calories),
                format_number(e.protein),
                format_number(e.carbs),
                format_number(e.fat),
            )))
        })
        .collect();

    List::new(items).render(inner, buf);
}

/// Render the health history under the profile
pub fn render_history(area: Rect, buf: &mut Buffer, records: &[HealthRecord]) {
    let block = panel(" 📅 Health History ");
    let inner = block.inner(area);
    block.render(area, buf);

    if records.is_empty() {
        Paragraph::new("No health data available.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .map(|r| {
            let calories = r
                .calories
                .map(format_number)
                .unwrap_or_else(|| "-".to_string());
            ListItem::new(vec![
                Line::from(Span::styled(
                    r.date.clone(),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(format!("  Exercise: {}", r.exercise)),
                Line::from(format!("  Calories: {}", calories)),
                Line::from(format!("  Nutrition: {}", r.nutrition)),
            ])
        })
        .collect();

    List::new(items).render(inner, buf);
}

pub fn render_goal_hint(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            "Daily and weekly targets",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Set how many steps, workouts and calories you aim for."),
        Line::from("Record what you actually did on the Progress tab."),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(" 🎯 Goals "))
        .render(area, buf);
}

/// Render help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ❓ Help ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    block.render(area, buf);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation:",
            Style::default().fg(Color::Cyan),
        )),
        Line::from("  Tab/Shift+Tab - Next/previous view"),
        Line::from("  ↑/↓           - Select field"),
        Line::from(""),
        Line::from(Span::styled("Editing:", Style::default().fg(Color::Cyan))),
        Line::from("  Type/Backspace - Edit the selected field"),
        Line::from("  ←/→            - Change a choice"),
        Line::from("  Enter          - Submit"),
        Line::from("  Esc            - Dismiss notification"),
        Line::from("  Ctrl+E         - Toggle profile editing"),
        Line::from("  Ctrl+P         - Show/hide password"),
        Line::from("  Ctrl+R         - Refresh data"),
        Line::from(""),
        Line::from(Span::styled("Other:", Style::default().fg(Color::Cyan))),
        Line::from("  F1             - Toggle this help"),
        Line::from("  Ctrl+Q         - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press F1 or ESC to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(help_text).render(inner, buf);
}

/// Render status bar at bottom
pub fn render_status_bar(area: Rect, buf: &mut Buffer, submitting: bool, editing: bool) {
    let state = if submitting {
        Span::styled(
            " ⏳ Submitting ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        )
    } else if editing {
        Span::styled(
            " ✎ Editing ",
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        )
    } else {
        Span::styled(
            " ✓ Ready ",
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        )
    };

    let help_hint = Span::styled(
        " F1 help · Ctrl+Q quit ",
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    );

    Paragraph::new(Line::from(vec![state, help_hint])).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::exercise_calories;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_placeholder_chart_shows_text() {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);

        render_chart(area, &mut buf, &exercise_calories(&[]));

        assert!(buffer_text(&buf).contains("No logs to display."));
    }

    #[test]
    fn test_empty_history_message() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);

        render_history(area, &mut buf, &[]);

        assert!(buffer_text(&buf).contains("No health data available."));
    }
}
