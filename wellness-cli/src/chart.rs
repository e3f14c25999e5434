//! Chart-ready projections of screen state.
//!
//! Every function here is pure: it takes the current record or collection
//! and returns labels plus one or more value series aligned with them.

use crate::models::{ExerciseEntry, FoodLogEntry, NutritionGoalSet, ProgressEntry};

pub const NO_EXERCISE_LOGS: &str = "No logs to display.";
pub const INVALID_INPUT: &str = "Enter numbers in every field to see the chart.";

/// Second point of each progress series
const PROGRESS_REFERENCE: f64 = 100.0;

const MACRO_LABELS: [&str; 4] = ["Calories", "Protein", "Carbs", "Fat"];

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// Nothing to plot; show this text instead
    Placeholder(&'static str),
    Chart(Chart),
}

impl ChartView {
    pub fn as_chart(&self) -> Option<&Chart> {
        match self {
            ChartView::Chart(chart) => Some(chart),
            ChartView::Placeholder(_) => None,
        }
    }
}

impl Chart {
    fn new(title: &str, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        debug_assert!(datasets.iter().all(|d| d.values.len() == labels.len()));
        Self {
            title: title.to_string(),
            labels,
            datasets,
        }
    }
}

fn dataset(label: &str, values: Vec<f64>) -> Dataset {
    Dataset {
        label: label.to_string(),
        values,
    }
}

fn macro_labels() -> Vec<String> {
    MACRO_LABELS.iter().map(|l| l.to_string()).collect()
}

/// Calories burned per logged session
pub fn exercise_calories(entries: &[ExerciseEntry]) -> ChartView {
    if entries.is_empty() {
        return ChartView::Placeholder(NO_EXERCISE_LOGS);
    }

    let labels = entries.iter().map(|e| e.exercise_type.to_string()).collect();
    let values = entries.iter().map(|e| e.calories_burned).collect();

    ChartView::Chart(Chart::new(
        "Calories Burned Overview",
        labels,
        vec![dataset("Calories Burned", values)],
    ))
}

pub fn goal_progress(progress: &ProgressEntry) -> ChartView {
    ChartView::Chart(Chart::new(
        "Progress Charts",
        vec!["Today".to_string(), "This Week".to_string()],
        vec![
            dataset(
                "Daily Steps Progress",
                vec![progress.daily_steps, PROGRESS_REFERENCE],
            ),
            dataset(
                "Calorie Intake Progress",
                vec![progress.calorie_intake, PROGRESS_REFERENCE],
            ),
        ],
    ))
}

pub fn nutrition_goals(goals: &NutritionGoalSet) -> ChartView {
    ChartView::Chart(Chart::new(
        "Your Nutrition Goals",
        macro_labels(),
        vec![dataset(
            "Nutrition Goals",
            vec![goals.calorie_goal, goals.protein_goal, goals.carb_goal, goals.fat_goal],
        )],
    ))
}

pub fn food_breakdown(entry: &FoodLogEntry) -> ChartView {
    ChartView::Chart(Chart::new(
        "Food Nutrition Breakdown",
        macro_labels(),
        vec![dataset(
            "Food Nutrition Breakdown",
            vec![entry.calories, entry.protein, entry.carbs, entry.fat],
        )],
    ))
}

/// Values as whole non-negative numbers, for terminal bar charts
pub fn bar_values(dataset: &Dataset) -> Vec<u64> {
    dataset
        .values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { v.round() as u64 } else { 0 })
        .collect()
}
