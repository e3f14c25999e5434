use serde::{Deserialize, Serialize};

use crate::form::{format_number, parse_number, Field, FormError, FormRecord};

/// Kind of exercise session. Types the client does not know are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExerciseType {
    #[default]
    Running,
    Cycling,
    StrengthTraining,
    Other(String),
}

impl ExerciseType {
    pub const OPTIONS: &'static [&'static str] = &["Running", "Cycling", "Strength Training"];

    /// Calories burned per minute
    pub fn rate(&self) -> f64 {
        match self {
            ExerciseType::Running => 10.0,
            ExerciseType::Cycling => 8.0,
            ExerciseType::StrengthTraining => 6.0,
            ExerciseType::Other(_) => 0.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExerciseType::Running => "Running",
            ExerciseType::Cycling => "Cycling",
            ExerciseType::StrengthTraining => "Strength Training",
            ExerciseType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for ExerciseType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Running" => ExerciseType::Running,
            "Cycling" => ExerciseType::Cycling,
            "Strength Training" => ExerciseType::StrengthTraining,
            _ => ExerciseType::Other(s),
        }
    }
}

impl From<&str> for ExerciseType {
    fn from(s: &str) -> Self {
        ExerciseType::from(s.to_string())
    }
}

impl From<ExerciseType> for String {
    fn from(t: ExerciseType) -> Self {
        match t {
            ExerciseType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calories burned for a session: duration in minutes times the type's rate
pub fn calories_burned(exercise_type: &ExerciseType, duration: f64) -> f64 {
    duration * exercise_type.rate()
}

/// What the user fills in on the exercise form
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseInput {
    pub exercise_type: ExerciseType,
    pub duration: f64,
    pub distance: f64,
}

impl Default for ExerciseInput {
    fn default() -> Self {
        Self {
            exercise_type: ExerciseType::Running,
            duration: 0.0,
            distance: 0.0,
        }
    }
}

impl ExerciseInput {
    /// Duration must be positive and distance non-negative
    pub fn validate(&self) -> Result<(), String> {
        if self.duration <= 0.0 || self.distance < 0.0 {
            return Err(
                "Invalid input! Duration must be positive and distance cannot be negative."
                    .to_string(),
            );
        }
        Ok(())
    }

    pub fn to_entry(&self) -> ExerciseEntry {
        ExerciseEntry {
            exercise_type: self.exercise_type.clone(),
            duration: self.duration,
            distance: self.distance,
            calories_burned: calories_burned(&self.exercise_type, self.duration),
        }
    }
}

impl FormRecord for ExerciseInput {
    const FIELDS: &'static [Field] = &[
        Field::choice("exerciseType", "Exercise Type", ExerciseType::OPTIONS),
        Field::number("duration", "Duration (minutes)"),
        Field::number("distance", "Distance (miles or km)"),
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "exerciseType" => self.exercise_type.to_string(),
            "duration" => format_number(self.duration),
            "distance" => format_number(self.distance),
            _ => String::new(),
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match name {
            "exerciseType" => self.exercise_type = ExerciseType::from(raw),
            "duration" => self.duration = parse_number("duration", raw)?,
            "distance" => self.distance = parse_number("distance", raw)?,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

/// Logged exercise session as sent to and returned by `/api/exercises`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub exercise_type: ExerciseType,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub calories_burned: f64,
}
