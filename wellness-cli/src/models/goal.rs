use serde::{Deserialize, Serialize};

use crate::form::{format_number, parse_number, Field, FormError, FormRecord};

/// Fitness targets posted to `/api/goals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSet {
    pub daily_steps_goal: f64,
    pub weekly_workouts_goal: f64,
    pub calorie_intake_goal: f64,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            daily_steps_goal: 10000.0,
            weekly_workouts_goal: 5.0,
            calorie_intake_goal: 2000.0,
        }
    }
}

impl FormRecord for GoalSet {
    const FIELDS: &'static [Field] = &[
        Field::number("dailyStepsGoal", "Daily Steps Goal"),
        Field::number("weeklyWorkoutsGoal", "Weekly Workouts Goal"),
        Field::number("calorieIntakeGoal", "Calorie Intake Goal"),
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "dailyStepsGoal" => format_number(self.daily_steps_goal),
            "weeklyWorkoutsGoal" => format_number(self.weekly_workouts_goal),
            "calorieIntakeGoal" => format_number(self.calorie_intake_goal),
            _ => String::new(),
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match name {
            "dailyStepsGoal" => self.daily_steps_goal = parse_number("dailyStepsGoal", raw)?,
            "weeklyWorkoutsGoal" => {
                self.weekly_workouts_goal = parse_number("weeklyWorkoutsGoal", raw)?
            }
            "calorieIntakeGoal" => {
                self.calorie_intake_goal = parse_number("calorieIntakeGoal", raw)?
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

/// Measured progress posted to `/api/progress`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub daily_steps: f64,
    pub weekly_workouts: f64,
    pub calorie_intake: f64,
}

impl FormRecord for ProgressEntry {
    const FIELDS: &'static [Field] = &[
        Field::number("dailySteps", "Today's Steps"),
        Field::number("weeklyWorkouts", "Workouts This Week"),
        Field::number("calorieIntake", "Calories Consumed Today"),
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "dailySteps" => format_number(self.daily_steps),
            "weeklyWorkouts" => format_number(self.weekly_workouts),
            "calorieIntake" => format_number(self.calorie_intake),
            _ => String::new(),
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match name {
            "dailySteps" => self.daily_steps = parse_number("dailySteps", raw)?,
            "weeklyWorkouts" => self.weekly_workouts = parse_number("weeklyWorkouts", raw)?,
            "calorieIntake" => self.calorie_intake = parse_number("calorieIntake", raw)?,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_goal_defaults() {
        let goals = GoalSet::default();
        assert_eq!(goals.daily_steps_goal, 10000.0);
        assert_eq!(goals.weekly_workouts_goal, 5.0);
        assert_eq!(goals.calorie_intake_goal, 2000.0);
    }

    #[test]
    fn test_progress_wire_format() {
        let progress = ProgressEntry {
            daily_steps: 8500.0,
            weekly_workouts: 3.0,
            calorie_intake: 1800.0,
        };

        assert_eq!(
            serde_json::to_value(&progress).unwrap(),
            json!({"dailySteps": 8500.0, "weeklyWorkouts": 3.0, "calorieIntake": 1800.0})
        );
    }
}
