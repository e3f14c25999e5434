//! Screen configurations: one [`FormSpec`](crate::form::FormSpec) per form,
//! plus the state each screen keeps next to its form.

mod auth;
mod exercise;
mod goals;
mod nutrition;
mod profile;

pub use auth::{session_token, LoginForm, RegisterForm};
pub use exercise::{ExerciseForm, ExerciseScreen};
pub use goals::{GoalForm, GoalsScreen, ProgressForm, ProgressScreen};
pub use nutrition::{FoodLogForm, FoodLogScreen, NutritionGoalForm, NutritionGoalsScreen};
pub use profile::{ProfileForm, ProfileScreen};
