pub mod auth;
pub mod exercise;
pub mod goal;
pub mod nutrition;
pub mod profile;

pub use auth::{Credentials, LoginBody, LoginReply, RegisterBody};
pub use exercise::{calories_burned, ExerciseEntry, ExerciseInput, ExerciseType};
pub use goal::{GoalSet, ProgressEntry};
pub use nutrition::{FoodLogEntry, MealType, NutritionGoalSet};
pub use profile::{FitnessGoal, HealthRecord, Preferences, Unit, UserProfile};
