use serde::{Deserialize, Serialize};

use crate::form::{format_number, parse_number, Field, FormError, FormRecord};

/// Daily macro targets posted to `/api/nutrition-goals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoalSet {
    pub calorie_goal: f64,
    pub protein_goal: f64,
    pub carb_goal: f64,
    pub fat_goal: f64,
}

impl Default for NutritionGoalSet {
    fn default() -> Self {
        Self {
            calorie_goal: 2000.0,
            protein_goal: 100.0,
            carb_goal: 250.0,
            fat_goal: 70.0,
        }
    }
}

impl FormRecord for NutritionGoalSet {
    const FIELDS: &'static [Field] = &[
        Field::number("calorieGoal", "Daily Calorie Goal"),
        Field::number("proteinGoal", "Protein Goal (g)"),
        Field::number("carbGoal", "Carb Goal (g)"),
        Field::number("fatGoal", "Fat Goal (g)"),
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "calorieGoal" => format_number(self.calorie_goal),
            "proteinGoal" => format_number(self.protein_goal),
            "carbGoal" => format_number(self.carb_goal),
            "fatGoal" => format_number(self.fat_goal),
            _ => String::new(),
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match name {
            "calorieGoal" => self.calorie_goal = parse_number("calorieGoal", raw)?,
            "proteinGoal" => self.protein_goal = parse_number("proteinGoal", raw)?,
            "carbGoal" => self.carb_goal = parse_number("carbGoal", raw)?,
            "fatGoal" => self.fat_goal = parse_number("fatGoal", raw)?,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const OPTIONS: &'static [&'static str] = &["breakfast", "lunch", "dinner", "snack"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(FormError::InvalidChoice {
                field: "mealType",
                value: s.to_string(),
            }),
        }
    }
}

/// One food item posted to `/api/foodlogs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal_type: MealType,
}

impl FormRecord for FoodLogEntry {
    const FIELDS: &'static [Field] = &[
        Field::text("foodName", "Food Item"),
        Field::number("calories", "Calories"),
        Field::number("protein", "Protein (g)"),
        Field::number("carbs", "Carbs (g)"),
        Field::number("fat", "Fat (g)"),
        Field::choice("mealType", "Meal Type", MealType::OPTIONS),
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "foodName" => self.food_name.clone(),
            "calories" => format_number(self.calories),
            "protein" => format_number(self.protein),
            "carbs" => format_number(self.carbs),
            "fat" => format_number(self.fat),
            "mealType" => self.meal_type.as_str().to_string(),
            _ => String::new(),
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match name {
            "foodName" => self.food_name = raw.to_string(),
            "calories" => self.calories = parse_number("calories", raw)?,
            "protein" => self.protein = parse_number("protein", raw)?,
            "carbs" => self.carbs = parse_number("carbs", raw)?,
            "fat" => self.fat = parse_number("fat", raw)?,
            "mealType" => self.meal_type = raw.parse()?,
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
    fn test_meal_type_parsing() {
        assert_eq!("Dinner".parse::<MealType>(), Ok(MealType::Dinner));
        assert_eq!(
            "brunch".parse::<MealType>(),
            Err(FormError::InvalidChoice {
                field: "mealType",
                value: "brunch".to_string()
            })
        );
    }

    #[test]
    fn test_food_log_wire_format() {
        let entry = FoodLogEntry {
            food_name: "Oatmeal".to_string(),
            calories: 150.0,
            protein: 5.0,
            carbs: 27.0,
            fat: 3.0,
            meal_type: MealType::Breakfast,
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "foodName": "Oatmeal",
                "calories": 150.0,
                "protein": 5.0,
                "carbs": 27.0,
                "fat": 3.0,
                "mealType": "breakfast"
            })
        );
    }

    #[test]
    fn test_nutrition_goal_defaults() {
        let goals = NutritionGoalSet::default();
        assert_eq!(
            (goals.calorie_goal, goals.protein_goal, goals.carb_goal, goals.fat_goal),
            (2000.0, 100.0, 250.0, 70.0)
        );
    }
}
