use serde::{Deserialize, Deserializer, Serialize};

use crate::form::{Field, FormError, FormRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl Unit {
    pub const OPTIONS: &'static [&'static str] = &["metric", "imperial"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Unit::Metric),
            "imperial" => Ok(Unit::Imperial),
            _ => Err(FormError::InvalidChoice {
                field: "preferences.unit",
                value: s.to_string(),
            }),
        }
    }
}

impl FitnessGoal {
    pub const OPTIONS: &'static [&'static str] = &["maintain", "lose", "gain"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::Lose => "lose",
            FitnessGoal::Gain => "gain",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FitnessGoal::Maintain => "Maintain Weight",
            FitnessGoal::Lose => "Lose Weight",
            FitnessGoal::Gain => "Gain Muscle",
        }
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintain" => Ok(FitnessGoal::Maintain),
            "lose" => Ok(FitnessGoal::Lose),
            "gain" => Ok(FitnessGoal::Gain),
            _ => Err(FormError::InvalidChoice {
                field: "preferences.goal",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub goal: FitnessGoal,
}

/// Account profile read from and written back to `/api/user/profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub preferences: Preferences,
}

impl FormRecord for UserProfile {
    const FIELDS: &'static [Field] = &[
        Field::text("name", "Name"),
        Field::text("email", "Email"),
        Field::secret("password", "Password"),
        Field::choice("preferences.unit", "Unit of Measurement", Unit::OPTIONS),
        Field::choice("preferences.goal", "Fitness Goal", FitnessGoal::OPTIONS),
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "password" => self.password.clone(),
            "preferences.unit" => self.preferences.unit.as_str().to_string(),
            "preferences.goal" => self.preferences.goal.as_str().to_string(),
            _ => String::new(),
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match name {
            "name" => self.name = raw.to_string(),
            "email" => self.email = raw.to_string(),
            "password" => self.password = raw.to_string(),
            "preferences.unit" => self.preferences.unit = raw.parse()?,
            "preferences.goal" => self.preferences.goal = raw.parse()?,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

/// One entry of the health history from `/api/user/tracking`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exercise: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nutrition: String,
}

/// The tracking endpoint sends `null` for blank cells
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
