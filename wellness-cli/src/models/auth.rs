use serde::{Deserialize, Serialize};

use crate::form::{Field, FormError, FormRecord};

/// Login / registration inputs. `username` is only sent when registering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl FormRecord for Credentials {
    const FIELDS: &'static [Field] = &[
        Field::text("email", "Email"),
        Field::secret("password", "Password"),
        Field::text("username", "Username"),
    ];

    fn field_value(&self, name: &str) -> String {
        match name {
            "email" => self.email.clone(),
            "password" => self.password.clone(),
            "username" => self.username.clone(),
            _ => String::new(),
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        match name {
            "email" => self.email = raw.to_string(),
            "password" => self.password = raw.to_string(),
            "username" => self.username = raw.to_string(),
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// Fields of the login reply the client cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginReply {
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}
