use std::time::Duration;

use crate::api::{endpoints, Endpoint};
use crate::form::{Dismissal, FormSpec, NotificationKind, Outcome};
use crate::models::{Credentials, LoginBody, LoginReply, RegisterBody};

const GENERIC_FAILURE: &str = "An error occurred";

fn auth_dismissal(kind: NotificationKind) -> Dismissal {
    match kind {
        NotificationKind::Success => Dismissal::After(Duration::from_secs(3)),
        NotificationKind::Error => Dismissal::Manual,
    }
}

#[derive(Debug)]
pub struct LoginForm;

impl FormSpec for LoginForm {
    type Record = Credentials;
    type Payload = LoginBody;

    const ENDPOINT: Endpoint = endpoints::LOGIN;
    const SUCCESS: &'static str = "Login successful!";
    const FAILURE: &'static str = GENERIC_FAILURE;

    fn payload(record: &Credentials) -> LoginBody {
        LoginBody {
            email: record.email.clone(),
            password: record.password.clone(),
        }
    }

    fn dismissal(kind: NotificationKind) -> Dismissal {
        auth_dismissal(kind)
    }
}

#[derive(Debug)]
pub struct RegisterForm;

impl FormSpec for RegisterForm {
    type Record = Credentials;
    type Payload = RegisterBody;

    const ENDPOINT: Endpoint = endpoints::REGISTER;
    const SUCCESS: &'static str = "Registration successful!";
    const FAILURE: &'static str = GENERIC_FAILURE;

    fn payload(record: &Credentials) -> RegisterBody {
        RegisterBody {
            email: record.email.clone(),
            password: record.password.clone(),
            username: record.username.clone(),
        }
    }

    fn dismissal(kind: NotificationKind) -> Dismissal {
        auth_dismissal(kind)
    }
}

/// Session token carried by a successful login reply
pub fn session_token(outcome: &Outcome<Credentials>) -> Option<String> {
    match outcome {
        Outcome::Saved { reply, .. } => LoginReply::from_value(reply)
            .token
            .filter(|t| !t.is_empty()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_body_omits_username() {
        let credentials = Credentials {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            username: "ada".to_string(),
        };

        assert_eq!(
            serde_json::to_value(LoginForm::payload(&credentials)).unwrap(),
            json!({"email": "ada@example.com", "password": "secret"})
        );
        assert_eq!(
            serde_json::to_value(RegisterForm::payload(&credentials)).unwrap(),
            json!({"email": "ada@example.com", "password": "secret", "username": "ada"})
        );
    }

    #[test]
    fn test_session_token_from_outcome() {
        let saved = Outcome::Saved {
            record: Credentials::default(),
            reply: json!({"token": "jwt-123"}),
        };
        assert_eq!(session_token(&saved), Some("jwt-123".to_string()));

        let no_token = Outcome::Saved {
            record: Credentials::default(),
            reply: json!({"message": "ok"}),
        };
        assert_eq!(session_token(&no_token), None);
        assert_eq!(session_token(&Outcome::Failed), None);
    }
}
