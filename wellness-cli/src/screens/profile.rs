use serde_json::Value;
use std::time::Duration;

use crate::api::{endpoints, ApiClient, ApiError, Endpoint};
use crate::form::{AfterSuccess, Collection, Dismissal, FormController, FormSpec, NotificationKind, Outcome};
use crate::models::{HealthRecord, UserProfile};

const AUTO_CLEAR: Dismissal = Dismissal::After(Duration::from_secs(5));

#[derive(Debug)]
pub struct ProfileForm;

impl FormSpec for ProfileForm {
    type Record = UserProfile;
    type Payload = UserProfile;

    const ENDPOINT: Endpoint = endpoints::UPDATE_PROFILE;
    const SUCCESS: &'static str = "Profile updated successfully!";
    const FAILURE: &'static str = "Failed to update profile!";
    const AFTER_SUCCESS: AfterSuccess = AfterSuccess::Keep;

    fn payload(record: &UserProfile) -> UserProfile {
        record.clone()
    }

    fn dismissal(_kind: NotificationKind) -> Dismissal {
        AUTO_CLEAR
    }
}

/// Profile: an editable form that starts read-only, plus the health history
#[derive(Debug, Default)]
pub struct ProfileScreen {
    pub form: FormController<ProfileForm>,
    pub history: Collection<HealthRecord>,
    editing: bool,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    /// Save is only possible while editing and with no request in flight
    pub fn can_submit(&self) -> bool {
        self.editing && self.form.is_idle()
    }

    /// Fetch profile and history side by side
    pub async fn load(&mut self, client: &ApiClient) {
        let (profile, history) = tokio::join!(client.fetch_profile(), client.fetch_tracking());
        self.apply_profile(profile);
        self.apply_history(history);
    }

    pub fn apply_profile(&mut self, result: Result<UserProfile, ApiError>) -> bool {
        match result {
            Ok(_) if self.editing => {
                tracing::debug!("Profile reload ignored while editing");
                true
            }
            Ok(profile) => {
                tracing::debug!("Loaded profile for {}", profile.email);
                self.form.load(&profile);
                true
            }
            Err(e) => {
                tracing::warn!("Error fetching user data: {}", e);
                let message = match e {
                    ApiError::NotLoggedIn => "Please log in first.",
                    _ => "Error fetching user data",
                };
                self.form.notifications_mut().error(message, AUTO_CLEAR);
                false
            }
        }
    }

    pub fn apply_history(&mut self, result: Result<Vec<HealthRecord>, ApiError>) -> bool {
        self.history.apply(
            result,
            self.form.notifications_mut(),
            "Error fetching health data",
            AUTO_CLEAR,
        )
    }

    pub fn begin_submit(&mut self) -> Option<UserProfile> {
        if !self.can_submit() {
            tracing::debug!("Profile save ignored (editing: {})", self.editing);
            return None;
        }
        self.form.begin_submit()
    }

    /// A successful save leaves edit mode; a failed one stays in it
    pub fn finish_submit(&mut self, result: Result<Value, ApiError>) -> Outcome<UserProfile> {
        let outcome = self.form.finish_submit(result);
        if outcome.is_saved() {
            self.editing = false;
        }
        outcome
    }

    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<UserProfile> {
        let Some(payload) = self.begin_submit() else {
            return if self.form.is_idle() {
                Outcome::Failed
            } else {
                Outcome::Busy
            };
        };

        let result = client.write(ProfileForm::ENDPOINT, &payload).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn loaded_screen() -> ProfileScreen {
        let mut screen = ProfileScreen::new();
        screen.apply_profile(Ok(UserProfile {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        }));
        screen
    }

    #[test]
    fn test_submit_requires_edit_mode() {
        let mut screen = loaded_screen();
        assert!(screen.begin_submit().is_none());

        screen.toggle_editing();
        assert!(screen.begin_submit().is_some());
        // In flight: a second save is refused
        assert!(!screen.can_submit());
    }

    #[test]
    fn test_successful_save_leaves_edit_mode_and_keeps_values() {
        let mut screen = loaded_screen();
        screen.set_editing(true);
        screen.form.set_field("name", "Ada Lovelace").unwrap();

        screen.begin_submit().unwrap();
        let outcome = screen.finish_submit(Ok(Value::Null));

        assert!(outcome.is_saved());
        assert!(!screen.is_editing());
        assert_eq!(screen.form.form().value("name"), Some("Ada Lovelace"));
        assert_eq!(
            screen.form.notifications().message(),
            Some("Profile updated successfully!")
        );
    }

    #[test]
    fn test_failed_save_stays_in_edit_mode() {
        let mut screen = loaded_screen();
        screen.set_editing(true);
        screen.form.set_field("email", "ada@lovelace.dev").unwrap();

        screen.begin_submit().unwrap();
        screen.finish_submit(Err(ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "")));

        assert!(screen.is_editing());
        assert_eq!(screen.form.form().value("email"), Some("ada@lovelace.dev"));
        assert_eq!(
            screen.form.notifications().message(),
            Some("Failed to update profile!")
        );
    }

    #[test]
    fn test_reload_keeps_unsaved_edits() {
        let mut screen = loaded_screen();
        screen.set_editing(true);
        screen.form.set_field("name", "Ada Lovelace").unwrap();

        assert!(screen.apply_profile(Ok(UserProfile {
            name: "Ada".to_string(),
            ..Default::default()
        })));
        assert_eq!(screen.form.form().value("name"), Some("Ada Lovelace"));
    }

    #[test]
    fn test_fetch_failure_is_reported() {
        let mut screen = ProfileScreen::new();
        screen.apply_profile(Err(ApiError::Network("timed out".to_string())));

        assert_eq!(
            screen.form.notifications().message(),
            Some("Error fetching user data")
        );
        assert_eq!(screen.form.form().value("name"), Some(""));
    }
}
