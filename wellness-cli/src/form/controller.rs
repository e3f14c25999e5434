use serde::Serialize;
use serde_json::Value;

use super::notification::{Dismissal, Notification, NotificationKind, NotificationSurface};
use super::{Field, FormError, FormRecord, FormState};
use crate::api::{ApiClient, ApiError, Endpoint};

/// What happens to the inputs after a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSuccess {
    /// Back to the defaults
    Reset,
    /// Keep what the user entered
    Keep,
}

/// Per-screen configuration of the submit flow.
pub trait FormSpec {
    type Record: FormRecord;
    type Payload: Serialize + Send + Sync + 'static;

    const ENDPOINT: Endpoint;
    const SUCCESS: &'static str;
    /// Shown when the failure carries no server message
    const FAILURE: &'static str;
    const AFTER_SUCCESS: AfterSuccess = AfterSuccess::Reset;

    fn validate(_record: &Self::Record) -> Result<(), String> {
        Ok(())
    }

    /// Body sent to the server, including any derived fields
    fn payload(record: &Self::Record) -> Self::Payload;

    fn rejection_message(server_message: &str) -> String {
        server_message.to_string()
    }

    fn dismissal(_kind: NotificationKind) -> Dismissal {
        Dismissal::Manual
    }
}

/// Lifecycle of a form. Submitting holds the record that was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState<R> {
    Idle,
    Submitting(R),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    /// The server accepted the record
    Saved { record: R, reply: Value },
    /// Validation or the request failed; an error notification is showing
    Failed,
    /// Nothing was sent because a request is already in flight
    Busy,
}

impl<R> Outcome<R> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }
}

/// Form state, notification and submit lifecycle of one screen
#[derive(Debug)]
pub struct FormController<S: FormSpec> {
    form: FormState<S::Record>,
    notifications: NotificationSurface,
    state: SubmitState<S::Record>,
}

impl<S: FormSpec> Default for FormController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSpec> FormController<S> {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            notifications: NotificationSurface::new(),
            state: SubmitState::Idle,
        }
    }

    pub fn form(&self) -> &FormState<S::Record> {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        self.form.set_field(name, value)
    }

    /// Replace the inputs with a record fetched from the server
    pub fn load(&mut self, record: &S::Record) {
        self.form.load(record);
    }

    pub fn notifications(&self) -> &NotificationSurface {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationSurface {
        &mut self.notifications
    }

    pub fn state(&self) -> &SubmitState<S::Record> {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SubmitState::Idle)
    }

    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.show(kind, message, S::dismissal(kind));
    }

    /// Start a submission. Returns the body to send, or `None` when nothing
    /// should go out: a request is already in flight, or the inputs failed
    /// to parse or validate (an error notification is then showing).
    pub fn begin_submit(&mut self) -> Option<S::Payload> {
        if !self.is_idle() {
            tracing::debug!("Submission to {} already in flight", S::ENDPOINT.path);
            return None;
        }

        let record = match self.form.record() {
            Ok(record) => record,
            Err(e) => {
                self.notify(NotificationKind::Error, e.to_string());
                return None;
            }
        };

        if let Err(message) = S::validate(&record) {
            tracing::debug!("Validation failed for {}: {}", S::ENDPOINT.path, message);
            self.notify(NotificationKind::Error, message);
            return None;
        }

        let payload = S::payload(&record);
        self.state = SubmitState::Submitting(record);
        Some(payload)
    }

    /// Finish the in-flight submission with the server's answer.
    pub fn finish_submit(&mut self, result: Result<Value, ApiError>) -> Outcome<S::Record> {
        let record = match std::mem::replace(&mut self.state, SubmitState::Idle) {
            SubmitState::Submitting(record) => record,
            SubmitState::Idle => {
                tracing::warn!("Ignoring reply for {} with no submission in flight", S::ENDPOINT.path);
                return Outcome::Failed;
            }
        };

        match result {
            Ok(reply) => {
                tracing::info!("{} {}", S::ENDPOINT.path, S::SUCCESS);
                self.notify(NotificationKind::Success, S::SUCCESS);
                if S::AFTER_SUCCESS == AfterSuccess::Reset {
                    self.form.reset();
                }
                Outcome::Saved { record, reply }
            }
            Err(e) => {
                tracing::error!("Submitting to {} failed: {}", S::ENDPOINT.path, e);
                let message = match (&e, e.server_message()) {
                    (ApiError::NotLoggedIn, _) => "Please log in first.".to_string(),
                    (_, Some(server_message)) => S::rejection_message(server_message),
                    (_, None) => S::FAILURE.to_string(),
                };
                self.notify(NotificationKind::Error, message);
                Outcome::Failed
            }
        }
    }

    /// Validate, send and interpret in one go
    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<S::Record> {
        if !self.is_idle() {
            return Outcome::Busy;
        }

        let Some(payload) = self.begin_submit() else {
            return Outcome::Failed;
        };

        let result = client.write(S::ENDPOINT, &payload).await;
        self.finish_submit(result)
    }
}

/// Object-safe view of a form, used by the dashboard to edit whichever
/// screen is active.
pub trait FormView {
    fn fields(&self) -> &'static [Field];
    fn values(&self) -> &[String];
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError>;
    fn notification(&self) -> Option<&Notification>;
    fn notifications_mut(&mut self) -> &mut NotificationSurface;
    fn is_submitting(&self) -> bool;
}

impl<S: FormSpec> FormView for FormController<S> {
    fn fields(&self) -> &'static [Field] {
        self.form.fields()
    }

    fn values(&self) -> &[String] {
        self.form.values()
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        self.form.set_field(name, value)
    }

    fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    fn notifications_mut(&mut self) -> &mut NotificationSurface {
        &mut self.notifications
    }

    fn is_submitting(&self) -> bool {
        !self.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseInput, ExerciseType};
    use crate::screens::ExerciseForm;
    use reqwest::StatusCode;
    use serde_json::json;

    fn cycling_form() -> FormController<ExerciseForm> {
        let mut controller = FormController::<ExerciseForm>::new();
        controller.set_field("exerciseType", "Cycling").unwrap();
        controller.set_field("duration", "30").unwrap();
        controller.set_field("distance", "5").unwrap();
        controller
    }

    #[test]
    fn test_begin_submit_derives_calories() {
        let mut controller = cycling_form();

        let payload = controller.begin_submit().unwrap();
        assert_eq!(payload.exercise_type, ExerciseType::Cycling);
        assert_eq!(payload.calories_burned, 240.0);
        assert!(!controller.is_idle());
    }

    #[test]
    fn test_invalid_record_is_not_sent() {
        let mut controller = FormController::<ExerciseForm>::new();
        controller.set_field("duration", "-5").unwrap();

        assert!(controller.begin_submit().is_none());
        assert!(controller.is_idle());
        let notification = controller.notifications().current().unwrap();
        assert!(notification.is_error());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let mut controller = cycling_form();

        assert!(controller.begin_submit().is_some());
        assert!(controller.begin_submit().is_none());
        // The in-flight guard does not raise a notification
        assert!(!controller.notifications().is_visible());
    }

    #[test]
    fn test_success_resets_form_and_notifies() {
        let mut controller = cycling_form();
        controller.begin_submit().unwrap();

        let outcome = controller.finish_submit(Ok(json!({"_id": "1"})));

        assert!(outcome.is_saved());
        assert!(controller.is_idle());
        assert_eq!(controller.form().record().unwrap(), ExerciseInput::default());
        assert_eq!(
            controller.notifications().message(),
            Some("Exercise logged successfully!")
        );
    }

    #[test]
    fn test_failure_keeps_inputs() {
        let mut controller = cycling_form();
        controller.begin_submit().unwrap();

        let outcome = controller.finish_submit(Err(ApiError::Network("connection refused".into())));

        assert_eq!(outcome, Outcome::Failed);
        assert!(controller.is_idle());
        assert_eq!(controller.form().value("exerciseType"), Some("Cycling"));
        assert_eq!(controller.notifications().message(), Some("Failed to log exercise!"));
    }

    #[test]
    fn test_server_message_is_shown_verbatim() {
        let mut controller = cycling_form();
        controller.begin_submit().unwrap();

        controller.finish_submit(Err(ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"Duration too long"}"#,
        )));

        assert_eq!(controller.notifications().message(), Some("Duration too long"));
    }

    #[test]
    fn test_stray_reply_is_ignored() {
        let mut controller = cycling_form();

        let outcome = controller.finish_submit(Ok(Value::Null));
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(controller.form().value("duration"), Some("30"));
        assert!(!controller.notifications().is_visible());
    }
}
