use std::time::Duration;

use crate::api::{endpoints, ApiClient, ApiError, Endpoint};
use crate::chart::{self, ChartView};
use crate::form::{Collection, Dismissal, FormController, FormSpec, NotificationKind, Outcome};
use crate::models::{ExerciseEntry, ExerciseInput};

const TOAST: Dismissal = Dismissal::After(Duration::from_secs(5));

#[derive(Debug)]
pub struct ExerciseForm;

impl FormSpec for ExerciseForm {
    type Record = ExerciseInput;
    type Payload = ExerciseEntry;

    const ENDPOINT: Endpoint = endpoints::CREATE_EXERCISE;
    const SUCCESS: &'static str = "Exercise logged successfully!";
    const FAILURE: &'static str = "Failed to log exercise!";

    fn validate(record: &ExerciseInput) -> Result<(), String> {
        record.validate()
    }

    fn payload(record: &ExerciseInput) -> ExerciseEntry {
        record.to_entry()
    }

    fn dismissal(_kind: NotificationKind) -> Dismissal {
        TOAST
    }
}

/// Exercise log: the form plus the server's list of logged sessions
#[derive(Debug, Default)]
pub struct ExerciseScreen {
    pub form: FormController<ExerciseForm>,
    pub logs: Collection<ExerciseEntry>,
}

impl ExerciseScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &ApiClient) {
        let result = client.list_exercises().await;
        self.apply_logs(result);
    }

    /// Returns false when the fetch failed and the old list was kept
    pub fn apply_logs(&mut self, result: Result<Vec<ExerciseEntry>, ApiError>) -> bool {
        self.logs.apply(
            result,
            self.form.notifications_mut(),
            "Error fetching exercise logs",
            TOAST,
        )
    }

    /// Submit the form and, once saved, reload the list
    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<ExerciseInput> {
        let outcome = self.form.submit(client).await;
        if outcome.is_saved() {
            self.refresh(client).await;
        }
        outcome
    }

    pub fn chart(&self) -> ChartView {
        chart::exercise_calories(self.logs.items())
    }
}
