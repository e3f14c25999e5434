use crate::api::{endpoints, ApiClient, Endpoint};
use crate::chart::{self, ChartView};
use crate::form::{FormController, FormSpec, Outcome};
use crate::models::{GoalSet, ProgressEntry};

#[derive(Debug)]
pub struct GoalForm;

impl FormSpec for GoalForm {
    type Record = GoalSet;
    type Payload = GoalSet;

    const ENDPOINT: Endpoint = endpoints::SET_GOALS;
    const SUCCESS: &'static str = "Goals set successfully!";
    const FAILURE: &'static str = "Error setting goals. Please try again.";

    fn payload(record: &GoalSet) -> GoalSet {
        record.clone()
    }
}

#[derive(Debug)]
pub struct ProgressForm;

impl FormSpec for ProgressForm {
    type Record = ProgressEntry;
    type Payload = ProgressEntry;

    const ENDPOINT: Endpoint = endpoints::RECORD_PROGRESS;
    const SUCCESS: &'static str = "Progress updated successfully!";
    const FAILURE: &'static str = "Error updating progress. Please try again.";

    fn payload(record: &ProgressEntry) -> ProgressEntry {
        record.clone()
    }
}

#[derive(Debug, Default)]
pub struct GoalsScreen {
    pub form: FormController<GoalForm>,
}

impl GoalsScreen {
    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<GoalSet> {
        self.form.submit(client).await
    }
}

#[derive(Debug, Default)]
pub struct ProgressScreen {
    pub form: FormController<ProgressForm>,
}

impl ProgressScreen {
    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<ProgressEntry> {
        self.form.submit(client).await
    }

    /// Chart of whatever is currently typed in
    pub fn chart(&self) -> ChartView {
        match self.form.form().record() {
            Ok(progress) => chart::goal_progress(&progress),
            Err(_) => ChartView::Placeholder(chart::INVALID_INPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_chart_follows_inputs() {
        let mut screen = ProgressScreen::default();
        screen.form.set_field("dailySteps", "6000").unwrap();

        let view = screen.chart();
        assert_eq!(view.as_chart().unwrap().datasets[0].values[0], 6000.0);

        screen.form.set_field("calorieIntake", "lots").unwrap();
        assert_eq!(screen.chart(), ChartView::Placeholder(chart::INVALID_INPUT));
    }
}
