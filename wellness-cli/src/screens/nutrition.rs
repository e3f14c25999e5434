use crate::api::{endpoints, ApiClient, Endpoint};
use crate::chart::{self, ChartView};
use crate::form::{Collection, FormController, FormSpec, Outcome};
use crate::models::{FoodLogEntry, NutritionGoalSet};

const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Debug)]
pub struct NutritionGoalForm;

impl FormSpec for NutritionGoalForm {
    type Record = NutritionGoalSet;
    type Payload = NutritionGoalSet;

    const ENDPOINT: Endpoint = endpoints::SET_NUTRITION_GOALS;
    const SUCCESS: &'static str = "Goal successfully set!";
    const FAILURE: &'static str = GENERIC_FAILURE;

    fn payload(record: &NutritionGoalSet) -> NutritionGoalSet {
        record.clone()
    }
}

#[derive(Debug)]
pub struct FoodLogForm;

impl FormSpec for FoodLogForm {
    type Record = FoodLogEntry;
    type Payload = FoodLogEntry;

    const ENDPOINT: Endpoint = endpoints::CREATE_FOOD_LOG;
    const SUCCESS: &'static str = "Food log added successfully!";
    const FAILURE: &'static str = GENERIC_FAILURE;

    fn payload(record: &FoodLogEntry) -> FoodLogEntry {
        record.clone()
    }

    fn rejection_message(server_message: &str) -> String {
        format!("Error: {}", server_message)
    }
}

#[derive(Debug, Default)]
pub struct NutritionGoalsScreen {
    pub form: FormController<NutritionGoalForm>,
}

impl NutritionGoalsScreen {
    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<NutritionGoalSet> {
        self.form.submit(client).await
    }

    pub fn chart(&self) -> ChartView {
        match self.form.form().record() {
            Ok(goals) => chart::nutrition_goals(&goals),
            Err(_) => ChartView::Placeholder(chart::INVALID_INPUT),
        }
    }
}

/// Food log: the form plus the items logged during this session.
/// The list is kept on the client only.
#[derive(Debug, Default)]
pub struct FoodLogScreen {
    pub form: FormController<FoodLogForm>,
    pub logged: Collection<FoodLogEntry>,
}

impl FoodLogScreen {
    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<FoodLogEntry> {
        let outcome = self.form.submit(client).await;
        self.record_outcome(&outcome);
        outcome
    }

    pub fn record_outcome(&mut self, outcome: &Outcome<FoodLogEntry>) {
        if let Outcome::Saved { record, .. } = outcome {
            self.logged.push(record.clone());
        }
    }

    /// Breakdown of the food currently being entered
    pub fn chart(&self) -> ChartView {
        match self.form.form().record() {
            Ok(entry) => chart::food_breakdown(&entry),
            Err(_) => ChartView::Placeholder(chart::INVALID_INPUT),
        }
    }
}
