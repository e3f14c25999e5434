use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{ApiClient, ApiError, Endpoint};
use crate::form::{Field, FieldKind, FormSpec, FormView, Notification};
use crate::models::{ExerciseEntry, HealthRecord, UserProfile};
use crate::screens::{
    ExerciseForm, ExerciseScreen, FoodLogForm, FoodLogScreen, GoalForm, GoalsScreen,
    NutritionGoalForm, NutritionGoalsScreen, ProfileForm, ProfileScreen, ProgressForm,
    ProgressScreen,
};

/// Tabs of the dashboard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Exercise,
    Goals,
    Progress,
    NutritionGoals,
    FoodLog,
    Profile,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Exercise,
        View::Goals,
        View::Progress,
        View::NutritionGoals,
        View::FoodLog,
        View::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Exercise => "Exercise",
            View::Goals => "Goals",
            View::Progress => "Progress",
            View::NutritionGoals => "Nutrition Goals",
            View::FoodLog => "Food Log",
            View::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        View::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    fn next(&self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    fn prev(&self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Result of a background request, delivered back to the event loop
#[derive(Debug)]
pub enum Completion {
    Written(View, Result<Value, ApiError>),
    Exercises(Result<Vec<ExerciseEntry>, ApiError>),
    Profile(Result<UserProfile, ApiError>),
    History(Result<Vec<HealthRecord>, ApiError>),
}

/// Application state for the TUI dashboard
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    pub view: View,
    /// Selected input of the current view
    pub selected_field: usize,
    /// Show help overlay
    pub show_help: bool,
    /// Show the profile password in clear
    pub reveal_password: bool,

    pub exercise: ExerciseScreen,
    pub goals: GoalsScreen,
    pub progress: ProgressScreen,
    pub nutrition_goals: NutritionGoalsScreen,
    pub food_log: FoodLogScreen,
    pub profile: ProfileScreen,

    client: Arc<ApiClient>,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl App {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            view: View::Exercise,
            selected_field: 0,
            show_help: false,
            reveal_password: false,
            exercise: ExerciseScreen::new(),
            goals: GoalsScreen::default(),
            progress: ProgressScreen::default(),
            nutrition_goals: NutritionGoalsScreen::default(),
            food_log: FoodLogScreen::default(),
            profile: ProfileScreen::new(),
            client,
            tx,
            rx,
        }
    }

    /// Initial fetches: exercise logs, profile and health history
    pub fn mount(&self) {
        self.fetch_exercises();
        self.fetch_profile();
    }

    /// Re-fetch everything except a profile that is being edited
    pub fn refresh(&self) {
        self.fetch_exercises();
        if !self.profile.is_editing() {
            self.fetch_profile();
        }
    }

    fn fetch_exercises(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.list_exercises().await;
            let _ = tx.send(Completion::Exercises(result));
        });
    }

    fn fetch_profile(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let (profile, history) = tokio::join!(client.fetch_profile(), client.fetch_tracking());
            let _ = tx.send(Completion::Profile(profile));
            let _ = tx.send(Completion::History(history));
        });
    }

    fn spawn_write<B>(&self, view: View, endpoint: Endpoint, body: B)
    where
        B: Serialize + Send + Sync + 'static,
    {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.write(endpoint, &body).await;
            let _ = tx.send(Completion::Written(view, result));
        });
    }

    /// Apply every completion that has arrived since the last frame
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.rx.try_recv() {
            self.apply(completion);
        }
    }

    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Written(view, result) => self.finish_write(view, result),
            Completion::Exercises(result) => {
                self.exercise.apply_logs(result);
            }
            Completion::Profile(result) => {
                self.profile.apply_profile(result);
            }
            Completion::History(result) => {
                self.profile.apply_history(result);
            }
        }
    }

    fn finish_write(&mut self, view: View, result: Result<Value, ApiError>) {
        match view {
            View::Exercise => {
                if self.exercise.form.finish_submit(result).is_saved() {
                    self.fetch_exercises();
                }
            }
            View::Goals => {
                self.goals.form.finish_submit(result);
            }
            View::Progress => {
                self.progress.form.finish_submit(result);
            }
            View::NutritionGoals => {
                self.nutrition_goals.form.finish_submit(result);
            }
            View::FoodLog => {
                let outcome = self.food_log.form.finish_submit(result);
                self.food_log.record_outcome(&outcome);
            }
            View::Profile => {
                self.profile.finish_submit(result);
            }
        }
    }

    /// Clear notifications whose timer ran out
    pub fn expire_notifications(&mut self, now: Instant) {
        for view in View::ALL {
            self.form_mut(view).notifications_mut().expire(now);
        }
    }

    pub fn form(&self, view: View) -> &dyn FormView {
        match view {
            View::Exercise => &self.exercise.form,
            View::Goals => &self.goals.form,
            View::Progress => &self.progress.form,
            View::NutritionGoals => &self.nutrition_goals.form,
            View::FoodLog => &self.food_log.form,
            View::Profile => &self.profile.form,
        }
    }

    fn form_mut(&mut self, view: View) -> &mut dyn FormView {
        match view {
            View::Exercise => &mut self.exercise.form,
            View::Goals => &mut self.goals.form,
            View::Progress => &mut self.progress.form,
            View::NutritionGoals => &mut self.nutrition_goals.form,
            View::FoodLog => &mut self.food_log.form,
            View::Profile => &mut self.profile.form,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.form(self.view).notification()
    }

    /// Profile inputs stay read-only until editing is switched on
    pub fn inputs_enabled(&self) -> bool {
        self.view != View::Profile || self.profile.is_editing()
    }

    pub fn is_submitting(&self) -> bool {
        self.form(self.view).is_submitting()
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('e') if self.view == View::Profile => self.profile.toggle_editing(),
                KeyCode::Char('p') => self.reveal_password = !self.reveal_password,
                KeyCode::Char('r') => self.refresh(),
                _ => {}
            }
            return;
        }

        // Help overlay takes precedence
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Esc => self.form_mut(self.view).notifications_mut().dismiss(),
            KeyCode::Tab => self.switch_view(self.view.next()),
            KeyCode::BackTab => self.switch_view(self.view.prev()),
            KeyCode::Up => self.selected_field = self.selected_field.saturating_sub(1),
            KeyCode::Down => {
                let last = self.form(self.view).fields().len().saturating_sub(1);
                self.selected_field = (self.selected_field + 1).min(last);
            }
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Backspace => self.edit_selected(|field, current| match field.kind {
                FieldKind::Choice(_) => None,
                _ => {
                    let mut next = current.to_string();
                    next.pop();
                    Some(next)
                }
            }),
            KeyCode::Char(c) => self.edit_selected(|field, current| match field.kind {
                FieldKind::Choice(_) => None,
                _ => Some(format!("{}{}", current, c)),
            }),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn switch_view(&mut self, view: View) {
        self.view = view;
        self.selected_field = 0;
    }

    fn edit_selected(&mut self, edit: impl FnOnce(&Field, &str) -> Option<String>) {
        if !self.inputs_enabled() {
            return;
        }

        let index = self.selected_field;
        let form = self.form_mut(self.view);
        let Some(field) = form.fields().get(index).copied() else {
            return;
        };
        let current = form.values().get(index).cloned().unwrap_or_default();

        if let Some(next) = edit(&field, &current) {
            if let Err(e) = form.set_field(field.name, &next) {
                tracing::warn!("Could not edit {}: {}", field.name, e);
            }
        }
    }

    fn cycle_choice(&mut self, forward: bool) {
        self.edit_selected(|field, current| {
            let FieldKind::Choice(options) = field.kind else {
                return None;
            };
            if options.is_empty() {
                return None;
            }

            let position = options
                .iter()
                .position(|o| o.eq_ignore_ascii_case(current))
                .unwrap_or(0);
            let next = if forward {
                (position + 1) % options.len()
            } else {
                (position + options.len() - 1) % options.len()
            };
            Some(options[next].to_string())
        });
    }

    /// Start a write for the current view; ignored while one is in flight
    fn submit(&mut self) {
        match self.view {
            View::Exercise => {
                if let Some(body) = self.exercise.form.begin_submit() {
                    self.spawn_write(View::Exercise, ExerciseForm::ENDPOINT, body);
                }
            }
            View::Goals => {
                if let Some(body) = self.goals.form.begin_submit() {
                    self.spawn_write(View::Goals, GoalForm::ENDPOINT, body);
                }
            }
            View::Progress => {
                if let Some(body) = self.progress.form.begin_submit() {
                    self.spawn_write(View::Progress, ProgressForm::ENDPOINT, body);
                }
            }
            View::NutritionGoals => {
                if let Some(body) = self.nutrition_goals.form.begin_submit() {
                    self.spawn_write(View::NutritionGoals, NutritionGoalForm::ENDPOINT, body);
                }
            }
            View::FoodLog => {
                if let Some(body) = self.food_log.form.begin_submit() {
                    self.spawn_write(View::FoodLog, FoodLogForm::ENDPOINT, body);
                }
            }
            View::Profile => {
                if let Some(body) = self.profile.begin_submit() {
                    self.spawn_write(View::Profile, ProfileForm::ENDPOINT, body);
                }
            }
        }
    }
}
