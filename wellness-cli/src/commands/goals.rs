use anyhow::Result;
use clap::{Args, Subcommand};

use super::{apply_flags, print_chart, submit_form, CommandContext};
use crate::screens::{GoalsScreen, ProgressScreen};

#[derive(Subcommand)]
pub enum GoalsSubcommands {
    /// Set daily and weekly goals
    Set(SetGoalsCommand),

    /// Record today's progress
    Progress(ProgressCommand),
}

#[derive(Args)]
pub struct SetGoalsCommand {
    /// Daily steps goal (default 10000)
    #[arg(long)]
    daily_steps: Option<String>,

    /// Weekly workouts goal (default 5)
    #[arg(long)]
    weekly_workouts: Option<String>,

    /// Daily calorie intake goal (default 2000)
    #[arg(long)]
    calorie_intake: Option<String>,
}

impl SetGoalsCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        let mut screen = GoalsScreen::default();
        apply_flags(
            &mut screen.form,
            &[
                ("dailyStepsGoal", self.daily_steps),
                ("weeklyWorkoutsGoal", self.weekly_workouts),
                ("calorieIntakeGoal", self.calorie_intake),
            ],
        )?;

        let client = ctx.client()?;
        submit_form(ctx, &client, &mut screen.form).await?;

        Ok(())
    }
}

#[derive(Args)]
pub struct ProgressCommand {
    /// Steps walked today
    #[arg(long)]
    daily_steps: Option<String>,

    /// Workouts done this week
    #[arg(long)]
    weekly_workouts: Option<String>,

    /// Calories eaten today
    #[arg(long)]
    calorie_intake: Option<String>,
}

impl ProgressCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        let mut screen = ProgressScreen::default();
        apply_flags(
            &mut screen.form,
            &[
                ("dailySteps", self.daily_steps),
                ("weeklyWorkouts", self.weekly_workouts),
                ("calorieIntake", self.calorie_intake),
            ],
        )?;

        // Chart what was entered before the form resets on success
        let chart = screen.chart();

        let client = ctx.client()?;
        let outcome = submit_form(ctx, &client, &mut screen.form).await?;

        if outcome.is_saved() {
            println!();
            print_chart(&chart);
        }

        Ok(())
    }
}
