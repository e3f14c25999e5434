use anyhow::Result;
use clap::{Args, Subcommand};

use super::{apply_flags, print_chart, submit_form, CommandContext};
use crate::screens::{FoodLogScreen, NutritionGoalsScreen};

#[derive(Subcommand)]
pub enum NutritionSubcommands {
    /// Set daily macro goals
    Goals(NutritionGoalsCommand),

    /// Log a food item
    Log(FoodLogCommand),
}

#[derive(Args)]
pub struct NutritionGoalsCommand {
    /// Daily calorie goal (default 2000)
    #[arg(long)]
    calories: Option<String>,

    /// Protein goal in grams (default 100)
    #[arg(long)]
    protein: Option<String>,

    /// Carb goal in grams (default 250)
    #[arg(long)]
    carbs: Option<String>,

    /// Fat goal in grams (default 70)
    #[arg(long)]
    fat: Option<String>,
}

impl NutritionGoalsCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        let mut screen = NutritionGoalsScreen::default();
        apply_flags(
            &mut screen.form,
            &[
                ("calorieGoal", self.calories),
                ("proteinGoal", self.protein),
                ("carbGoal", self.carbs),
                ("fatGoal", self.fat),
            ],
        )?;

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

#[derive(Args)]
pub struct FoodLogCommand {
    /// Food item name
    #[arg(short, long)]
    food: String,

    #[arg(long)]
    calories: Option<String>,

    /// Protein in grams
    #[arg(long)]
    protein: Option<String>,

    /// Carbs in grams
    #[arg(long)]
    carbs: Option<String>,

    /// Fat in grams
    #[arg(long)]
    fat: Option<String>,

    /// breakfast, lunch, dinner or snack
    #[arg(short, long)]
    meal: Option<String>,
}

impl FoodLogCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        let mut screen = FoodLogScreen::default();
        apply_flags(
            &mut screen.form,
            &[
                ("foodName", Some(self.food)),
                ("calories", self.calories),
                ("protein", self.protein),
                ("carbs", self.carbs),
                ("fat", self.fat),
                ("mealType", self.meal),
            ],
        )?;

        let chart = screen.chart();

        let client = ctx.client()?;
        let outcome = submit_form(ctx, &client, &mut screen.form).await?;
        screen.record_outcome(&outcome);

        if outcome.is_saved() {
            println!();
            print_chart(&chart);
        }

        Ok(())
    }
}
