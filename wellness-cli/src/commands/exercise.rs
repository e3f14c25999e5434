use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{Input, Select};

use super::{apply_flags, print_chart, report, spinner, submit_form, CommandContext};
use crate::api::ApiClient;
use crate::form::format_number;
use crate::models::ExerciseType;
use crate::screens::ExerciseScreen;

#[derive(Subcommand)]
pub enum ExerciseSubcommands {
    /// Log an exercise session
    Log(ExerciseLogCommand),

    /// List logged sessions with a calories chart
    List,
}

#[derive(Args)]
pub struct ExerciseLogCommand {
    /// Running, Cycling or Strength Training (prompted when omitted)
    #[arg(short = 't', long = "type", value_parser = canonical_exercise_type)]
    exercise_type: Option<String>,

    /// Duration in minutes (prompted when omitted)
    #[arg(short, long)]
    duration: Option<String>,

    /// Distance covered
    #[arg(long)]
    distance: Option<String>,
}

impl ExerciseLogCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        println!("Log Exercise");
        println!();

        let exercise_type = match self.exercise_type {
            Some(t) => t,
            None => {
                let choice = Select::new()
                    .with_prompt("Exercise type")
                    .items(ExerciseType::OPTIONS)
                    .default(0)
                    .interact()?;
                ExerciseType::OPTIONS[choice].to_string()
            }
        };
        let duration = match self.duration {
            Some(d) => d,
            None => Input::new().with_prompt("Duration (minutes)").interact_text()?,
        };

        let mut screen = ExerciseScreen::new();
        apply_flags(
            &mut screen.form,
            &[
                ("exerciseType", Some(exercise_type)),
                ("duration", Some(duration)),
                ("distance", self.distance),
            ],
        )?;

        let client = ctx.client()?;
        let outcome = submit_form(ctx, &client, &mut screen.form).await?;

        if outcome.is_saved() {
            println!();
            refresh(ctx, &client, &mut screen).await?;
            print_logs(&screen);
        }

        Ok(())
    }
}

pub async fn list_exercises(ctx: &mut CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let mut screen = ExerciseScreen::new();

    refresh(ctx, &client, &mut screen).await?;
    print_logs(&screen);

    Ok(())
}

async fn refresh(ctx: &mut CommandContext, client: &ApiClient, screen: &mut ExerciseScreen) -> Result<()> {
    let progress = spinner("Fetching exercise logs...");
    let result = client.list_exercises().await;
    progress.finish_and_clear();

    if let Err(e) = &result {
        ctx.forget_rejected_session(client, e)?;
    }

    if !screen.apply_logs(result) {
        report(screen.form.notifications())?;
    }
    Ok(())
}

fn print_logs(screen: &ExerciseScreen) {
    if !screen.logs.is_empty() {
        println!("Exercise Logs");
        println!("────────────────────────────────────────────────");
        println!("{:<20} {:>10} {:>10} {:>10}", "Type", "Minutes", "Distance", "Calories");
        for entry in screen.logs.items() {
            println!(
                "{:<20} {:>10} {:>10} {:>10}",
                entry.exercise_type.as_str(),
                format_number(entry.duration),
                format_number(entry.distance),
                format_number(entry.calories_burned),
            );
        }
        println!();
    }

    print_chart(&screen.chart());
}

/// Accept `running`, `CYCLING` or `strength-training` on the command line and
/// send the canonical name. Unknown types pass through untouched.
fn canonical_exercise_type(raw: &str) -> Result<String, String> {
    let folded = raw.trim().to_lowercase().replace(['_', '-'], " ");
    let known = ExerciseType::OPTIONS
        .iter()
        .find(|option| option.to_lowercase() == folded);
    Ok(known.map_or_else(|| raw.to_string(), |option| option.to_string()))
}
