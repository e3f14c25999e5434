use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{report, spinner, CommandContext};
use crate::form::format_number;
use crate::screens::ProfileScreen;

#[derive(Args)]
pub struct HistoryCommand {}

impl HistoryCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        let client = ctx.client()?;
        let mut screen = ProfileScreen::new();

        let progress = spinner("Fetching health history...");
        let result = client.fetch_tracking().await;
        progress.finish_and_clear();

        if let Err(e) = &result {
            ctx.forget_rejected_session(&client, e)?;
        }
        if !screen.apply_history(result) {
            return report(screen.form.notifications());
        }

        println!("{}", "Health History".bold());
        println!("────────────────────────────────────────────────────────────");

        if screen.history.is_empty() {
            println!("{}", "No health data available.".dimmed());
            return Ok(());
        }

        for record in screen.history.items() {
            let calories = record
                .calories
                .map(format_number)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<12} {:<24} {:>8} kcal  {}",
                record.date, record.exercise, calories, record.nutrition
            );
        }

        Ok(())
    }
}
