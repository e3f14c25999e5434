use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use super::{apply_flags, report, spinner, CommandContext};
use crate::api::ApiClient;
use crate::form::{FormSpec, Outcome};
use crate::models::UserProfile;
use crate::screens::{ProfileForm, ProfileScreen};

#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Show your profile
    Show,

    /// Change profile fields
    Edit(ProfileEditCommand),
}

#[derive(Args)]
pub struct ProfileEditCommand {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Prompt for a new password
    #[arg(long)]
    password: bool,

    /// metric or imperial
    #[arg(long)]
    unit: Option<String>,

    /// maintain, lose or gain
    #[arg(long)]
    goal: Option<String>,
}

pub async fn show_profile(ctx: &mut CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let mut screen = ProfileScreen::new();

    load_profile(ctx, &client, &mut screen).await?;

    let profile = screen.form.form().record()?;
    print_profile(&profile);

    Ok(())
}

impl ProfileEditCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        let client = ctx.client()?;
        let mut screen = ProfileScreen::new();

        load_profile(ctx, &client, &mut screen).await?;
        screen.set_editing(true);

        let password = if self.password {
            Some(
                Password::new()
                    .with_prompt("New password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?,
            )
        } else {
            None
        };

        let changes = [
            ("name", self.name),
            ("email", self.email),
            ("password", password),
            ("preferences.unit", self.unit),
            ("preferences.goal", self.goal),
        ];
        if changes.iter().all(|(_, value)| value.is_none()) {
            println!("Nothing to change. Pass --name, --email, --password, --unit or --goal.");
            return Ok(());
        }
        apply_flags(&mut screen.form, &changes)?;

        let Some(payload) = screen.begin_submit() else {
            return report(screen.form.notifications());
        };

        let progress = spinner("Saving profile...");
        let result = client.write(ProfileForm::ENDPOINT, &payload).await;
        progress.finish_and_clear();

        if let Err(e) = &result {
            ctx.forget_rejected_session(&client, e)?;
        }

        let outcome = screen.finish_submit(result);
        report(screen.form.notifications())?;

        if let Outcome::Saved { record, .. } = outcome {
            println!();
            print_profile(&record);
        }

        Ok(())
    }
}

async fn load_profile(ctx: &mut CommandContext, client: &ApiClient, screen: &mut ProfileScreen) -> Result<()> {
    let progress = spinner("Fetching profile...");
    let result = client.fetch_profile().await;
    progress.finish_and_clear();

    if let Err(e) = &result {
        ctx.forget_rejected_session(client, e)?;
    }

    if !screen.apply_profile(result) {
        report(screen.form.notifications())?;
    }
    Ok(())
}

fn print_profile(profile: &UserProfile) {
    println!("{}", "Profile".bold());
    println!("────────────────────────────────");
    println!("Name:     {}", profile.name);
    println!("Email:    {}", profile.email);
    println!("Password: ********");
    println!("Units:    {}", profile.preferences.unit.as_str());
    println!("Goal:     {}", profile.preferences.goal.description());
}
