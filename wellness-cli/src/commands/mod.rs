mod config_cmd;
mod dashboard;
mod exercise;
mod goals;
mod history;
mod login;
mod logout;
mod nutrition;
mod profile;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::api::{ApiClient, ApiError};
use crate::chart::{self, ChartView};
use crate::config::{Config, API_URL_ENV};
use crate::form::{format_number, FormController, FormSpec, NotificationSurface, Outcome};

pub use dashboard::DashboardCommand;
pub use exercise::{ExerciseLogCommand, ExerciseSubcommands};
pub use goals::{GoalsSubcommands, ProgressCommand, SetGoalsCommand};
pub use history::HistoryCommand;
pub use login::{LoginCommand, RegisterCommand};
pub use logout::LogoutCommand;
pub use nutrition::{FoodLogCommand, NutritionGoalsCommand, NutritionSubcommands};
pub use profile::{ProfileEditCommand, ProfileSubcommands};

#[derive(Parser)]
#[command(name = "wellness")]
#[command(about = "Terminal client for the Health and Wellness tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "WELLNESS_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the wellness API (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and save the session
    Login(LoginCommand),

    /// Create an account
    Register(RegisterCommand),

    /// Forget the saved session
    Logout(LogoutCommand),

    /// Log and list exercise sessions
    #[command(subcommand)]
    Exercise(ExerciseSubcommands),

    /// Set fitness goals and record progress
    #[command(subcommand)]
    Goals(GoalsSubcommands),

    /// Set nutrition goals and log food
    #[command(subcommand)]
    Nutrition(NutritionSubcommands),

    /// Show or edit your profile
    #[command(subcommand)]
    Profile(ProfileSubcommands),

    /// Show your health history
    History(HistoryCommand),

    /// Launch interactive dashboard
    Dashboard(DashboardCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The dashboard owns the terminal, so it logs nothing by default
    pub fn is_dashboard(&self) -> bool {
        matches!(self.command, Commands::Dashboard(_))
    }

    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Commands::Completions { shell } = self.command {
            generate_completions(shell);
            return Ok(());
        }

        let mut ctx = CommandContext::load(self.config, self.api_url)?;

        match self.command {
            Commands::Login(cmd) => cmd.execute(&mut ctx).await,
            Commands::Register(cmd) => cmd.execute(&mut ctx).await,
            Commands::Logout(cmd) => cmd.execute(&mut ctx).await,
            Commands::Exercise(subcmd) => match subcmd {
                ExerciseSubcommands::Log(cmd) => cmd.execute(&mut ctx).await,
                ExerciseSubcommands::List => exercise::list_exercises(&mut ctx).await,
            },
            Commands::Goals(subcmd) => match subcmd {
                GoalsSubcommands::Set(cmd) => cmd.execute(&mut ctx).await,
                GoalsSubcommands::Progress(cmd) => cmd.execute(&mut ctx).await,
            },
            Commands::Nutrition(subcmd) => match subcmd {
                NutritionSubcommands::Goals(cmd) => cmd.execute(&mut ctx).await,
                NutritionSubcommands::Log(cmd) => cmd.execute(&mut ctx).await,
            },
            Commands::Profile(subcmd) => match subcmd {
                ProfileSubcommands::Show => profile::show_profile(&mut ctx).await,
                ProfileSubcommands::Edit(cmd) => cmd.execute(&mut ctx).await,
            },
            Commands::History(cmd) => cmd.execute(&mut ctx).await,
            Commands::Dashboard(cmd) => cmd.execute(&mut ctx).await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&ctx).await,
                ConfigSubcommands::Edit => config_cmd::edit_config(&ctx).await,
                ConfigSubcommands::Init { force } => config_cmd::init_config(&ctx, force).await,
            },
            Commands::Completions { .. } => Ok(()),
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Configuration and session shared by every command
pub struct CommandContext {
    config: Config,
}

impl CommandContext {
    pub fn load(config_path: Option<PathBuf>, api_url: Option<String>) -> Result<Self> {
        let mut config = Config::load(config_path.as_deref())?;
        config.override_base_url(api_url, std::env::var(API_URL_ENV).ok());
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config)
    }

    /// Drop the saved token once the server has rejected it
    pub fn forget_rejected_session(&mut self, client: &ApiClient, error: &ApiError) -> Result<()> {
        if !error.is_unauthorized() || !self.config.is_authenticated() {
            return Ok(());
        }

        tracing::warn!("Session token rejected by the server, clearing it");
        client.clear_token();
        self.config.clear_token();
        self.config.save()?;
        println!("{}", "Your session has expired. Run `wellness login` again.".yellow());
        Ok(())
    }
}

pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.into());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Print the notification a submission left behind. An error fails the command.
pub(crate) fn report(notifications: &NotificationSurface) -> Result<()> {
    match notifications.current() {
        Some(n) if n.is_error() => {
            println!("{} {}", "✗".red(), n.message.red());
            bail!("{}", n.message)
        }
        Some(n) => {
            println!("{} {}", "✓".green(), n.message);
            Ok(())
        }
        None => Ok(()),
    }
}

/// Run one submission with a spinner and report its outcome
pub(crate) async fn submit_form<S: FormSpec>(
    ctx: &mut CommandContext,
    client: &ApiClient,
    form: &mut FormController<S>,
) -> Result<Outcome<S::Record>> {
    let Some(payload) = form.begin_submit() else {
        report(form.notifications())?;
        return Ok(Outcome::Failed);
    };

    let progress = spinner(format!("Sending to {}...", S::ENDPOINT.path));
    let result = client.write(S::ENDPOINT, &payload).await;
    progress.finish_and_clear();

    if let Err(e) = &result {
        if S::ENDPOINT.authenticated {
            ctx.forget_rejected_session(client, e)?;
        }
    }

    let outcome = form.finish_submit(result);
    report(form.notifications())?;
    Ok(outcome)
}

const CHART_WIDTH: u64 = 40;

/// Print a chart as horizontal bars, one block per dataset
pub(crate) fn print_chart(view: &ChartView) {
    let chart = match view {
        ChartView::Placeholder(text) => {
            println!("{}", text.dimmed());
            return;
        }
        ChartView::Chart(chart) => chart,
    };

    println!("{}", chart.title.bold());
    for dataset in &chart.datasets {
        println!();
        println!("{}", dataset.label);

        let values = chart::bar_values(dataset);
        let max = values.iter().copied().max().unwrap_or(0).max(1);
        let width = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0);

        for ((label, value), raw) in chart.labels.iter().zip(&values).zip(&dataset.values) {
            let bar = "█".repeat((value * CHART_WIDTH / max) as usize);
            println!("  {:>width$} {} {}", label, bar.cyan(), format_number(*raw));
        }
    }
}

/// Fill inputs from command-line flags, leaving the rest at their defaults
pub(crate) fn apply_flags<S: FormSpec>(
    form: &mut FormController<S>,
    flags: &[(&str, Option<String>)],
) -> Result<()> {
    for (name, value) in flags {
        if let Some(value) = value {
            form.set_field(name, value)?;
        }
    }
    Ok(())
}
