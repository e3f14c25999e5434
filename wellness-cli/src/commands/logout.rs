use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CommandContext;

#[derive(Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        if !ctx.config().is_authenticated() {
            println!("You are not logged in.");
            return Ok(());
        }

        ctx.config_mut().clear_token();
        ctx.config().save()?;
        tracing::info!("Cleared saved session");

        println!("{} Logged out successfully!", "✓".green());

        Ok(())
    }
}
