use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::CommandContext;
use crate::ui::Dashboard;

#[derive(Args)]
pub struct DashboardCommand {}

impl DashboardCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        if !ctx.config().is_authenticated() {
            println!("You are not logged in; only the forms will work. Run `wellness login` first.");
        }

        let client = Arc::new(ctx.client()?);

        let mut dashboard = Dashboard::new(client)?;
        let result = dashboard.run().await;
        dashboard.cleanup()?;

        result
    }
}
