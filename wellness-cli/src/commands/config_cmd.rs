use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

use super::CommandContext;
use crate::config::Config;

pub async fn show_config(ctx: &CommandContext) -> Result<()> {
    let mut config = ctx.config().clone();
    if config.is_authenticated() {
        config.set_token("<saved>".to_string());
    }
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration ({})", ctx.config().file()?.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub async fn edit_config(ctx: &CommandContext) -> Result<()> {
    let config_file = ctx.config().file()?;

    // Ensure config file exists
    if !config_file.exists() {
        Config::defaults_at(config_file.clone()).save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

    let status = Command::new(&editor)
        .arg(&config_file)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;

    if status.success() {
        Config::load(Some(&config_file)).context("Edited configuration is not valid")?;
        println!("{} Configuration saved!", "✓".green());
    }

    Ok(())
}

pub async fn init_config(ctx: &CommandContext, force: bool) -> Result<()> {
    let config_file = ctx.config().file()?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::defaults_at(config_file.clone()).save()?;

    println!("{} Configuration initialized at: {}", "✓".green(), config_file.display());
    println!();
    println!("You can edit it with: wellness config edit");

    Ok(())
}
