use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Input, Password};

use super::{submit_form, CommandContext};
use crate::form::FormController;
use crate::screens::{session_token, LoginForm, RegisterForm};

#[derive(Args)]
pub struct LoginCommand {
    /// Account email (prompted when omitted)
    #[arg(short, long)]
    email: Option<String>,
}

impl LoginCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        println!("Wellness - Login");
        println!();

        let email = match self.email {
            Some(email) => email,
            None => Input::new().with_prompt("Email").interact_text()?,
        };
        let password = Password::new().with_prompt("Password").interact()?;

        let mut form = FormController::<LoginForm>::new();
        form.set_field("email", &email)?;
        form.set_field("password", &password)?;

        let client = ctx.client()?;
        let outcome = submit_form(ctx, &client, &mut form).await?;

        match session_token(&outcome) {
            Some(token) => {
                ctx.config_mut().set_token(token);
                ctx.config().save()?;
                println!();
                println!("Logged in as {}.", email.bold());
            }
            None => {
                tracing::warn!("Login reply carried no token");
                println!(
                    "{}",
                    "The server did not return a session token; authenticated commands will fail."
                        .yellow()
                );
            }
        }

        Ok(())
    }
}

#[derive(Args)]
pub struct RegisterCommand {
    /// Account email (prompted when omitted)
    #[arg(short, long)]
    email: Option<String>,

    /// Username (prompted when omitted)
    #[arg(short, long)]
    username: Option<String>,
}

impl RegisterCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        println!("Wellness - Register");
        println!();

        let username = match self.username {
            Some(username) => username,
            None => Input::new().with_prompt("Username").interact_text()?,
        };
        let email = match self.email {
            Some(email) => email,
            None => Input::new().with_prompt("Email").interact_text()?,
        };
        let password = Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?;

        let mut form = FormController::<RegisterForm>::new();
        form.set_field("username", &username)?;
        form.set_field("email", &email)?;
        form.set_field("password", &password)?;

        let client = ctx.client()?;
        submit_form(ctx, &client, &mut form).await?;

        println!();
        println!("You can now log in with: wellness login --email {}", email);

        Ok(())
    }
}
