//! armor login / logout / status

use anyhow::bail;
use clap::Args;
use console::style;
use serde_json::json;

use crate::context::AppContext;
use crate::output::render_json;

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Password to use instead of prompting
    #[arg(long)]
    pub password: Option<String>,
}

impl LoginCommand {
    pub async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let password = match &self.password {
            Some(password) => password.clone(),
            None => prompt_password()?,
        };
        login(ctx, &password).await
    }
}

pub(crate) fn prompt_password() -> anyhow::Result<String> {
    let password = dialoguer::Password::new()
        .with_prompt("ARMOR password")
        .interact()?;
    Ok(password)
}

/// Probe `password` and keep it only if the server accepts it
pub(crate) async fn login(ctx: &AppContext, password: &str) -> anyhow::Result<()> {
    if password.is_empty() {
        bail!("password must not be empty");
    }

    if !ctx.client.check_password(password).await {
        bail!(
            "login failed: password rejected or server unreachable at {}",
            ctx.client.base_url()
        );
    }

    ctx.client.set_credential(password)?;
    println!("{} Logged in to {}", style("✓").green(), ctx.client.base_url());
    Ok(())
}

#[derive(Debug, Default)]
pub struct LogoutCommand;

impl LogoutCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        ctx.client.clear_credential()?;
        println!("{} Logged out", style("✓").green());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct StatusCommand;

impl StatusCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        println!("{}", status_text(ctx)?);
        Ok(())
    }
}

pub(crate) fn status_text(ctx: &AppContext) -> anyhow::Result<String> {
    let authenticated = ctx.client.has_credential();

    if ctx.json {
        return render_json(&json!({
            "baseUrl": ctx.client.base_url(),
            "authenticated": authenticated,
        }));
    }

    let state = if authenticated {
        style("logged in").green().to_string()
    } else {
        style("not logged in").yellow().to_string()
    };
    Ok(format!("Server: {}\nSession: {}", ctx.client.base_url(), state))
}
