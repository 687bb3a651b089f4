//! armor profile command

use clap::{Args, Subcommand};
use console::style;

use crate::context::AppContext;
use crate::output::{render_json, render_profile, render_summaries};

#[derive(Debug, Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
    /// List all profiles
    List,
    /// Create a new profile
    Create {
        /// Profile name
        name: String,
        /// Short description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show a profile with its completeness
    Show {
        /// Profile ID
        id: String,
    },
    /// Delete a profile
    Delete {
        /// Profile ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl ProfileCommand {
    pub async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        match &self.command {
            ProfileSubcommand::List => {
                let profiles = ctx.client.list_profiles().await?;
                if ctx.json {
                    println!("{}", render_json(&profiles)?);
                } else {
                    print!("{}", render_summaries(&profiles));
                }
            }
            ProfileSubcommand::Create { name, description } => {
                let profile = ctx
                    .client
                    .create_profile(name, description.as_deref())
                    .await?;
                if ctx.json {
                    println!("{}", render_json(&profile)?);
                } else {
                    println!(
                        "{} Created profile '{}' ({})",
                        style("✓").green(),
                        profile.name,
                        profile.id
                    );
                }
            }
            ProfileSubcommand::Show { id } => {
                let profile = ctx.client.get_profile(id).await?;
                if ctx.json {
                    println!("{}", render_json(&profile)?);
                } else {
                    println!("{}", render_profile(&profile));
                }
            }
            ProfileSubcommand::Delete { id, yes } => {
                if !yes && !confirm_delete(id)? {
                    println!("Aborted");
                    return Ok(());
                }
                ctx.client.delete_profile(id).await?;
                if !ctx.json {
                    println!("{} Deleted profile {}", style("✓").green(), id);
                }
            }
        }
        Ok(())
    }
}

fn confirm_delete(id: &str) -> anyhow::Result<bool> {
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Delete profile {}? This cannot be undone", id))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
