//! armor section command

use anyhow::{bail, Context};
use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use shared::Section;
use std::path::{Path, PathBuf};

use crate::context::AppContext;
use crate::output::render_json;

#[derive(Debug, Args)]
pub struct SectionCommand {
    #[command(subcommand)]
    pub command: SectionSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum SectionSubcommand {
    /// Print a section's data
    Get {
        /// Profile ID
        id: String,
        /// mission, assets, adversaries, threats, risks or mitigations
        section: Section,
    },
    /// Replace a section's data
    Set {
        /// Profile ID
        id: String,
        /// mission, assets, adversaries, threats, risks or mitigations
        section: Section,
        /// Inline JSON payload
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,
        /// Read the JSON payload from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl SectionCommand {
    pub async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        match &self.command {
            SectionSubcommand::Get { id, section } => {
                let section = ctx.client.get_section(id, *section).await?;
                if ctx.json {
                    println!("{}", render_json(&section)?);
                } else {
                    println!("{}", render_json(&section.data)?);
                }
            }
            SectionSubcommand::Set {
                id,
                section,
                data,
                file,
            } => {
                let payload = read_payload(data.as_deref(), file.as_deref())?;
                let update = ctx.client.update_section(id, *section, &payload).await?;
                if ctx.json {
                    println!("{}", render_json(&update)?);
                } else if update.success {
                    println!("{} Updated {} of {}", style("✓").green(), section, id);
                } else {
                    bail!("server did not accept the {} update", section);
                }
            }
        }
        Ok(())
    }
}

/// Parse the section payload from `--data` or `--file`
pub fn read_payload(data: Option<&str>, file: Option<&Path>) -> anyhow::Result<Value> {
    let (raw, source) = match (data, file) {
        (Some(data), None) => (data.to_string(), "--data".to_string()),
        (None, Some(path)) => (
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        (Some(_), Some(_)) => bail!("use either --data or --file, not both"),
        (None, None) => bail!("a payload is required: pass --data <json> or --file <path>"),
    };

    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", source))
}
