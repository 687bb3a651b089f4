//! Interactive REPL mode

use shared::{ClientError, Section};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::session::{login, prompt_password, status_text};
use crate::context::AppContext;
use crate::output::{render_json, render_profile, render_summaries, render_validation_errors};

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Empty,
    Quit,
    Help,
    Login(Option<String>),
    Logout,
    Status,
    Profiles,
    Show(String),
    Section(String, Section),
    Usage(&'static str),
    Invalid(String),
    Unknown(String),
}

/// Parse one line of input
pub fn parse_command(input: &str) -> ReplCommand {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let cmd = parts.first().copied().unwrap_or("");

    match cmd {
        "" => ReplCommand::Empty,
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        "/help" | "/h" => ReplCommand::Help,
        "/login" => ReplCommand::Login(parts.get(1).map(|s| s.to_string())),
        "/logout" => ReplCommand::Logout,
        "/status" => ReplCommand::Status,
        "/profiles" | "/ls" => ReplCommand::Profiles,
        "/show" => match parts.get(1) {
            Some(id) => ReplCommand::Show(id.to_string()),
            None => ReplCommand::Usage("/show <profile-id>"),
        },
        "/section" => match (parts.get(1), parts.get(2)) {
            (Some(id), Some(name)) => match name.parse::<Section>() {
                Ok(section) => ReplCommand::Section(id.to_string(), section),
                Err(e) => ReplCommand::Invalid(e.to_string()),
            },
            _ => ReplCommand::Usage("/section <profile-id> <section>"),
        },
        other => ReplCommand::Unknown(other.to_string()),
    }
}

/// Interactive session against one server
pub struct InteractiveCli {
    ctx: AppContext,
}

impl InteractiveCli {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    fn prompt(&self) -> String {
        let state = if self.ctx.client.has_credential() {
            "logged in"
        } else {
            "logged out"
        };
        format!("[{}] armor> ", state)
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("ARMOR Interactive Mode ({})", self.ctx.client.base_url());
        println!("Type /help for commands, /quit to exit");
        println!();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{}", self.prompt());
            io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match self.handle_command(parse_command(line.trim())).await {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => report_error(&e),
            }
        }

        Ok(())
    }

    async fn handle_command(&mut self, command: ReplCommand) -> anyhow::Result<bool> {
        match command {
            ReplCommand::Empty => {}
            ReplCommand::Quit => {
                println!("Goodbye!");
                return Ok(true);
            }
            ReplCommand::Help => {
                println!("Commands:");
                println!("  /login [password]        - Log in (prompts when no password given)");
                println!("  /logout                  - Forget the stored password");
                println!("  /status                  - Show server and session");
                println!("  /profiles                - List profiles");
                println!("  /show <id>               - Show a profile");
                println!("  /section <id> <section>  - Print a section's data");
                println!("  /quit                    - Exit");
            }
            ReplCommand::Login(password) => {
                let password = match password {
                    Some(p) => p,
                    None => prompt_password()?,
                };
                login(&self.ctx, &password).await?;
            }
            ReplCommand::Logout => {
                self.ctx.client.clear_credential()?;
                println!("Logged out");
            }
            ReplCommand::Status => println!("{}", status_text(&self.ctx)?),
            ReplCommand::Profiles => {
                let profiles = self.ctx.client.list_profiles().await?;
                print!("{}", render_summaries(&profiles));
            }
            ReplCommand::Show(id) => {
                let profile = self.ctx.client.get_profile(&id).await?;
                println!("{}", render_profile(&profile));
            }
            ReplCommand::Section(id, section) => {
                let data = self.ctx.client.get_section(&id, section).await?;
                println!("{}", render_json(&data.data)?);
            }
            ReplCommand::Usage(usage) => println!("Usage: {}", usage),
            ReplCommand::Invalid(message) => println!("{}", message),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {} (type /help for commands)", cmd);
            }
        }

        Ok(false)
    }
}

/// Print an error with a login hint where one applies
pub fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {}", err);
    if let Some(client_err) = err.downcast_ref::<ClientError>() {
        if client_err.requires_login() {
            eprintln!("Hint: run `armor login` (or /login) first");
        }
        if let ClientError::RequestFailed { errors, .. } = client_err {
            eprint!("{}", render_validation_errors(errors));
        }
    }
}
