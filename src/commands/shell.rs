use super::registry::AppContext;
use crate::modules::{auth::commands as auth_commands, search::commands as search_commands};
use crate::shared::errors::AppResult;
use log::info;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "onion> ";

const HELP: &str = "\
Commands:
  login <email> <password>     log in to the backend
  register <email> <password>  create an account
  logout                       end the session
  whoami                       show the signed-in user
  help                         show this message
  quit                         leave the shell
Anything else is searched as an IP address, phone number or email.";

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { email: String, password: String },
    Register { email: String, password: String },
    Logout,
    Whoami,
    Help,
    Quit,
    Search(String),
    /// A keyword with the wrong arguments
    Usage(&'static str),
    Blank,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return ShellCommand::Blank;
        };
        let args: Vec<&str> = words.collect();

        match (head.to_lowercase().as_str(), args.as_slice()) {
            ("login", [email, password]) => ShellCommand::Login {
                email: email.to_string(),
                password: password.to_string(),
            },
            ("login", _) => ShellCommand::Usage("login <email> <password>"),
            ("register", [email, password]) => ShellCommand::Register {
                email: email.to_string(),
                password: password.to_string(),
            },
            ("register", _) => ShellCommand::Usage("register <email> <password>"),
            ("logout", []) => ShellCommand::Logout,
            ("whoami", []) => ShellCommand::Whoami,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit", []) => ShellCommand::Quit,
            _ => ShellCommand::Search(line.to_string()),
        }
    }
}

/// Read commands from stdin until `quit` or end of input.
///
/// Searches run on their own tasks; a newer one supersedes any still in flight.
pub async fn run(ctx: AppContext) -> AppResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", HELP);

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match ShellCommand::parse(&line) {
            ShellCommand::Search(query) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    let outcome =
                        search_commands::search(&query, &ctx.search_service, &ctx.presenter).await;
                    match outcome {
                        Ok(Some(output)) => println!("{}", output),
                        Ok(None) => {}
                        Err(err) => eprintln!("{}", ctx.presenter.error(&err)),
                    }
                });
            }
            ShellCommand::Login { email, password } => report(
                &ctx,
                auth_commands::login(&email, &password, &ctx.auth_service, &ctx.presenter).await,
            ),
            ShellCommand::Register { email, password } => report(
                &ctx,
                auth_commands::register(&email, &password, &ctx.auth_service, &ctx.presenter)
                    .await,
            ),
            ShellCommand::Logout => report(
                &ctx,
                auth_commands::logout(&ctx.auth_service, &ctx.search_service, &ctx.presenter).await,
            ),
            ShellCommand::Whoami => {
                println!("{}", auth_commands::whoami(&ctx.auth_service, &ctx.presenter).await)
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Usage(usage) => println!("{}", ctx.presenter.notice(usage)),
            ShellCommand::Quit => break,
            ShellCommand::Blank => {}
        }
    }

    ctx.search_service.reset().await;
    info!("Shell closed");
    Ok(())
}

fn report(ctx: &AppContext, outcome: AppResult<String>) {
    match outcome {
        Ok(output) => println!("{}", output),
        Err(err) => eprintln!("{}", ctx.presenter.error(&err)),
    }
}
