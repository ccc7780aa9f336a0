use super::shell;
use crate::cli::Commands;
use crate::modules::{
    auth::{commands as auth_commands, AuthService},
    render::Presenter,
    search::{commands as search_commands, SearchService},
};
use crate::shared::errors::AppResult;
use std::sync::Arc;

/// Services every command handler can reach
#[derive(Clone)]
pub struct AppContext {
    pub auth_service: Arc<AuthService>,
    pub search_service: Arc<SearchService>,
    pub presenter: Arc<Presenter>,
}

/// Single entry point from the parsed command line to the handlers
pub async fn execute(command: Commands, ctx: &AppContext) -> AppResult<()> {
    match command {
        Commands::Search {
            query,
            email,
            password,
        } => {
            if let (Some(email), Some(password)) = (email, password) {
                let output =
                    auth_commands::login(&email, &password, &ctx.auth_service, &ctx.presenter)
                        .await?;
                eprintln!("{}", output);
            }
            let output =
                search_commands::search(&query, &ctx.search_service, &ctx.presenter).await?;
            if let Some(output) = output {
                println!("{}", output);
            }
        }
        Commands::Login { email, password } => {
            let output =
                auth_commands::login(&email, &password, &ctx.auth_service, &ctx.presenter).await?;
            println!("{}", output);
        }
        Commands::Register { email, password } => {
            let output =
                auth_commands::register(&email, &password, &ctx.auth_service, &ctx.presenter)
                    .await?;
            println!("{}", output);
        }
        Commands::Check => {
            println!(
                "{}",
                auth_commands::check(&ctx.auth_service, &ctx.presenter).await?
            );
        }
        Commands::Shell => shell::run(ctx.clone()).await?,
    }
    Ok(())
}
