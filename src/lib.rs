pub mod cli;
pub mod commands;
pub mod modules;
pub mod shared;

use cli::Cli;
use commands::{execute, AppContext};
use modules::{
    auth::{AuthGateway, AuthService, SessionGateway},
    render::{OutputOptions, Presenter},
    search::{SearchBackend, SearchService},
};
use shared::{
    utils::{init_logger, SearchThrottle},
    AppConfig, AppResult, OnionApiClient,
};
use std::process::ExitCode;
use std::sync::Arc;

/// Wire the services together and run one command line.
///
/// Configuration and setup failures are returned; failures of the command
/// itself are printed localized and reported through the exit code.
pub async fn run(cli: Cli) -> AppResult<ExitCode> {
    init_logger();

    let mut config = AppConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    log::info!("Using backend at {} ({})", config.base_url, config.locale);

    // One client, so the session cookie is shared between login and search
    let client = Arc::new(OnionApiClient::new(&config)?);
    let auth_gateway: Arc<dyn AuthGateway> = client.clone();
    let session: Arc<dyn SessionGateway> = client.clone();
    let backend: Arc<dyn SearchBackend> = client;

    let auth_service = Arc::new(AuthService::new(
        auth_gateway,
        Arc::clone(&session),
        config.locale,
    ));
    let throttle = SearchThrottle::per_minute(config.searches_per_minute);
    log::debug!("Search quota: {} per minute", throttle.per_minute_quota());
    let search_service = Arc::new(SearchService::new(
        session,
        backend,
        throttle,
        config.locale,
    ));

    let options = OutputOptions {
        json: cli.json,
        html: cli.html,
        color: !cli.no_color,
    };
    let presenter = Arc::new(Presenter::new(options, config.locale)?);

    let ctx = AppContext {
        auth_service,
        search_service,
        presenter: Arc::clone(&presenter),
    };

    match execute(cli.command, &ctx).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            log::debug!("Command failed: {:?}", err);
            eprintln!("{}", presenter.error(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}
