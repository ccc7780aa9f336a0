use super::application::service::AuthService;
use crate::modules::render::Presenter;
use crate::modules::search::SearchService;
use crate::shared::domain::value_objects::Message;
use crate::shared::errors::AppResult;
use log::debug;

pub async fn login(
    email: &str,
    password: &str,
    auth_service: &AuthService,
    presenter: &Presenter,
) -> AppResult<String> {
    debug!("login command called - email: {}", email);

    let message = auth_service.login(email, password).await?;
    Ok(presenter.success(&confirmation(presenter, message, Message::LoginSucceeded)))
}

pub async fn register(
    email: &str,
    password: &str,
    auth_service: &AuthService,
    presenter: &Presenter,
) -> AppResult<String> {
    debug!("register command called - email: {}", email);

    let message = auth_service.register(email, password).await?;
    Ok(presenter.success(&confirmation(presenter, message, Message::Registered)))
}

/// Ends the session and resets the search view
pub async fn logout(
    auth_service: &AuthService,
    search_service: &SearchService,
    presenter: &Presenter,
) -> AppResult<String> {
    auth_service.logout().await?;
    search_service.reset().await;
    Ok(presenter.success(presenter.locale().text(Message::LoggedOut)))
}

pub async fn check(auth_service: &AuthService, presenter: &Presenter) -> AppResult<String> {
    let locale = presenter.locale();
    if auth_service.is_logged_in().await? {
        Ok(presenter.success(&signed_in(auth_service, presenter).await))
    } else {
        Ok(presenter.notice(locale.text(Message::NotSignedIn)))
    }
}

pub async fn whoami(auth_service: &AuthService, presenter: &Presenter) -> String {
    presenter.notice(&signed_in(auth_service, presenter).await)
}

async fn signed_in(auth_service: &AuthService, presenter: &Presenter) -> String {
    let locale = presenter.locale();
    let user = auth_service
        .current_user()
        .await
        .unwrap_or_else(|| locale.text(Message::Guest).to_string());
    format!("{} {}", locale.text(Message::SignedInAs), user)
}

fn confirmation(presenter: &Presenter, message: String, fallback: Message) -> String {
    if message.trim().is_empty() {
        presenter.locale().text(fallback).to_string()
    } else {
        message
    }
}
