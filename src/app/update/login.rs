//! Login and logout message handlers

use std::sync::Arc;

use iced::Task;

use crate::app::{ModSync, Screen};
use crate::config::StoredCredentials;
use crate::message::{LoginMessage, Message};
use crate::views::toast::Toast;

pub fn handle_login(app: &mut ModSync, msg: LoginMessage) -> Task<Message> {
    match msg {
        LoginMessage::FieldChanged(field, value) => {
            app.login.set_field(field, value);
            Task::none()
        }
        LoginMessage::PasswordChanged(password) => {
            app.login.password = password;
            app.login.error = None;
            Task::none()
        }
        LoginMessage::RememberToggled => {
            app.login.remember = !app.login.remember;
            Task::none()
        }
        LoginMessage::Submit => {
            if app.login.connecting {
                return Task::none();
            }
            match app.login.to_session() {
                Ok(session) => {
                    let remember = app.login.remember;
                    app.connect(Arc::new(session), remember)
                }
                Err(e) => {
                    tracing::debug!("Login form rejected: {}", e);
                    app.login.error = Some(e.message);
                    Task::none()
                }
            }
        }
        LoginMessage::Connected {
            session,
            remember,
            result,
        } => {
            app.login.connecting = false;
            match result {
                Ok(()) => {
                    tracing::info!("Logged in to {}", session.address());
                    remember_login(app, &session, remember);
                    app.session = Some(session);
                    app.screen = Screen::Main;
                    app.refresh()
                }
                Err(e) => {
                    tracing::error!("Login to {} failed: {}", session.address(), e);
                    app.login.error = Some(e);
                    Task::none()
                }
            }
        }
        LoginMessage::Logout => {
            if app.batch.is_busy() {
                app.toast_manager
                    .push(Toast::warning("Wait for the download to finish"));
                return Task::none();
            }
            if let Err(e) = StoredCredentials::clear() {
                tracing::error!("Failed to forget login: {}", e);
            }
            app.login.remember = false;
            app.logout();
            Task::none()
        }
    }
}

/// Persist or forget the login depending on the checkbox
fn remember_login(app: &mut ModSync, session: &crate::config::SessionConfig, remember: bool) {
    let result = if remember {
        StoredCredentials::from_session(session).save()
    } else {
        StoredCredentials::clear()
    };

    if let Err(e) = result {
        tracing::error!("Failed to update remembered login: {}", e);
        app.toast_manager
            .push(Toast::error(format!("Could not save login: {}", e)));
    }
}
