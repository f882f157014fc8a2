//! Login screen

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{SessionConfig, SettingsConfig, StoredCredentials};
use crate::message::{LoginField, LoginMessage, Message};
use crate::theme::{BORDER_RADIUS, Theme};
use crate::validation::{
    ValidationError, validate_hostname, validate_password, validate_port, validate_username,
};

use super::common::{input_style, panel_style, primary_button_style, secondary_button_style};

/// State of the login form
#[derive(Debug, Clone)]
pub struct LoginState {
    pub host: String,
    pub port: String,
    pub username: String,
    /// Sensitive - cleared on logout
    pub password: SecretString,
    pub remember: bool,
    pub connecting: bool,
    pub error: Option<String>,
}

impl LoginState {
    pub fn new(settings: &SettingsConfig) -> Self {
        Self {
            host: settings.default_host.clone(),
            port: settings.default_port.to_string(),
            username: String::new(),
            password: SecretString::from(String::new()),
            remember: false,
            connecting: false,
            error: None,
        }
    }

    /// Fill the form from a remembered record
    pub fn prefill(&mut self, stored: &StoredCredentials, session: &SessionConfig) {
        self.host = stored.host.clone();
        self.port = stored.port.to_string();
        self.username = stored.user.clone();
        self.password = session.password.clone();
        self.remember = true;
    }

    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Host => self.host = value,
            LoginField::Port => self.port = value,
            LoginField::Username => self.username = value,
        }
        self.error = None;
    }

    pub fn clear_password(&mut self) {
        self.password = SecretString::from(String::new());
    }

    /// Validate the form and build session parameters from it
    pub fn to_session(&self) -> Result<SessionConfig, ValidationError> {
        let host = self.host.trim();
        let username = self.username.trim();
        validate_hostname(host)?;
        let port = validate_port(self.port.trim())?;
        validate_username(username)?;
        validate_password(self.password.expose_secret())?;

        Ok(SessionConfig::new(
            host,
            port,
            username,
            self.password.expose_secret(),
        ))
    }
}

pub fn login_view(state: &LoginState, theme: Theme) -> Element<'static, Message> {
    let title = text("Mod Sync").size(24).color(theme.text_primary);
    let subtitle = text("Sign in to the mods server")
        .size(14)
        .color(theme.text_secondary);

    let field = |label: &'static str, input: Element<'static, Message>| -> Element<'static, Message> {
        column![text(label).size(12).color(theme.text_muted), input]
            .spacing(4)
            .into()
    };

    let on_field = |field: LoginField| {
        move |value: String| Message::Login(LoginMessage::FieldChanged(field.clone(), value))
    };

    let host_input = text_input("play.example.com", &state.host)
        .size(14)
        .padding(10)
        .style(input_style(theme))
        .on_input(on_field(LoginField::Host))
        .on_submit(Message::Login(LoginMessage::Submit));

    let port_input = text_input("22", &state.port)
        .size(14)
        .padding(10)
        .width(Length::Fixed(90.0))
        .style(input_style(theme))
        .on_input(on_field(LoginField::Port))
        .on_submit(Message::Login(LoginMessage::Submit));

    let username_input = text_input("Username", &state.username)
        .size(14)
        .padding(10)
        .style(input_style(theme))
        .on_input(on_field(LoginField::Username))
        .on_submit(Message::Login(LoginMessage::Submit));

    let password_input = text_input("Password", state.password.expose_secret())
        .size(14)
        .padding(10)
        .secure(true)
        .style(input_style(theme))
        .on_input(|s| Message::Login(LoginMessage::PasswordChanged(SecretString::from(s))))
        .on_submit(Message::Login(LoginMessage::Submit));

    let address_row = row![
        container(field("Host", host_input.into())).width(Length::Fill),
        field("Port", port_input.into()),
    ]
    .spacing(8);

    let remember_label = if state.remember {
        "[x] Remember me"
    } else {
        "[ ] Remember me"
    };
    let remember_toggle = button(text(remember_label).size(13))
        .padding([6, 10])
        .style(secondary_button_style(theme))
        .on_press_maybe(
            (!state.connecting).then_some(Message::Login(LoginMessage::RememberToggled)),
        );

    let connect_label = if state.connecting {
        "Connecting..."
    } else {
        "Login"
    };
    let connect_button = button(text(connect_label).size(14))
        .padding([8, 20])
        .style(primary_button_style(theme))
        .on_press_maybe((!state.connecting).then_some(Message::Login(LoginMessage::Submit)));

    let mut items: Vec<Element<'static, Message>> = vec![
        title.into(),
        subtitle.into(),
        Space::new().height(12).into(),
        address_row.into(),
        field("Username", username_input.into()),
        field("Password", password_input.into()),
    ];

    if let Some(error) = &state.error {
        let error_color = theme.error;
        items.push(
            container(text(error.clone()).size(12).color(error_color))
                .padding([8, 12])
                .width(Length::Fill)
                .style(move |_theme| container::Style {
                    background: Some(iced::Color::from_rgba8(220, 80, 80, 0.1).into()),
                    border: iced::Border {
                        color: error_color,
                        width: 1.0,
                        radius: BORDER_RADIUS.into(),
                    },
                    ..Default::default()
                })
                .into(),
        );
    }

    items.push(Space::new().height(8).into());
    items.push(
        row![remember_toggle, Space::new().width(Length::Fill), connect_button]
            .align_y(Alignment::Center)
            .into(),
    );

    let card = container(
        column(items)
            .spacing(10)
            .padding(24)
            .width(Length::Fixed(420.0)),
    )
    .style(panel_style(theme));

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(move |_theme| container::Style {
            background: Some(theme.background.into()),
            ..Default::default()
        })
        .into()
}
