//! Shared widget styles
//!
//! - `primary_button_style` - Accent-colored action button
//! - `secondary_button_style` - Outlined secondary button
//! - `tab_button_style` - Flat tab header, underlined when active
//! - `input_style` - Styled text input for the login form

use iced::widget::{button, container, text_input};

use crate::theme::{BORDER_RADIUS, Theme};

/// Primary button style - accent-colored for main actions
///
/// Returns a closure suitable for use with `button.style(...)`.
pub fn primary_button_style(
    theme: Theme,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_iced_theme, status| {
        let (background, text_color) = match status {
            button::Status::Disabled => (theme.surface, theme.text_muted),
            _ => (theme.accent, theme.text_primary),
        };
        button::Style {
            background: Some(background.into()),
            text_color,
            border: iced::Border {
                radius: BORDER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Secondary button style - outlined for less prominent actions
pub fn secondary_button_style(
    theme: Theme,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_iced_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (theme.hover, theme.text_primary),
            button::Status::Disabled => (theme.surface, theme.text_muted),
            _ => (theme.surface, theme.text_primary),
        };
        button::Style {
            background: Some(bg.into()),
            text_color,
            border: iced::Border {
                color: theme.border,
                width: 1.0,
                radius: BORDER_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

pub fn tab_button_style(
    theme: Theme,
    active: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_iced_theme, status| {
        let background = match (active, status) {
            (true, _) => Some(theme.selected.into()),
            (false, button::Status::Hovered) => Some(theme.hover.into()),
            _ => None,
        };
        button::Style {
            background,
            text_color: if active {
                theme.text_primary
            } else {
                theme.text_secondary
            },
            border: iced::Border {
                radius: BORDER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Row button inside a mod list; highlighted when checked
pub fn row_button_style(
    theme: Theme,
    checked: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_iced_theme, status| {
        let background = match (checked, status) {
            (true, _) => Some(theme.selected.into()),
            (false, button::Status::Hovered) => Some(theme.hover.into()),
            _ => None,
        };
        button::Style {
            background,
            text_color: theme.text_primary,
            ..Default::default()
        }
    }
}

/// Styled text input - rounded with border that highlights on focus
pub fn input_style(theme: Theme) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style {
    move |_iced_theme, status| {
        let border_color = match status {
            text_input::Status::Focused { .. } => theme.accent,
            text_input::Status::Hovered => theme.text_muted,
            _ => theme.border,
        };
        text_input::Style {
            background: theme.surface.into(),
            border: iced::Border {
                color: border_color,
                width: 1.0,
                radius: BORDER_RADIUS.into(),
            },
            icon: theme.text_muted,
            placeholder: theme.text_muted,
            value: theme.text_primary,
            selection: theme.selected,
        }
    }
}

/// Card background used by the login form and the mod list
pub fn panel_style(theme: Theme) -> impl Fn(&iced::Theme) -> container::Style {
    move |_iced_theme| container::Style {
        background: Some(theme.surface.into()),
        border: iced::Border {
            color: theme.border,
            width: 1.0,
            radius: (BORDER_RADIUS * 2.0).into(),
        },
        ..Default::default()
    }
}
