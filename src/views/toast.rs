//! Toast notification system for displaying temporary messages

use std::time::{Duration, Instant};

use iced::widget::{Column, Space, button, container, row, text};
use iced::{Alignment, Color, Element, Length};
use uuid::Uuid;

use crate::message::{Message, UiMessage};
use crate::theme::{BORDER_RADIUS, Theme};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

const MAX_VISIBLE_TOASTS: usize = 5;

/// Type of toast notification (determines color and marker)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Warning,
    Success,
}

impl ToastType {
    pub fn color(&self) -> Color {
        match self {
            ToastType::Error => Color::from_rgb8(0xf4, 0x43, 0x36),   // #f44336 - red
            ToastType::Warning => Color::from_rgb8(0xff, 0x98, 0x00), // #ff9800 - orange
            ToastType::Success => Color::from_rgb8(0x4c, 0xaf, 0x50), // #4caf50 - green
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            ToastType::Error => "✗",
            ToastType::Warning => "!",
            ToastType::Success => "✓",
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Warning)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Manager for multiple toast notifications
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    /// Add a toast, dropping the oldest one past the visible limit
    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn cleanup_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Render the toast overlay (positioned at bottom-right)
pub fn toast_overlay_view(manager: &ToastManager, theme: Theme) -> Element<'static, Message> {
    if !manager.has_toasts() {
        return Space::new().into();
    }

    let toast_list: Element<'static, Message> = Column::with_children(
        manager
            .toasts()
            .iter()
            .rev()
            .map(|toast| toast_item_view(toast, theme)),
    )
    .spacing(8)
    .into();

    container(
        container(toast_list)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::End)
            .padding(16),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn toast_item_view(toast: &Toast, theme: Theme) -> Element<'static, Message> {
    let toast_id = toast.id;
    let accent_color = toast.toast_type.color();

    let marker = text(toast.toast_type.marker()).size(14).color(accent_color);

    let dismiss_btn = button(text("×").size(14).color(theme.text_secondary))
        .padding([0, 6])
        .style(move |_theme, status| {
            let bg = match status {
                button::Status::Hovered => Some(theme.hover.into()),
                _ => None,
            };
            button::Style {
                background: bg,
                border: iced::Border {
                    radius: BORDER_RADIUS.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(Message::Ui(UiMessage::ToastDismiss(toast_id)));

    let content = row![
        marker,
        text(toast.message.clone()).size(13).color(theme.text_primary),
        Space::new().width(Length::Fill),
        dismiss_btn,
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(content)
        .padding([10, 14])
        .width(Length::Fixed(360.0))
        .style(move |_theme| container::Style {
            background: Some(theme.surface.into()),
            border: iced::Border {
                color: accent_color,
                width: 1.0,
                radius: BORDER_RADIUS.into(),
            },
            shadow: iced::Shadow {
                color: Color::from_rgba8(0, 0, 0, 0.3),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
