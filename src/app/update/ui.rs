//! UI state message handlers

use iced::Task;

use crate::app::ModSync;
use crate::message::{Message, UiMessage};

pub fn handle_ui(app: &mut ModSync, msg: UiMessage) -> Task<Message> {
    match msg {
        UiMessage::ToastTick => {
            app.toast_manager.cleanup_expired();
            Task::none()
        }
        UiMessage::ToastDismiss(id) => {
            app.toast_manager.dismiss(id);
            Task::none()
        }
    }
}
