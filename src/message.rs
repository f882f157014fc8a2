use std::sync::Arc;

use secrecy::SecretString;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::sync::{BatchEvent, BatchKind, Reconciliation};

/// Tabs of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModTab {
    #[default]
    Comparison,
    Exceed,
    Latest,
}

impl ModTab {
    pub const ALL: [ModTab; 3] = [ModTab::Comparison, ModTab::Exceed, ModTab::Latest];

    pub fn title(&self) -> &'static str {
        match self {
            ModTab::Comparison => "Comparison",
            ModTab::Exceed => "Exceed Mods",
            ModTab::Latest => "Latest Mods",
        }
    }
}

#[derive(Debug, Clone)]
pub enum LoginField {
    Host,
    Port,
    Username,
}

/// Login screen messages
#[derive(Debug, Clone)]
pub enum LoginMessage {
    FieldChanged(LoginField, String),
    PasswordChanged(SecretString),
    RememberToggled,
    Submit,
    /// Result of the connection test for `session`
    Connected {
        session: Arc<SessionConfig>,
        remember: bool,
        result: Result<(), String>,
    },
    Logout,
}

/// Listing, selection and download messages
#[derive(Debug, Clone)]
pub enum SyncMessage {
    Refresh,
    /// Listing result tagged with the generation of the refresh that asked for it
    Refreshed(u64, Result<Reconciliation, String>),
    TabSelected(ModTab),
    Toggle(ModTab, String),
    ToggleAll(ModTab),
    Download(BatchKind),
    Batch(BatchEvent),
    DeleteAll,
    Deleted(Result<Vec<String>, String>),
}

#[derive(Debug, Clone)]
pub enum UiMessage {
    ToastTick,
    ToastDismiss(Uuid),
}

/// Application messages for the Elm-style update loop
#[derive(Debug, Clone)]
pub enum Message {
    Login(LoginMessage),
    Sync(SyncMessage),
    Ui(UiMessage),
    Noop,
}
