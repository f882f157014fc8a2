mod actions;
mod update;

use std::sync::Arc;
use std::time::Duration;

use iced::widget::stack;
use iced::{Element, Subscription, Task, Theme as IcedTheme, time};

use crate::config::{SessionConfig, SettingsConfig, StoredCredentials, paths};
use crate::message::{Message, ModTab, UiMessage};
use crate::sync::{BatchGuard, BatchProgress, Reconciliation, Selection};
use crate::theme::Theme;
use crate::views::login::{LoginState, login_view};
use crate::views::mods::{ModsViewState, mods_view};
use crate::views::toast::{ToastManager, toast_overlay_view};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Main,
}

/// Main application state
pub struct ModSync {
    screen: Screen,
    login: LoginState,

    /// Present between a successful login and logout
    session: Option<Arc<SessionConfig>>,
    settings: SettingsConfig,

    // Listings and selections
    reconciliation: Reconciliation,
    comparison_selection: Selection,
    latest_selection: Selection,
    active_tab: ModTab,
    refreshing: bool,
    /// Bumped per refresh; only the newest `Refreshed` is applied
    refresh_generation: u64,

    // Batch downloads
    batch: BatchGuard,
    progress: Option<BatchProgress>,

    theme: Theme,
    toast_manager: ToastManager,
}

impl ModSync {
    /// Create the application; tries a remembered login if one exists
    pub fn new() -> (Self, Task<Message>) {
        let settings = match SettingsConfig::load() {
            Ok(config) => {
                tracing::info!(
                    "Loaded settings: remote={}, local={}",
                    config.remote_mods_dir,
                    config.local_mods_dir().display()
                );
                // First run: write the defaults out so they can be edited
                if paths::settings_file().is_some_and(|path| !path.exists()) {
                    if let Err(e) = config.save() {
                        tracing::warn!("Failed to write default settings: {}", e);
                    }
                }
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load settings: {}, using defaults", e);
                SettingsConfig::default()
            }
        };

        let mut app = Self::with_settings(settings);

        let task = match StoredCredentials::load() {
            Ok(Some(stored)) => match stored.to_session() {
                Ok(session) => {
                    tracing::info!("Found remembered login for {}@{}", stored.user, stored.host);
                    app.login.prefill(&stored, &session);
                    app.connect(Arc::new(session), true)
                }
                Err(e) => {
                    tracing::warn!("Ignoring remembered login: {}", e);
                    Task::none()
                }
            },
            Ok(None) => Task::none(),
            Err(e) => {
                tracing::warn!("Failed to read remembered login: {}", e);
                Task::none()
            }
        };

        (app, task)
    }

    fn with_settings(settings: SettingsConfig) -> Self {
        Self {
            screen: Screen::Login,
            login: LoginState::new(&settings),
            session: None,
            settings,
            reconciliation: Reconciliation::default(),
            comparison_selection: Selection::new(),
            latest_selection: Selection::new(),
            active_tab: ModTab::Comparison,
            refreshing: false,
            refresh_generation: 0,
            batch: BatchGuard::new(),
            progress: None,
            theme: Theme::dark(),
            toast_manager: ToastManager::new(),
        }
    }

    /// Handle messages - dispatches to specialized handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Login(msg) => update::handle_login(self, msg),
            Message::Sync(msg) => update::handle_sync(self, msg),
            Message::Ui(msg) => update::handle_ui(self, msg),
            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match (self.screen, &self.session) {
            (Screen::Main, Some(session)) => mods_view(
                ModsViewState {
                    address: format!("{}@{}", session.username, session.address()),
                    local_dir: self.settings.local_mods_dir().display().to_string(),
                    reconciliation: &self.reconciliation,
                    comparison_selection: &self.comparison_selection,
                    latest_selection: &self.latest_selection,
                    active_tab: self.active_tab,
                    progress: self.progress,
                    busy: self.batch.is_busy(),
                    refreshing: self.refreshing,
                },
                self.theme,
            ),
            _ => login_view(&self.login, self.theme),
        };

        if self.toast_manager.has_toasts() {
            stack![screen, toast_overlay_view(&self.toast_manager, self.theme)].into()
        } else {
            screen
        }
    }

    pub fn theme(&self) -> IcedTheme {
        IcedTheme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Toast tick timer (only when toasts are visible)
        if self.toast_manager.has_toasts() {
            time::every(Duration::from_millis(100)).map(|_| Message::Ui(UiMessage::ToastTick))
        } else {
            Subscription::none()
        }
    }
}
