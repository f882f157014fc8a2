//! Main screen: mod tabs, progress and actions

use iced::widget::{Space, button, column, container, progress_bar, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::message::{LoginMessage, Message, ModTab, SyncMessage};
use crate::sync::{BatchKind, BatchProgress, Reconciliation, Selection};
use crate::theme::Theme;

use super::common::{
    panel_style, primary_button_style, row_button_style, secondary_button_style,
    tab_button_style,
};

/// Everything the main screen renders
pub struct ModsViewState<'a> {
    pub address: String,
    pub local_dir: String,
    pub reconciliation: &'a Reconciliation,
    pub comparison_selection: &'a Selection,
    pub latest_selection: &'a Selection,
    pub active_tab: ModTab,
    pub progress: Option<BatchProgress>,
    pub busy: bool,
    pub refreshing: bool,
}

impl ModsViewState<'_> {
    fn selection(&self, tab: ModTab) -> Option<&Selection> {
        match tab {
            ModTab::Comparison => Some(self.comparison_selection),
            ModTab::Latest => Some(self.latest_selection),
            ModTab::Exceed => None,
        }
    }

    fn count(&self, tab: ModTab) -> usize {
        match tab {
            ModTab::Comparison => self.reconciliation.comparison.len(),
            ModTab::Exceed => self.reconciliation.exceed.len(),
            ModTab::Latest => self.reconciliation.latest.len(),
        }
    }
}

/// "3/10 Files downloaded", or a listing notice before the total is known
pub fn progress_label(progress: BatchProgress) -> String {
    if !progress.is_known() {
        return "Listing remote mods...".to_string();
    }
    format!("{}/{} Files downloaded", progress.completed, progress.total)
}

pub fn mods_view(state: ModsViewState<'_>, theme: Theme) -> Element<'static, Message> {
    let top_bar = top_bar(&state, theme);
    let tabs = tab_bar(&state, theme);
    let list = container(scrollable(tab_content(&state, theme)).height(Length::Fill))
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(panel_style(theme));

    let mut layout: Vec<Element<'static, Message>> = vec![top_bar, tabs, list.into()];
    if let Some(progress) = state.progress {
        layout.push(progress_section(progress, theme));
    }
    layout.push(action_bar(&state, theme));

    container(column(layout).spacing(12).padding(16))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(theme.background.into()),
            ..Default::default()
        })
        .into()
}

fn top_bar(state: &ModsViewState<'_>, theme: Theme) -> Element<'static, Message> {
    let info = column![
        text(format!("Connected to {}", state.address))
            .size(14)
            .color(theme.text_primary),
        text(format!("Local folder: {}", state.local_dir))
            .size(12)
            .color(theme.text_muted),
    ]
    .spacing(2);

    let sync_label = if state.refreshing { "Syncing..." } else { "Sync" };
    let sync_button = button(text(sync_label).size(13))
        .padding([6, 14])
        .style(secondary_button_style(theme))
        .on_press_maybe((!state.refreshing).then_some(Message::Sync(SyncMessage::Refresh)));

    let logout_button = button(text("Logout").size(13))
        .padding([6, 14])
        .style(secondary_button_style(theme))
        .on_press_maybe((!state.busy).then_some(Message::Login(LoginMessage::Logout)));

    row![info, Space::new().width(Length::Fill), sync_button, logout_button]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn tab_bar(state: &ModsViewState<'_>, theme: Theme) -> Element<'static, Message> {
    let tabs = ModTab::ALL.into_iter().map(|tab| -> Element<'static, Message> {
        let label = format!("{} ({})", tab.title(), state.count(tab));
        button(text(label).size(13))
            .padding([6, 14])
            .style(tab_button_style(theme, tab == state.active_tab))
            .on_press(Message::Sync(SyncMessage::TabSelected(tab)))
            .into()
    });

    row(tabs).spacing(4).into()
}

fn tab_content(state: &ModsViewState<'_>, theme: Theme) -> Element<'static, Message> {
    let tab = state.active_tab;
    let rec = state.reconciliation;

    let rows: Vec<(String, String)> = match tab {
        ModTab::Comparison => rec
            .comparison
            .iter()
            .map(|row| {
                let mark = if row.present_locally { "✓" } else { "✗" };
                (row.name.clone(), mark.to_string())
            })
            .collect(),
        ModTab::Exceed => rec.exceed.iter().map(|n| (n.clone(), String::new())).collect(),
        ModTab::Latest => rec
            .latest
            .iter()
            .map(|m| (m.name.clone(), m.formatted_modified()))
            .collect(),
    };

    if rows.is_empty() {
        let message = if state.refreshing {
            "Loading..."
        } else {
            "No mods"
        };
        return container(text(message).size(13).color(theme.text_muted))
            .padding(16)
            .into();
    }

    let mut items: Vec<Element<'static, Message>> = Vec::with_capacity(rows.len() + 1);

    if let Some(selection) = state.selection(tab) {
        let label = if selection.all_selected() {
            "[x] Select all"
        } else {
            "[ ] Select all"
        };
        items.push(
            button(text(label).size(12).color(theme.text_secondary))
                .padding([4, 8])
                .style(row_button_style(theme, false))
                .on_press(Message::Sync(SyncMessage::ToggleAll(tab)))
                .into(),
        );
    }

    for (name, detail) in rows {
        let detail_color = match detail.as_str() {
            "✓" => theme.success,
            "✗" => theme.error,
            _ => theme.text_muted,
        };
        let detail = text(detail).size(13).color(detail_color);

        let item: Element<'static, Message> = match state.selection(tab) {
            Some(selection) => {
                let checked = selection.is_selected(&name);
                let check = if checked { "[x]" } else { "[ ]" };
                let content = row![
                    text(check).size(13).color(theme.text_secondary),
                    text(name.clone()).size(13),
                    Space::new().width(Length::Fill),
                    detail,
                ]
                .spacing(10)
                .align_y(Alignment::Center);

                button(content)
                    .padding([4, 8])
                    .width(Length::Fill)
                    .style(row_button_style(theme, checked))
                    .on_press(Message::Sync(SyncMessage::Toggle(tab, name)))
                    .into()
            }
            None => container(
                row![
                    text(name).size(13).color(theme.text_primary),
                    Space::new().width(Length::Fill),
                    detail,
                ]
                .align_y(Alignment::Center),
            )
            .padding([4, 8])
            .width(Length::Fill)
            .into(),
        };
        items.push(item);
    }

    column(items).spacing(2).into()
}

fn progress_section(progress: BatchProgress, theme: Theme) -> Element<'static, Message> {
    column![
        progress_bar(0.0..=1.0, progress.fraction()),
        text(progress_label(progress))
            .size(12)
            .color(theme.text_secondary),
    ]
    .spacing(4)
    .into()
}

fn action_bar(state: &ModsViewState<'_>, theme: Theme) -> Element<'static, Message> {
    let idle = !state.busy;
    let selected_count = state
        .selection(state.active_tab)
        .map(Selection::len)
        .unwrap_or(0);

    let action = |label: String, message: Message, enabled: bool, primary: bool| {
        let btn = button(text(label).size(13)).padding([8, 16]);
        let btn = if primary {
            btn.style(primary_button_style(theme))
        } else {
            btn.style(secondary_button_style(theme))
        };
        btn.on_press_maybe(enabled.then_some(message))
    };

    row![
        action(
            format!("Download Selected ({})", selected_count),
            Message::Sync(SyncMessage::Download(BatchKind::Selected)),
            idle && selected_count > 0,
            true,
        ),
        action(
            "Download Latest".to_string(),
            Message::Sync(SyncMessage::Download(BatchKind::Latest)),
            idle,
            false,
        ),
        action(
            "Download All".to_string(),
            Message::Sync(SyncMessage::Download(BatchKind::All)),
            idle,
            false,
        ),
        Space::new().width(Length::Fill),
        action(
            "Delete All".to_string(),
            Message::Sync(SyncMessage::DeleteAll),
            idle,
            false,
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_label_counts_files() {
        let label = progress_label(BatchProgress {
            completed: 3,
            total: 10,
        });
        assert_eq!(label, "3/10 Files downloaded");
    }

    #[test]
    fn progress_label_before_remote_listing() {
        let label = progress_label(BatchProgress {
            completed: 0,
            total: 0,
        });
        assert_eq!(label, "Listing remote mods...");
    }
}
