use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use teacher_schedule::{
    app::{AppState, Mode, SyncStatus},
    calendar::week_info,
    ui::{labels::short_date, theme::Theme},
};

use crate::tui::{calendar_views, dialogs};

pub struct ViewSettings {
    pub theme: Theme,
    pub show_week_numbers: bool,
}

pub fn ui(f: &mut Frame, app: &AppState, settings: &ViewSettings) {
    let theme = &settings.theme;

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(main_chunks[1]);

    let title = Paragraph::new(title_text(app))
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    calendar_views::month::render(f, app, settings, content_chunks[0]);
    calendar_views::class_list::render(f, app, theme, content_chunks[1]);

    let (status_text, status_color) = match (&app.notice, &app.sync_status) {
        (Some(notice), _) => (notice.clone(), theme.error),
        (None, SyncStatus::Error(message)) => (message.clone(), theme.error),
        (None, status) => (
            format!(
                "Занятий в расписании: {} | {} | q = выход, ? = справка",
                app.schedule.total_entries(),
                sync_label(status)
            ),
            theme.status_bar,
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    match &app.mode {
        Mode::Browse => {}
        Mode::Help => dialogs::help::render(f, theme),
        Mode::AddClass(_) | Mode::EditClass { .. } => dialogs::class_form::render(f, app, theme),
        Mode::ConfirmDelete(target) => dialogs::delete_confirmation::render(f, app, target),
    }
}

fn title_text(app: &AppState) -> String {
    match app.selected_date {
        Some(date) => {
            let info = week_info(date, app.semester_start);
            format!(
                "Расписание преподавателя - {} - неделя {}, {}",
                short_date(date),
                info.week_number,
                info.parity.label()
            )
        }
        None => "Расписание преподавателя".to_string(),
    }
}

fn sync_label(status: &SyncStatus) -> &'static str {
    match status {
        SyncStatus::Synced => "Синхронизировано",
        SyncStatus::Syncing => "Загрузка...",
        SyncStatus::Error(_) => "Ошибка",
    }
}
