use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use teacher_schedule::{
    app::{AppState, FormField, Mode},
    ui::{labels::day_heading, theme::Theme},
};

use super::centered;

pub fn render(f: &mut Frame, app: &AppState, theme: &Theme) {
    let Some(form) = app.form() else {
        return;
    };

    let form_title = match &app.mode {
        Mode::EditClass { .. } => "Изменить занятие",
        _ => "Новое занятие",
    };

    let form_area = centered(f.size(), 70, 14);

    f.render_widget(Clear, form_area);

    let active_color = theme.selected_bg;
    let inactive_color = Color::DarkGray;
    let label_style = |field: FormField| {
        Style::default().fg(if form.active_field == field { active_color } else { inactive_color })
    };

    let date_line = app
        .selected_date
        .map(|date| day_heading(date, app.semester_start))
        .unwrap_or_default();

    let group_hint = if form.active_field == FormField::Group && !app.groups.is_empty() {
        " [←/→ выбрать]"
    } else {
        ""
    };

    let form_text = vec![
        Line::from(vec![Span::styled(form_title, Style::default().fg(theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(vec![Span::styled(date_line, Style::default().fg(inactive_color))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Предмет: ", label_style(FormField::Subject)),
            Span::raw(form.subject.as_str()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Время: ", label_style(FormField::Time)),
            Span::raw(form.time.as_str()),
            Span::styled(
                if form.active_field == FormField::Time { " (9:00–10:35)" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Группа: ", label_style(FormField::Group)),
            Span::raw(form.group.as_str()),
            Span::styled(group_hint, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" = поле | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = сохранить | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = отмена"),
        ]),
    ];

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
