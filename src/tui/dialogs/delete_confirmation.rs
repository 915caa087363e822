use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use teacher_schedule::app::{AppState, ClassRef};

use super::centered;

pub fn render(f: &mut Frame, app: &AppState, target: &ClassRef) {
    let subject = app
        .entry(target)
        .map(|e| e.subject.as_str())
        .unwrap_or("это занятие");

    let dialog_area = centered(f.size(), 60, 10);

    f.render_widget(Clear, dialog_area);

    let dialog_text = vec![
        Line::from(vec![Span::styled("Удалить занятие?", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Вы уверены, что хотите удалить "),
            Span::styled(subject, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from(format!("Дата: {}", target.date_key)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(Color::Green)),
            Span::raw(" = да, удалить | "),
            Span::styled("N", Style::default().fg(Color::Red)),
            Span::raw(" = отмена"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Удаление ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
