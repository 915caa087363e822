use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use teacher_schedule::{
    app::AppState,
    ui::{day_view, theme::Theme},
};

pub fn render(f: &mut Frame, app: &AppState, theme: &Theme, area: ratatui::layout::Rect) {
    let Some(layout) = day_view::calculate_layout(app) else {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Выберите дату в календаре", Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(hint, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(layout.heading.clone(), Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if let Some(message) = layout.empty_message() {
        lines.push(Line::from(vec![
            Span::styled(message, Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        let selected_base = Style::default().bg(theme.selected_bg).add_modifier(Modifier::BOLD);

        for class in &layout.classes {
            let (time_style, subject_style, detail_style) = if class.is_highlighted {
                (
                    selected_base.fg(theme.selected_fg),
                    selected_base.fg(theme.selected_fg),
                    Style::default().bg(theme.selected_bg).fg(Color::DarkGray),
                )
            } else {
                (
                    Style::default().fg(Color::Green),
                    Style::default().fg(Color::White),
                    Style::default().fg(Color::DarkGray),
                )
            };

            let cursor = if class.is_highlighted { ">" } else { " " };

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(theme.selected_bg)),
                Span::styled(class.time.clone(), time_style),
                Span::raw(" "),
                Span::styled(class.subject.clone(), subject_style),
            ]));

            let mut details = format!("  Группа: {}", class.group);
            if let Some(room) = &class.room {
                details.push_str(&format!(" | ауд. {}", room));
            }
            lines.push(Line::from(vec![Span::styled(details, detail_style)]));
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(vec![
        Span::styled("jk", Style::default().fg(Color::Cyan)),
        Span::raw(" = выбор | "),
        Span::styled("E", Style::default().fg(Color::Green)),
        Span::raw(" = изменить | "),
        Span::styled("x", Style::default().fg(Color::Red)),
        Span::raw(" = удалить"),
    ]));

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
