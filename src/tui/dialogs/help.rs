use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use teacher_schedule::ui::theme::Theme;

use super::centered;

pub fn render(f: &mut Frame, theme: &Theme) {
    let help_area = centered(f.size(), 60, 24);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("Справка", Style::default().fg(theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Календарь:", Style::default().fg(theme.help_section))]),
        Line::from("  h/l      - Предыдущий/следующий день"),
        Line::from("  j/k      - Занятия дня (или неделя, если их нет)"),
        Line::from("  J/K      - Следующая/предыдущая неделя"),
        Line::from("  { / }    - Предыдущий/следующий месяц"),
        Line::from("  g/G      - Первый/последний день месяца"),
        Line::from("  t        - Сегодня"),
        Line::from(""),
        Line::from(vec![Span::styled("Занятия:", Style::default().fg(theme.help_section))]),
        Line::from("  a        - Добавить занятие"),
        Line::from("  E/Enter  - Изменить выбранное занятие"),
        Line::from("  x        - Удалить выбранное занятие"),
        Line::from("  r        - Обновить расписание"),
        Line::from(""),
        Line::from(vec![Span::styled("Форма:", Style::default().fg(theme.help_section))]),
        Line::from("  Tab      - Следующее поле"),
        Line::from("  ←/→      - Выбор группы"),
        Line::from("  Enter    - Сохранить, Esc - отмена"),
        Line::from(""),
        Line::from("  q        - Выход"),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" ? = закрыть "))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
