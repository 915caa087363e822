use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use teacher_schedule::{
    app::AppState,
    calendar::{week_info, CalendarDate, Parity, YearMonth},
    ui::{
        labels::{class_count_label, month_title, WEEKDAY_HEADERS},
        month_view,
    },
};

use crate::tui::presentation::ViewSettings;

const CELL_WIDTH: usize = 6;

pub fn render(f: &mut Frame, app: &AppState, settings: &ViewSettings, area: ratatui::layout::Rect) {
    let theme = &settings.theme;
    let grid = month_view::calculate_layout(app);
    let today = CalendarDate::today();

    let title = YearMonth::new(grid.year, grid.month)
        .map(month_title)
        .unwrap_or_else(|| format!("{}-{:02}", grid.year, grid.month));

    let week_column = if settings.show_week_numbers { "Нед " } else { "" };

    let mut header = vec![Span::styled(week_column, Style::default().fg(Color::DarkGray))];
    header.extend(WEEKDAY_HEADERS.iter().map(|name| {
        Span::styled(format!("{:^width$}", name, width = CELL_WIDTH), Style::default().fg(theme.weekday_header))
    }));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(header),
    ];

    for row in grid.rows() {
        let mut day_spans = Vec::new();

        if settings.show_week_numbers
            && let Some(first) = row.first()
        {
            let info = week_info(first.date, app.semester_start);
            day_spans.push(Span::styled(
                format!("{:>3} ", info.week_number),
                Style::default().fg(theme.week_color(info.parity)),
            ));
        }

        for cell in row {
            if !cell.in_current_month {
                day_spans.push(Span::styled(
                    format!("{:>3}   ", cell.date.day()),
                    Style::default().fg(theme.inactive_day),
                ));
                continue;
            }

            let marker = if cell.event_count > 0 {
                format!("·{}", cell.event_count)
            } else {
                String::new()
            };
            let day_text = format!("{:>3}{:<3}", cell.date.day(), marker);

            let mut style = Style::default().fg(theme.week_color(cell.week_parity));

            if cell.is_selected {
                style = style.bg(theme.selected_bg).fg(theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if cell.date == today {
                style = style.fg(theme.today).add_modifier(Modifier::BOLD);
            }

            if cell.event_count > 0 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            day_spans.push(Span::styled(day_text, style));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("■ ", Style::default().fg(theme.week_color(Parity::Odd))),
        Span::raw(format!("{} неделя  ", Parity::Odd.label())),
        Span::styled("■ ", Style::default().fg(theme.week_color(Parity::Even))),
        Span::raw(format!("{} неделя", Parity::Even.label())),
    ]));

    if let Some(date) = app.selected_date {
        let count = app.schedule.count_for_key(&date.key());
        lines.push(Line::from(vec![
            Span::styled(date.key(), Style::default().fg(theme.title)),
            Span::raw(": "),
            Span::styled(
                format!("{} {}", count, class_count_label(count)),
                Style::default().fg(theme.event_count),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hl", Style::default().fg(Color::Cyan)),
        Span::raw(" = день | "),
        Span::styled("{ }", Style::default().fg(Color::Cyan)),
        Span::raw(" = месяц | "),
        Span::styled("t", Style::default().fg(Color::Cyan)),
        Span::raw(" = сегодня | "),
        Span::styled("a", Style::default().fg(Color::Green)),
        Span::raw(" = добавить"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
