use teacher_schedule::{
    calendar::{expand_template, Parity, Schedule, TemplateRow, TimeRange},
    storage::config::Config,
};

/// Demo semester built from a fixed weekly template, for `--sample` runs
/// without a backend.
pub fn sample_schedule(config: &Config) -> Schedule {
    let rows = [
        (1, Parity::Odd, "9:00–10:35", "Математический анализ", "Д-Э 301", Some("204")),
        (1, Parity::Even, "9:00–10:35", "Линейная алгебра", "Д-Э 302", Some("204")),
        (2, Parity::Odd, "10:45–12:20", "Дискретная математика", "Д-Э 303", None),
        (3, Parity::Odd, "12:40–14:15", "Программирование", "Д-Э 301", Some("312")),
        (3, Parity::Even, "12:40–14:15", "Программирование", "Д-Э 304", Some("312")),
        (4, Parity::Even, "14:25–16:00", "Теория вероятностей", "Д-Э 305", None),
        (5, Parity::Odd, "9:00–10:35", "Базы данных", "Д-Э 302", Some("Лаб. 3")),
    ];

    let template: Vec<TemplateRow> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, (day_of_week, parity, time, subject, group, room))| {
            let time = TimeRange::parse(time).ok()?;
            Some(TemplateRow {
                id: i as i64 + 1,
                day_of_week,
                parity,
                time,
                subject: subject.to_string(),
                group: group.to_string(),
                room: room.map(String::from),
            })
        })
        .collect();

    expand_template(&template, config.semester.start, config.semester.end)
}
