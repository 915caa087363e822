use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use teacher_schedule::{
    app::{reduce, submit, Action, AppState},
    calendar::CalendarDate,
    input::{self, Intent},
    storage::config::Config,
    sync::{schedule_api::ScheduleClient, sync_engine::SyncEngine},
    ui::theme::Theme,
};

use crate::tui::{
    presentation::{ui, ViewSettings},
    sample_schedule::sample_schedule,
};

const OFFLINE_NOTICE: &str = "Демо-режим: изменения не сохраняются";

pub async fn run_tui(sample: bool) -> Result<(), io::Error> {
    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;
    let sync_engine = SyncEngine::from_config(&config)
        .map_err(|e| io::Error::other(e.to_string()))?;

    let settings = ViewSettings {
        theme: Theme::get_by_name(&config.ui.theme),
        show_week_numbers: config.ui.show_week_numbers,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(config.semester.start, CalendarDate::today(), config.ui.groups.clone());
    app = reduce(app, Action::SyncStarted);
    terminal.draw(|f| ui(f, &app, &settings)).ok();

    let action = if sample {
        tracing::info!("Running with sample schedule");
        Action::ScheduleLoaded(sample_schedule(&config))
    } else {
        sync_engine.load_schedule().await
    };
    app = reduce(app, action);

    let res = run_app(&mut terminal, app, &settings, &sync_engine, sample).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: AppState,
    settings: &ViewSettings,
    sync_engine: &SyncEngine<ScheduleClient>,
    offline: bool,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app, settings))?;

        let TermEvent::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(intent) = input::handle_key(key.code, &app) else { continue };

        match intent {
            Intent::Quit => return Ok(()),
            Intent::Dispatch(action) => {
                app = reduce(app, action);
            }
            Intent::Reload if offline => {
                app = reduce(app, Action::Notice(OFFLINE_NOTICE.to_string()));
            }
            Intent::Reload => {
                app = reduce(app, Action::SyncStarted);
                terminal.draw(|f| ui(f, &app, settings))?;
                app = reduce(app, sync_engine.load_schedule().await);
            }
            Intent::Submit => match submit(&app) {
                Err(e) => {
                    app = reduce(app, Action::Notice(e.to_string()));
                }
                Ok(_) if offline => {
                    app = reduce(app, Action::Notice(OFFLINE_NOTICE.to_string()));
                }
                Ok(command) => {
                    tracing::debug!("Submitting {:?}", command);
                    app = reduce(app, Action::SyncStarted);
                    terminal.draw(|f| ui(f, &app, settings))?;
                    for action in sync_engine.apply(command).await {
                        app = reduce(app, action);
                    }
                }
            },
        }
    }
}
