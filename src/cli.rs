use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use anyhow::Context;

use teacher_schedule::{
    calendar::CalendarDate,
    storage::config::Config,
    sync::sync_engine::SyncEngine,
    ui::day_view::{agenda_text, LOAD_FAILED},
};

pub const USAGE: &str = "Usage: teacher-schedule [--today [YYYY-MM-DD]] [--sample]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliMode {
    Interactive { sample: bool },
    Today(CalendarDate),
    Help,
}

pub fn parse_cli_mode<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut sample = false;
    let mut today_date = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--today" => {
                let target_date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => date_str.parse::<CalendarDate>().map_err(|e| e.to_string())?,
                    None => CalendarDate::today(),
                };
                today_date = Some(target_date);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if let Some(date) = today_date {
        Ok(CliMode::Today(date))
    } else {
        Ok(CliMode::Interactive { sample })
    }
}

pub async fn run_today_mode(date: CalendarDate) -> anyhow::Result<()> {
    let config = Config::load_or_create().context("loading configuration")?;
    let sync_engine = SyncEngine::from_config(&config).context("building HTTP client")?;

    let text = match sync_engine.fetch_schedule().await {
        Ok(schedule) => agenda_text(date, &schedule),
        Err(e) => {
            tracing::error!("Failed to fetch schedule for {}: {}", date, e);
            LOAD_FAILED.to_string()
        }
    };

    display_with_pager(&text).context("writing agenda")?;
    Ok(())
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let Some(cmd) = parts.next() else {
        println!("{text}");
        return Ok(());
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}
