use thiserror::Error;

use crate::calendar::{
    week_info, CalendarDate, EntryId, NewClassRequest, Schedule, ScheduleEntry, TimeRange,
    TimeRangeError, UpdateClassRequest, YearMonth,
};

/// Points at one class in the cached schedule. Used wherever the UI needs to
/// say which entry an edit or delete is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRef {
    pub date_key: String,
    pub id: EntryId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    AddClass(ClassForm),
    EditClass { target: ClassRef, form: ClassForm },
    ConfirmDelete(ClassRef),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncStatus {
    Synced,
    Syncing,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Subject,
    Time,
    Group,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassForm {
    pub subject: String,
    pub time: String,
    pub group: String,
    pub active_field: FormField,
}

impl ClassForm {
    pub fn empty() -> Self {
        Self {
            subject: String::new(),
            time: String::new(),
            group: String::new(),
            active_field: FormField::Subject,
        }
    }

    pub fn for_entry(entry: &ScheduleEntry) -> Self {
        Self {
            subject: entry.subject.clone(),
            time: entry.time.clone(),
            group: entry.group.clone(),
            active_field: FormField::Subject,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Subject => FormField::Time,
            FormField::Time => FormField::Group,
            FormField::Group => FormField::Subject,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Subject => FormField::Group,
            FormField::Time => FormField::Subject,
            FormField::Group => FormField::Time,
        };
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.active_field {
            FormField::Subject => &mut self.subject,
            FormField::Time => &mut self.time,
            FormField::Group => &mut self.group,
        }
    }

    /// Trimmed subject, time range and group, or an error if any is blank
    /// or the time range does not parse.
    pub fn validate(&self) -> Result<(String, TimeRange, String), FormError> {
        let subject = self.subject.trim();
        let time = self.time.trim();
        let group = self.group.trim();
        if subject.is_empty() || time.is_empty() || group.is_empty() {
            return Err(FormError::MissingFields);
        }

        let range = TimeRange::parse(time)?;
        Ok((subject.to_string(), range, group.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Заполните все поля")]
    MissingFields,
    #[error(transparent)]
    Time(#[from] TimeRangeError),
    #[error("Сначала выберите дату")]
    NoDateSelected,
    #[error("Нет открытой формы")]
    NothingToSubmit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScheduleLoaded(Schedule),
    ScheduleLoadFailed(String),
    SyncStarted,
    SelectDate(CalendarDate),
    MoveSelection(i64),
    SelectToday(CalendarDate),
    PreviousMonth,
    NextMonth,
    HighlightNext,
    HighlightPrevious,
    OpenAddForm,
    OpenEditForm(ClassRef),
    RequestDelete(ClassRef),
    CloseDialog,
    ShowHelp,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPreviousField,
    CycleGroup(i32),
    MutationSucceeded,
    MutationFailed(String),
    Notice(String),
    DismissNotice,
}

/// A request the event loop must carry out against the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateClass(NewClassRequest),
    UpdateClass { id: EntryId, request: UpdateClassRequest },
    DeleteClass { id: EntryId },
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub semester_start: CalendarDate,
    pub visible_month: YearMonth,
    pub selected_date: Option<CalendarDate>,
    pub schedule: Schedule,
    pub groups: Vec<String>,
    pub mode: Mode,
    pub highlighted_entry: usize,
    pub sync_status: SyncStatus,
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(semester_start: CalendarDate, today: CalendarDate, groups: Vec<String>) -> Self {
        Self {
            semester_start,
            visible_month: today.year_month(),
            selected_date: Some(today),
            schedule: Schedule::new(),
            groups,
            mode: Mode::Browse,
            highlighted_entry: 0,
            sync_status: SyncStatus::Synced,
            notice: None,
        }
    }

    pub fn entries_for_selected_date(&self) -> &[ScheduleEntry] {
        match self.selected_date {
            Some(date) => self.schedule.entries_on(date),
            None => &[],
        }
    }

    pub fn highlighted_class(&self) -> Option<ClassRef> {
        let date = self.selected_date?;
        let entry = self.entries_for_selected_date().get(self.highlighted_entry)?;
        Some(ClassRef { date_key: date.key(), id: entry.id })
    }

    pub fn entry(&self, target: &ClassRef) -> Option<&ScheduleEntry> {
        self.schedule.find(&target.date_key, target.id)
    }

    pub fn form(&self) -> Option<&ClassForm> {
        match &self.mode {
            Mode::AddClass(form) | Mode::EditClass { form, .. } => Some(form),
            _ => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut ClassForm> {
        match &mut self.mode {
            Mode::AddClass(form) | Mode::EditClass { form, .. } => Some(form),
            _ => None,
        }
    }

    fn select(&mut self, date: CalendarDate) {
        self.selected_date = Some(date);
        self.visible_month = date.year_month();
        self.highlighted_entry = 0;
    }
}

pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::ScheduleLoaded(schedule) => {
            tracing::debug!("Schedule loaded with {} entries", schedule.total_entries());
            state.schedule = schedule;
            state.sync_status = SyncStatus::Synced;
            let count = state.entries_for_selected_date().len();
            if state.highlighted_entry >= count {
                state.highlighted_entry = count.saturating_sub(1);
            }
        }
        Action::ScheduleLoadFailed(reason) => {
            tracing::warn!("Schedule load failed: {}", reason);
            state.schedule = Schedule::new();
            state.highlighted_entry = 0;
            state.sync_status = SyncStatus::Error(reason);
        }
        Action::SyncStarted => {
            state.sync_status = SyncStatus::Syncing;
        }
        Action::SelectDate(date) | Action::SelectToday(date) => {
            state.select(date);
        }
        Action::MoveSelection(days) => {
            let base = state
                .selected_date
                .or_else(|| state.visible_month.first_day());
            if let Some(date) = base.and_then(|d| d.add_days(days)) {
                state.select(date);
            }
        }
        Action::PreviousMonth => {
            state.visible_month = state.visible_month.previous();
        }
        Action::NextMonth => {
            state.visible_month = state.visible_month.next();
        }
        Action::HighlightNext => {
            let count = state.entries_for_selected_date().len();
            if count > 0 && state.highlighted_entry < count - 1 {
                state.highlighted_entry += 1;
            }
        }
        Action::HighlightPrevious => {
            state.highlighted_entry = state.highlighted_entry.saturating_sub(1);
        }
        Action::OpenAddForm => {
            if state.selected_date.is_some() {
                state.mode = Mode::AddClass(ClassForm::empty());
            } else {
                state.notice = Some(FormError::NoDateSelected.to_string());
            }
        }
        Action::OpenEditForm(target) => {
            if let Some(entry) = state.entry(&target) {
                let form = ClassForm::for_entry(entry);
                state.mode = Mode::EditClass { target, form };
            } else {
                tracing::warn!("Edit requested for missing entry {} on {}", target.id, target.date_key);
            }
        }
        Action::RequestDelete(target) => {
            if state.entry(&target).is_some() {
                state.mode = Mode::ConfirmDelete(target);
            }
        }
        Action::CloseDialog => {
            state.mode = Mode::Browse;
        }
        Action::ShowHelp => {
            state.mode = Mode::Help;
        }
        Action::FormInput(c) => {
            if let Some(form) = state.form_mut() {
                form.active_buffer().push(c);
            }
        }
        Action::FormBackspace => {
            if let Some(form) = state.form_mut() {
                form.active_buffer().pop();
            }
        }
        Action::FormNextField => {
            if let Some(form) = state.form_mut() {
                form.next_field();
            }
        }
        Action::FormPreviousField => {
            if let Some(form) = state.form_mut() {
                form.prev_field();
            }
        }
        Action::CycleGroup(step) => {
            let groups = state.groups.clone();
            if let Some(form) = state.form_mut() {
                form.group = cycle_group(&groups, &form.group, step);
            }
        }
        Action::MutationSucceeded => {
            state.mode = Mode::Browse;
            state.notice = None;
        }
        Action::MutationFailed(message) | Action::Notice(message) => {
            state.notice = Some(message);
        }
        Action::DismissNotice => {
            state.notice = None;
        }
    }

    state
}

fn cycle_group(groups: &[String], current: &str, step: i32) -> String {
    if groups.is_empty() {
        return current.to_string();
    }
    let len = groups.len() as i64;
    let next = match groups.iter().position(|g| g == current) {
        Some(idx) => (idx as i64 + step as i64).rem_euclid(len),
        None if step < 0 => len - 1,
        None => 0,
    };
    groups[next as usize].clone()
}

/// Turns the open dialog into the request it stands for.
pub fn submit(state: &AppState) -> Result<Command, FormError> {
    match &state.mode {
        Mode::AddClass(form) => {
            let date = state.selected_date.ok_or(FormError::NoDateSelected)?;
            let (subject, range, group) = form.validate()?;
            let (start_time, end_time) = range.wire_times();

            Ok(Command::CreateClass(NewClassRequest {
                day_of_week: date.iso_day_of_week(),
                week_parity: week_info(date, state.semester_start).parity,
                start_time,
                end_time,
                subject,
                group_name: group,
            }))
        }
        Mode::EditClass { target, form } => {
            let (subject, range, group) = form.validate()?;
            let (start_time, end_time) = range.wire_times();

            Ok(Command::UpdateClass {
                id: target.id,
                request: UpdateClassRequest {
                    subject,
                    start_time,
                    end_time,
                    group_name: group,
                },
            })
        }
        Mode::ConfirmDelete(target) => Ok(Command::DeleteClass { id: target.id }),
        Mode::Browse | Mode::Help => Err(FormError::NothingToSubmit),
    }
}
