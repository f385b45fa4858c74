use crate::achievements::evaluate_day;
use crate::models::{Task, TaskStore};
use chrono::{Local, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    PastDate,
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PastDate => write!(f, "date is before today"),
            Self::NotFound => write!(f, "no task with that id on that date"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Canonical day-granularity key, `YYYY-MM-DD` zero-padded.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_past_date(date: NaiveDate) -> bool {
    date < today()
}

impl TaskStore {
    /// Appends a new incomplete task to `date`'s list. Rejects dates before
    /// today; blank text is a silent no-op and returns `None`.
    pub fn add_task(&mut self, date: NaiveDate, text: &str) -> Result<Option<Task>, StoreError> {
        self.add_task_at(today(), date, text)
    }

    pub fn add_task_at(
        &mut self,
        today: NaiveDate,
        date: NaiveDate,
        text: &str,
    ) -> Result<Option<Task>, StoreError> {
        if date < today {
            return Err(StoreError::PastDate);
        }
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let tasks = self.todos.entry(date_key(date)).or_default();
        let task = Task {
            id: tasks.iter().map(|task| task.id).max().map_or(1, |id| id + 1),
            text: text.to_string(),
            completed: false,
        };
        tasks.push(task.clone());
        Ok(Some(task))
    }

    /// Flips `completed` on the matching task. When the flip leaves the day
    /// fully complete, the tree flag for that day is set; the flag is sticky
    /// and never cleared by later changes.
    pub fn toggle_task(&mut self, date: NaiveDate, id: u64) -> Result<Task, StoreError> {
        let key = date_key(date);
        let task = self
            .todos
            .get_mut(&key)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id == id))
            .ok_or(StoreError::NotFound)?;
        task.completed = !task.completed;
        let task = task.clone();

        if evaluate_day(self, date) {
            self.trees_planted.insert(key, true);
        }
        Ok(task)
    }

    pub fn tasks_for(&self, date: NaiveDate) -> &[Task] {
        self.todos
            .get(&date_key(date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_tree_planted(&self, date: NaiveDate) -> bool {
        self.trees_planted
            .get(&date_key(date))
            .copied()
            .unwrap_or(false)
    }
}
