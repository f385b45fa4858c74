use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single task. Tasks are append-only: once created they can only have
/// `completed` flipped, never be edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// The whole persisted state: task lists and tree flags, both keyed by a
/// `YYYY-MM-DD` date key. Serializing this struct yields the on-disk
/// document, so the field names here are the storage contract.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskStore {
    pub todos: BTreeMap<String, Vec<Task>>,
    #[serde(rename = "treesPlanted")]
    pub trees_planted: BTreeMap<String, bool>,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub date: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTaskRequest {
    pub date: String,
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub tasks: Vec<Task>,
    pub tree_planted: bool,
    pub past: bool,
}

#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub day: u32,
    pub tree_planted: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    /// Weekday of the 1st, 0 = Sunday; the grid pads this many leading cells.
    pub first_weekday: u32,
    pub days: Vec<DaySummary>,
    pub forest: bool,
}
