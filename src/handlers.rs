use crate::achievements::{evaluate_month, month_days};
use crate::errors::AppError;
use crate::models::{AddTaskRequest, DayResponse, MonthResponse, TaskStore, ToggleTaskRequest};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::store::{date_key, is_past_date, parse_date_key, today};
use crate::ui::render_page;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

pub async fn index() -> Html<String> {
    Html(render_page(today()))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_day(&query.date)?;
    let store = state.store.lock().await;
    Ok(Json(day_response(&store, date)))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_day(&payload.date)?;
    let mut guard = state.store.lock().await;
    let mut updated = guard.clone();
    // Persist before commit so a failed write leaves shared state untouched.
    if updated.add_task(date, &payload.text)?.is_some() {
        persist_store(&state.data_path, &updated).await?;
        *guard = updated;
    }
    Ok(Json(day_response(&guard, date)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<ToggleTaskRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_day(&payload.date)?;
    let mut guard = state.store.lock().await;
    let mut updated = guard.clone();
    updated.toggle_task(date, payload.id)?;
    persist_store(&state.data_path, &updated).await?;
    *guard = updated;
    Ok(Json(day_response(&guard, date)))
}

pub async fn get_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    let first = NaiveDate::from_ymd_opt(query.year, query.month, 1)
        .ok_or_else(|| AppError::bad_request("invalid year or month"))?;
    let store = state.store.lock().await;
    Ok(Json(MonthResponse {
        year: query.year,
        month: query.month,
        first_weekday: first.weekday().num_days_from_sunday(),
        days: month_days(&store, query.year, query.month),
        forest: evaluate_month(&store, query.year, query.month),
    }))
}

fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    parse_date_key(raw).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))
}

fn day_response(store: &TaskStore, date: NaiveDate) -> DayResponse {
    DayResponse {
        date: date_key(date),
        tasks: store.tasks_for(date).to_vec(),
        tree_planted: store.is_tree_planted(date),
        past: is_past_date(date),
    }
}
