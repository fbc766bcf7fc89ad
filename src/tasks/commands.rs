use std::collections::BTreeMap;

use chrono::NaiveDate;
use tauri::State;

use crate::{
    models::{NewTask, Task, TaskPatch},
    store::PriorityGroups,
    AppState,
};

#[tauri::command]
pub fn create_task(state: State<'_, AppState>, input: NewTask) -> Result<Task, String> {
    state.store.create(input).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn update_task(
    state: State<'_, AppState>,
    task_id: String,
    patch: TaskPatch,
) -> Result<Task, String> {
    state
        .store
        .update(&task_id, patch)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_task(state: State<'_, AppState>, task_id: String) -> Result<(), String> {
    state.store.delete(&task_id).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn duplicate_task(state: State<'_, AppState>, task_id: String) -> Result<Task, String> {
    state.store.duplicate(&task_id).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_task(state: State<'_, AppState>, task_id: String) -> Result<Task, String> {
    state.store.get(&task_id).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_tasks(state: State<'_, AppState>) -> Vec<Task> {
    state.store.list()
}

#[tauri::command]
pub fn list_tasks_for_date(state: State<'_, AppState>, date: NaiveDate) -> Vec<Task> {
    state.store.tasks_for_date(date)
}

#[tauri::command]
pub fn get_priority_groups(state: State<'_, AppState>) -> PriorityGroups {
    state.store.grouped_by_priority()
}

#[tauri::command]
pub fn get_date_heatmap(state: State<'_, AppState>) -> BTreeMap<String, u32> {
    state.store.counts_by_date()
}

#[tauri::command]
pub fn seed_sample_tasks(state: State<'_, AppState>) -> Vec<Task> {
    state.store.seed_sample()
}

#[tauri::command]
pub fn clear_tasks(state: State<'_, AppState>) {
    state.store.clear();
}
