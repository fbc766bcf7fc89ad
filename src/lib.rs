mod models;
mod schedule;
mod settings;
mod store;
mod tasks;

use log::info;
use settings::{PlannerPreferences, SettingsStore};
use store::TaskStore;
use tauri::State;

use schedule::commands::{build_day_segments, get_day_overview, get_hour_occupancy};
use tasks::commands::{
    clear_tasks, create_task, delete_task, duplicate_task, get_date_heatmap, get_priority_groups,
    get_task, list_tasks, list_tasks_for_date, seed_sample_tasks, update_task,
};

pub(crate) struct AppState {
    pub(crate) store: TaskStore,
    pub(crate) settings: SettingsStore,
}

#[tauri::command]
fn get_planner_preferences(state: State<AppState>) -> Result<PlannerPreferences, String> {
    Ok(state.settings.preferences())
}

#[tauri::command]
fn set_planner_preferences(
    preferences: PlannerPreferences,
    state: State<AppState>,
) -> Result<PlannerPreferences, String> {
    state
        .settings
        .update(preferences)
        .map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Refhra backend starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            use tauri::Manager;

            let store = TaskStore::new();

            // Dev builds start with the sample plan loaded.
            #[cfg(debug_assertions)]
            store.seed_sample();

            app.manage(AppState {
                store,
                settings: SettingsStore::new(),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            create_task,
            update_task,
            delete_task,
            duplicate_task,
            get_task,
            list_tasks,
            list_tasks_for_date,
            get_priority_groups,
            get_date_heatmap,
            seed_sample_tasks,
            clear_tasks,
            build_day_segments,
            get_day_overview,
            get_hour_occupancy,
            get_planner_preferences,
            set_planner_preferences,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
