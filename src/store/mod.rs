//! In-memory task store.
//!
//! Mirrors the frontend's normalized shape: records by id plus an insertion
//! order list. Insertion order is load-bearing: it is the order the
//! segmentation pass processes tasks in, and it decides which of two
//! overlapping tasks loses a contested hour. Nothing is written to disk; a
//! restart starts from an empty planner.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::{NaiveDate, Utc};
use log::info;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{NewTask, Priority, Task, TaskError, TaskPatch};

#[derive(Default)]
struct TasksState {
    by_id: HashMap<String, Task>,
    order: Vec<String>,
}

pub struct TaskStore {
    data: RwLock<TasksState>,
}

/// Tasks bucketed by priority for the overview panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityGroups {
    pub high: Vec<Task>,
    pub medium: Vec<Task>,
    pub low: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(TasksState::default()),
        }
    }

    pub fn create(&self, input: NewTask) -> Result<Task, TaskError> {
        let (start_time, end_time) = input.validate()?;
        let now = Utc::now();

        let task = Task {
            id: Uuid::new_v4().to_string(),
            date: input.date,
            title: input.title,
            start_time,
            end_time,
            color: input.color,
            priority: input.priority,
            description: input.description,
            created_at: now,
            updated_at: now,
        };

        let mut state = self.data.write().unwrap();
        state.order.push(task.id.clone());
        state.by_id.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    /// Merge a partial update into an existing task. The merged result is
    /// re-validated as a whole, so a patch cannot leave a task in a state
    /// the create path would have rejected.
    pub fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, TaskError> {
        let mut state = self.data.write().unwrap();
        let current = state
            .by_id
            .get(id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let merged = NewTask {
            date: patch.date.unwrap_or(current.date),
            title: patch.title.unwrap_or_else(|| current.title.clone()),
            start_time: patch
                .start_time
                .unwrap_or_else(|| current.start_time.clone()),
            end_time: patch.end_time.unwrap_or_else(|| current.end_time.clone()),
            color: patch.color.unwrap_or_else(|| current.color.clone()),
            priority: patch.priority.unwrap_or(current.priority),
            description: patch.description.or_else(|| current.description.clone()),
        };
        let (start_time, end_time) = merged.validate()?;

        let task = Task {
            id: current.id.clone(),
            date: merged.date,
            title: merged.title,
            start_time,
            end_time,
            color: merged.color,
            priority: merged.priority,
            description: merged.description,
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        state.by_id.insert(id.to_string(), task.clone());
        Ok(task)
    }

    pub fn delete(&self, id: &str) -> Result<(), TaskError> {
        let mut state = self.data.write().unwrap();
        if state.by_id.remove(id).is_none() {
            return Err(TaskError::NotFound(id.to_string()));
        }
        state.order.retain(|task_id| task_id != id);
        Ok(())
    }

    /// Copy of an existing task with a fresh id and timestamps, appended at
    /// the end of the insertion order.
    pub fn duplicate(&self, id: &str) -> Result<Task, TaskError> {
        let mut state = self.data.write().unwrap();
        let source = state
            .by_id
            .get(id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let now = Utc::now();
        let copy = Task {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            ..source.clone()
        };

        state.order.push(copy.id.clone());
        state.by_id.insert(copy.id.clone(), copy.clone());
        Ok(copy)
    }

    pub fn get(&self, id: &str) -> Result<Task, TaskError> {
        let state = self.data.read().unwrap();
        state
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// All tasks in insertion order.
    pub fn list(&self) -> Vec<Task> {
        let state = self.data.read().unwrap();
        state
            .order
            .iter()
            .filter_map(|id| state.by_id.get(id).cloned())
            .collect()
    }

    /// One date's tasks, still in insertion order; the segmentation pass
    /// consumes this list as-is.
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<Task> {
        self.list()
            .into_iter()
            .filter(|task| task.date == date)
            .collect()
    }

    pub fn grouped_by_priority(&self) -> PriorityGroups {
        let mut groups = PriorityGroups {
            high: Vec::new(),
            medium: Vec::new(),
            low: Vec::new(),
        };

        for task in self.list() {
            match task.priority {
                Priority::High => groups.high.push(task),
                Priority::Medium => groups.medium.push(task),
                Priority::Low => groups.low.push(task),
            }
        }
        groups
    }

    /// Task count per date, keyed `"YYYY-MM-DD"`; feeds the heatmap.
    pub fn counts_by_date(&self) -> BTreeMap<String, u32> {
        let state = self.data.read().unwrap();
        let mut counts = BTreeMap::new();
        for task in state.by_id.values() {
            *counts.entry(task.date.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Seed the dev sample plan. Ids are minted normally, so seeding twice
    /// stacks a second copy, same as re-dispatching the seed action.
    pub fn seed_sample(&self) -> Vec<Task> {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid seed date");
        let samples = [
            ("Team Sync", "09:15", "09:45", "#60A5FA", Priority::Medium, Some("Daily sync")),
            ("Code Review", "10:00", "11:30", "#FACC15", Priority::High, None),
            ("Lunch", "13:00", "14:00", "#34D399", Priority::Low, None),
        ];

        let mut seeded = Vec::new();
        for (title, start, end, color, priority, description) in samples {
            let result = self.create(NewTask {
                date,
                title: title.to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                color: color.to_string(),
                priority,
                description: description.map(str::to_string),
            });
            match result {
                Ok(task) => seeded.push(task),
                Err(err) => info!("skipping sample task '{title}': {err}"),
            }
        }

        info!("Seeded {} sample tasks", seeded.len());
        seeded
    }

    pub fn clear(&self) {
        let mut state = self.data.write().unwrap();
        state.by_id.clear();
        state.order.clear();
    }
}
