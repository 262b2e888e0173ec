// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FarmError, Result};
use crate::models::Task;
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl FromStr for TaskFilter {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" | "done" => Ok(TaskFilter::Completed),
            other => Err(FarmError::InvalidValue {
                what: "task filter",
                value: other.to_string(),
            }),
        }
    }
}

/// Matching tasks ordered by due date, earliest first.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|t| match filter {
            TaskFilter::All => true,
            TaskFilter::Pending => !t.completed,
            TaskFilter::Completed => t.completed,
        })
        .cloned()
        .collect();
    out.sort_by_key(|t| t.due_date);
    out
}

pub fn due_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.due_date == day).collect()
}

pub fn toggle_completed<S: RecordStore<Task>>(store: &mut S, id: i64) -> Result<Task> {
    let task = store.get_by_id(id)?;
    let completed = !task.completed;
    tracing::info!(task = id, completed, "task completion toggled");
    store.update(id, Task { completed, ..task })
}
