// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, id_arg, opt_arg, opt_id_arg};
use crate::models::Task;
use crate::store::{RecordStore, SqliteStore};
use crate::tasks::{TaskFilter, due_on, filter_tasks, toggle_completed};
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("done", sub)) => {
            let task = toggle_completed(&mut SqliteStore::new(conn), id_arg(sub, "id")?)?;
            let state = if task.completed { "completed" } else { "pending" };
            println!("Task #{} marked {}", task.id, state);
        }
        Some(("rm", sub)) => {
            let id = id_arg(sub, "id")?;
            RecordStore::<Task>::delete(&mut SqliteStore::new(conn), id)?;
            println!("Removed task {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let task = Task {
        id: 0,
        farm_id: id_arg(sub, "farm")?,
        crop_id: opt_id_arg(sub, "crop")?,
        title: arg(sub, "title")?.to_string(),
        task_type: arg(sub, "type")?.parse()?,
        due_date: parse_date(arg(sub, "due")?)?,
        notes: opt_arg(sub, "notes").map(str::to_string),
        completed: false,
    };
    let task = SqliteStore::new(conn).create(task)?;
    println!("Added task '{}' due {} (#{})", task.title, task.due_date, task.id);
    Ok(())
}

pub fn query_tasks(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Task>> {
    let all: Vec<Task> = SqliteStore::new(conn).get_all()?;
    let filter: TaskFilter = arg(sub, "status")?.parse()?;
    let mut tasks = filter_tasks(&all, filter);
    if let Some(day) = opt_arg(sub, "due") {
        let day = parse_date(day)?;
        tasks = due_on(&tasks, day).into_iter().cloned().collect();
    }
    Ok(tasks)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let tasks = query_tasks(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &tasks)? {
        let rows = tasks
            .into_iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.due_date.to_string(),
                    t.title,
                    t.task_type.slug().to_string(),
                    t.farm_id.to_string(),
                    if t.completed { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Due", "Title", "Type", "Farm", "Done"], rows)
        );
    }
    Ok(())
}
