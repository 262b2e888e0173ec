// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, id_arg, today};
use crate::layout::{apply_assignment, field_occupancy, generate_field_layout, plan_assignment};
use crate::models::{Farm, SizeUnit};
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, bail};
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = id_arg(sub, "id")?;
            RecordStore::<Farm>::delete(&mut SqliteStore::new(conn), id)?;
            println!("Removed farm {}", id);
        }
        Some(("layout", sub)) => layout(conn, sub)?,
        Some(("assign", sub)) => assign(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let size = parse_decimal(arg(sub, "size")?)?;
    if size <= Decimal::ZERO {
        bail!("Farm size must be positive (got {})", size);
    }
    let size_unit: SizeUnit = arg(sub, "unit")?.parse()?;
    let farm = Farm {
        id: 0,
        name: arg(sub, "name")?.to_string(),
        location: arg(sub, "location")?.to_string(),
        size,
        size_unit,
    };
    let farm = SqliteStore::new(conn).create(farm)?;
    tracing::info!(farm = farm.id, "farm added");
    println!(
        "Added farm '{}' ({} {}) as #{}",
        farm.name,
        farm.size,
        farm.size_unit.slug(),
        farm.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let farms: Vec<Farm> = SqliteStore::new(conn).get_all()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &farms)? {
        let rows = farms
            .into_iter()
            .map(|f| {
                vec![
                    f.id.to_string(),
                    f.name,
                    f.location,
                    f.size.to_string(),
                    f.size_unit.slug().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Location", "Size", "Unit"], rows)
        );
    }
    Ok(())
}

fn layout(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let farm: Farm = store.get_by_id(id_arg(sub, "id")?)?;
    let fields = generate_field_layout(&farm);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &fields)? {
        return Ok(());
    }
    let crops = store.crops_for_farm(farm.id)?;
    let rows = field_occupancy(&fields, farm.id, &crops)
        .into_iter()
        .map(|(f, crop)| {
            vec![
                f.name.clone(),
                format!("{} {}", f.size, farm.size_unit.slug()),
                format!("{}%, {}%", f.position.x, f.position.y),
                crop.map(|c| format!("{} ({})", c.crop_type, c.status.slug()))
                    .unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Field", "Size", "Position", "Crop"], rows)
    );
    Ok(())
}

fn assign(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut store = SqliteStore::new(conn);
    let farm: Farm = store.get_by_id(id_arg(sub, "id")?)?;
    let field = arg(sub, "field")?;
    let crop_type = arg(sub, "crop")?;
    let crops = store.crops_for_farm(farm.id)?;
    let plan = plan_assignment(&farm, &crops, field, crop_type, today())?;
    let crop = apply_assignment(&mut store, plan)?;
    println!("Assigned {} to {} (crop #{})", crop.crop_type, crop.field, crop.id);
    Ok(())
}
