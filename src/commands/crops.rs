// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, id_arg, opt_arg, opt_id_arg};
use crate::models::{Crop, CropStatus};
use crate::store::{RecordStore, SqliteStore};
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = id_arg(sub, "id")?;
            RecordStore::<Crop>::delete(&mut SqliteStore::new(conn), id)?;
            println!("Removed crop {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let planting_date = parse_date(arg(sub, "planted")?)?;
    let expected_harvest = parse_date(arg(sub, "harvest")?)?;
    if expected_harvest < planting_date {
        bail!(
            "Expected harvest {} is before planting date {}",
            expected_harvest,
            planting_date
        );
    }
    let crop = Crop {
        id: 0,
        farm_id: id_arg(sub, "farm")?,
        crop_type: arg(sub, "type")?.to_string(),
        field: arg(sub, "field")?.to_string(),
        planting_date,
        expected_harvest,
        status: arg(sub, "status")?.parse()?,
        notes: opt_arg(sub, "notes").map(str::to_string),
    };
    let crop = SqliteStore::new(conn).create(crop)?;
    println!(
        "Added {} on {} (crop #{})",
        crop.crop_type, crop.field, crop.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    let mut crops: Vec<Crop> = match opt_id_arg(sub, "farm")? {
        Some(farm_id) => store.crops_for_farm(farm_id)?,
        None => store.get_all()?,
    };
    if let Some(status) = opt_arg(sub, "status") {
        let status: CropStatus = status.parse()?;
        crops.retain(|c| c.status == status);
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &crops)? {
        let rows = crops
            .into_iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.farm_id.to_string(),
                    c.crop_type,
                    c.field,
                    c.planting_date.to_string(),
                    c.expected_harvest.to_string(),
                    c.status.slug().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Farm", "Crop", "Field", "Planted", "Harvest", "Status"],
                rows
            )
        );
    }
    Ok(())
}
