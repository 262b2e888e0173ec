// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg;
use crate::utils::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_PAGE_ROWS, get_setting, set_setting};
use anyhow::{Result, bail};
use rusqlite::Connection;

const KNOWN_KEYS: [&str; 2] = ["currency_symbol", "report_page_rows"];

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let key = known_key(arg(sub, "key")?)?;
            let value = match get_setting(conn, key)? {
                Some(v) => v,
                None if key == "currency_symbol" => DEFAULT_CURRENCY_SYMBOL.to_string(),
                None => DEFAULT_PAGE_ROWS.to_string(),
            };
            println!("{} = {}", key, value);
        }
        Some(("set", sub)) => {
            let key = known_key(arg(sub, "key")?)?;
            let value = arg(sub, "value")?;
            if key == "report_page_rows" {
                match value.parse::<usize>() {
                    Ok(n) if n > 0 => {}
                    _ => bail!("report_page_rows must be a positive integer (got '{}')", value),
                }
            }
            set_setting(conn, key, value)?;
            println!("{} set to {}", key, value);
        }
        _ => {}
    }
    Ok(())
}

fn known_key(key: &str) -> Result<&'static str> {
    match KNOWN_KEYS.iter().find(|k| **k == key) {
        Some(k) => Ok(*k),
        None => bail!("Unknown setting '{}' (known: {})", key, KNOWN_KEYS.join(", ")),
    }
}
