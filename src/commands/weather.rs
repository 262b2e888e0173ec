// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{maybe_print_json, pretty_table};
use crate::weather::{StaticWeather, WeatherProvider, farming_advice};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    show(&StaticWeather, m)
}

pub fn show<P: WeatherProvider>(provider: &P, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if m.get_flag("forecast") {
        let days = provider.forecast()?;
        if !maybe_print_json(json_flag, jsonl_flag, &days)? {
            let today = super::today();
            let rows = days
                .into_iter()
                .enumerate()
                .map(|(i, d)| {
                    vec![
                        (today + chrono::Duration::days(i as i64))
                            .format("%a %b %e")
                            .to_string(),
                        d.condition,
                        format!("{}°F", d.high),
                        format!("{}°F", d.low),
                        format!("{}%", d.precipitation_chance),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Day", "Condition", "High", "Low", "Rain"], rows)
            );
        }
        return Ok(());
    }

    let now = provider.current()?;
    let advice = farming_advice(&now);
    if maybe_print_json(
        json_flag,
        jsonl_flag,
        &serde_json::json!({ "current": now, "advice": advice }),
    )? {
        return Ok(());
    }
    let rows = vec![
        vec!["Condition".into(), now.condition.clone()],
        vec!["Temperature".into(), format!("{}°F", now.temperature)],
        vec!["Humidity".into(), format!("{}%", now.humidity)],
        vec!["Wind".into(), format!("{} mph", now.wind_speed)],
        vec!["Rain chance".into(), format!("{}%", now.precipitation_chance)],
        vec!["UV index".into(), now.uv_index.to_string()],
        vec!["Visibility".into(), format!("{} mi", now.visibility)],
        vec!["Pressure".into(), format!("{:.2} in", now.pressure)],
        vec!["Dew point".into(), format!("{}°F", now.dew_point)],
    ];
    println!("{}", pretty_table(&["", "Now"], rows));
    for a in advice {
        println!("* {}", a.text);
    }
    Ok(())
}
