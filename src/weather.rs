// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    pub temperature: i32, // °F
    pub condition: String,
    pub humidity: u32,
    pub wind_speed: u32,
    pub precipitation_chance: u32,
    pub uv_index: u32,
    pub visibility: u32,
    pub pressure: f64,
    pub dew_point: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub precipitation_chance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub level: AdviceLevel,
    pub text: &'static str,
}

pub trait WeatherProvider {
    fn current(&self) -> Result<WeatherReading>;
    fn forecast(&self) -> Result<Vec<ForecastDay>>;
}

/// Fixed sample conditions, used until a live feed is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticWeather;

impl WeatherProvider for StaticWeather {
    fn current(&self) -> Result<WeatherReading> {
        Ok(WeatherReading {
            temperature: 72,
            condition: "sunny".into(),
            humidity: 65,
            wind_speed: 8,
            precipitation_chance: 20,
            uv_index: 6,
            visibility: 10,
            pressure: 30.15,
            dew_point: 58,
        })
    }

    fn forecast(&self) -> Result<Vec<ForecastDay>> {
        let days = [
            (75, 62, "sunny", 10),
            (78, 65, "partly-cloudy", 25),
            (73, 60, "cloudy", 40),
            (69, 58, "rainy", 80),
            (71, 59, "partly-cloudy", 30),
            (76, 63, "sunny", 15),
            (79, 66, "sunny", 5),
        ];
        Ok(days
            .into_iter()
            .map(|(high, low, condition, precipitation_chance)| ForecastDay {
                high,
                low,
                condition: condition.to_string(),
                precipitation_chance,
            })
            .collect())
    }
}

pub fn farming_advice(w: &WeatherReading) -> Vec<Advice> {
    let mut advice = Vec::new();
    if w.precipitation_chance > 70 {
        advice.push(Advice {
            level: AdviceLevel::Info,
            text: "High chance of rain - consider postponing irrigation",
        });
    }
    if w.temperature > 85 {
        advice.push(Advice {
            level: AdviceLevel::Warning,
            text: "High temperature - ensure adequate watering for crops",
        });
    }
    if w.wind_speed > 15 {
        advice.push(Advice {
            level: AdviceLevel::Warning,
            text: "Strong winds - avoid spraying pesticides or fertilizers",
        });
    }
    if w.humidity < 30 {
        advice.push(Advice {
            level: AdviceLevel::Info,
            text: "Low humidity - monitor crop stress and increase watering",
        });
    }
    advice
}
