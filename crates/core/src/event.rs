// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push-feed update records.
//!
//! Each SSE payload is a JSON array of events. Every event carries a `data`
//! array of partial resource records:
//!
//! ```json
//! [{"type":"update","id":"...","data":[
//!     {"type":"grouped_light","id":"<uuid>","on":{"on":true}},
//!     {"type":"grouped_light","id":"<uuid>","dimming":{"brightness":42.5}}
//! ]}]
//! ```
//!
//! Only the payload as a whole must be valid JSON. Events and records that do
//! not have the expected shape are skipped, so one odd resource type cannot
//! hide an update for the controlled light.

use serde::Deserialize;
use serde_json::Value;

use crate::light::LightUpdate;

/// Resource type of the controlled unit.
pub const GROUPED_LIGHT: &str = "grouped_light";

/// One partial resource record from an update event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceUpdate {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub on: Option<OnField>,
    #[serde(default)]
    pub dimming: Option<DimmingField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OnField {
    #[serde(default)]
    pub on: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DimmingField {
    #[serde(default)]
    pub brightness: Option<f64>,
}

impl ResourceUpdate {
    /// Returns true if this record describes the given grouped light.
    pub fn targets(&self, device_id: &str) -> bool {
        self.kind == GROUPED_LIGHT && self.id == device_id
    }

    /// The fields this record carries, as a partial light update.
    pub fn light_update(&self) -> LightUpdate {
        LightUpdate {
            on: self.on.and_then(|o| o.on),
            brightness: self.dimming.and_then(|d| d.brightness),
        }
    }
}

/// Parses one SSE payload into its resource records, in order.
pub fn parse_batch(payload: &str) -> serde_json::Result<Vec<ResourceUpdate>> {
    let events: Vec<Value> = serde_json::from_str(payload)?;

    let records = events
        .into_iter()
        .filter_map(|mut event| match event.get_mut("data").map(Value::take) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        })
        .flatten()
        .filter_map(|item| serde_json::from_value::<ResourceUpdate>(item).ok())
        .collect();

    Ok(records)
}

/// Light updates in `records` that target `device_id`, skipping empty ones.
pub fn updates_for(records: &[ResourceUpdate], device_id: &str) -> Vec<LightUpdate> {
    records
        .iter()
        .filter(|r| r.targets(device_id))
        .map(ResourceUpdate::light_update)
        .filter(|u| !u.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
