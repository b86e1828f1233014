//! Record cleanup: a recursive, order-preserving walk that collapses
//! whitespace runs in keys and string values, and re-derives the
//! per-map player grouping wherever a `players` array sits next to a
//! veto log with picks. In an assembled record that is the top level
//! only; the grouping there replaces the flat roster list, and cached
//! records depend on that output shape (see DESIGN.md).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Tab/newline/carriage-return runs collapse to one space. Plain
/// interior spaces are left alone; only the run class the source
/// format used is touched.
static WS_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\r]+").unwrap_or_else(|_| unreachable!()));

fn clean_text(s: &str) -> String {
    WS_RUNS.replace_all(s, " ").trim().to_string()
}

/// Normalize an assembled record (or any fragment of one).
pub fn clean_record(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(clean_record).collect()),
        Value::Object(fields) => clean_object(fields),
        Value::String(s) => Value::String(clean_text(&s)),
        other => other,
    }
}

fn clean_object(fields: Map<String, Value>) -> Value {
    // Map names governing regrouping at this level, if the object
    // carries a veto log with a picks list.
    let pick_maps: Option<Vec<String>> = fields
        .get("vetoInfo")
        .and_then(|veto| veto.get("picks"))
        .and_then(Value::as_array)
        .map(|picks| {
            picks
                .iter()
                .map(|pick| {
                    pick.get("map")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                })
                .collect()
        });

    let mut result = Map::new();
    for (key, value) in fields {
        let clean_key = clean_text(&key);
        if clean_key == "players"
            && let (Some(pick_maps), Value::Array(players)) = (&pick_maps, &value)
        {
            result.insert(clean_key, group_players(pick_maps, players));
        } else {
            result.insert(clean_key, clean_record(value));
        }
    }
    Value::Object(result)
}

/// Replace a flat player array with `{mapName: rows[i*10..i*10+10]}` in
/// pick order. Once grouped, the `players` value is no longer an array,
/// so a second pass leaves it alone and the walk stays idempotent.
fn group_players(pick_maps: &[String], players: &[Value]) -> Value {
    let mut grouped = Map::new();
    for (map_index, map_name) in pick_maps.iter().enumerate() {
        let start = (map_index * 10).min(players.len());
        let end = (map_index * 10 + 10).min(players.len());
        let rows = players[start..end].iter().cloned().map(clean_record).collect();
        grouped.insert(map_name.clone(), Value::Array(rows));
    }
    Value::Object(grouped)
}
