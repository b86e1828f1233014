//! Positional assignment of player rows to maps. The page emits rows in
//! contiguous 10-row blocks (two 5-player rosters) per stats region,
//! and the regions appear in veto pick order; nothing in the data links
//! a row to a map except that position.

use serde_json::{Map, Value, json};

use crate::{PlayerStat, VetoEntry};

/// The 10-row block at ordinal `index`, clamped to the available rows.
fn block(players: &[PlayerStat], index: usize) -> &[PlayerStat] {
    let start = (index * 10).min(players.len());
    let end = (index * 10 + 10).min(players.len());
    &players[start..end]
}

/// The "overall" roster slice: rows `[0,10)` concatenated with
/// `[20,30)`. The skipped middle block is the source layout's own
/// convention; reproduce it, do not repair it (see DESIGN.md).
pub fn overall_players(players: &[PlayerStat]) -> Vec<PlayerStat> {
    let mut out = block(players, 0).to_vec();
    out.extend_from_slice(block(players, 2));
    out
}

/// One entry per veto pick, in pick order: pick `i` owns rows
/// `[i*10, i*10+10)`. Callers guarantee at least 10 rows exist overall;
/// slices past the end simply come out empty.
pub fn partition_maps(players: &[PlayerStat], picks: &[VetoEntry]) -> Map<String, Value> {
    let mut maps = Map::new();
    for (index, pick) in picks.iter().enumerate() {
        maps.insert(pick.map.clone(), json!({ "players": block(players, index) }));
    }
    maps
}
