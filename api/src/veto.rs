use std::sync::LazyLock;

use regex::Regex;

use crate::{VetoEntry, VetoLog};

static REMAINS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"remains(.+)").unwrap_or_else(|_| unreachable!()));

/// Parse the free-text veto note into bans, picks and the leftover map.
///
/// The note reads like
/// `"TL ban Haven; FNC ban Bind; TL pick Ascent; remains Split"`.
/// Clauses split on `;`; a clause is keyed on the first `ban`/`pick`
/// substring it contains, with the text before it as the team and the
/// text after as the map. Clauses with neither keyword are dropped.
/// Pick order is preserved: it is the ordinal sequence of maps played.
pub fn parse_veto(note: Option<&str>) -> VetoLog {
    let Some(text) = note else {
        return VetoLog::default();
    };
    if text.is_empty() {
        return VetoLog::default();
    }

    let remaining = REMAINS
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let mut bans = Vec::new();
    let mut picks = Vec::new();
    for part in text.split(';') {
        let clause = part.trim();
        if clause.contains("ban") {
            if let Some(entry) = split_clause(clause, "ban") {
                bans.push(entry);
            }
        } else if clause.contains("pick") {
            if let Some(entry) = split_clause(clause, "pick") {
                picks.push(entry);
            }
        }
    }

    VetoLog { bans, picks, remaining }
}

/// Text before the first keyword is the team, text between the first and
/// any second occurrence is the map. Malformed clauses yield `None`.
fn split_clause(clause: &str, keyword: &str) -> Option<VetoEntry> {
    let parts: Vec<&str> = clause.split(keyword).collect();
    if parts.len() < 2 {
        return None;
    }
    Some(VetoEntry {
        team: parts[0].trim().to_string(),
        map: parts[1].trim().to_string(),
    })
}
