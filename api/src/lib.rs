pub mod cache;
pub mod client;
pub mod normalize;
pub mod page;
pub mod partition;
pub mod veto;

#[cfg(test)]
pub(crate) mod test_fixtures;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types: normalized match record, independent of page markup
// ---------------------------------------------------------------------------

/// One ban or pick from the map-veto note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetoEntry {
    pub team: String,
    pub map: String,
}

/// The parsed veto note. The order of `picks` is the order the maps were
/// played in; it is the only link between a map name and its block of
/// player rows on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetoLog {
    pub bans: Vec<VetoEntry>,
    pub picks: Vec<VetoEntry>,
    pub remaining: String,
}

/// One row of a game stats table. Every field is the raw cell text; a
/// missing cell yields an empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub name: String,
    pub country: String,
    pub agent: String,
    pub rating: String,
    pub acs: String,
    pub kills: String,
    pub deaths: String,
    pub assists: String,
    pub kd_diff: String,
    pub kast: String,
    pub adr: String,
    pub hs_percent: String,
    pub first_kills: String,
    pub first_deaths: String,
    pub fk_diff: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub name: String,
    pub series: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: Option<String>,
    pub logo: Option<String>,
    /// Rating digits captured from the `[1234]` suffix of the team label.
    pub elo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub team1: TeamInfo,
    pub team2: TeamInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesScore {
    pub team1: Option<String>,
    pub team2: Option<String>,
}

/// Which side the score markup declares as the series winner. Derived by
/// a best-effort position check, so live or oddly structured pages stay
/// `None` rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Team1,
    Team2,
}

/// Everything read from the match header block, veto note included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    pub event: EventInfo,
    pub date: Option<String>,
    pub time: Option<String>,
    pub teams: Teams,
    pub match_status: Option<String>,
    pub series_score: SeriesScore,
    pub series_type: Option<String>,
    pub winner: Option<Winner>,
    pub veto_info: VetoLog,
}

/// Player rows for a single map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    pub players: Vec<PlayerStat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overall {
    pub players: Vec<PlayerStat>,
}

/// The assembled record for one match id, before normalization. The
/// header fields sit at the top level of the serialized form; `maps`
/// keeps veto pick order, which serde_json's `preserve_order` carries
/// into the cached JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(flatten)]
    pub header: HeaderInfo,
    pub players: Vec<PlayerStat>,
    pub overall: Overall,
    pub maps: serde_json::Map<String, serde_json::Value>,
}
