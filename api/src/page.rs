//! Selector paths for the vlr.gg match page and the extraction of
//! header facts and player rows from the parsed document.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::veto::parse_veto;
use crate::{EventInfo, HeaderInfo, PlayerStat, SeriesScore, TeamInfo, Teams, Winner};

/// e.g. `[1835]` appended to the team label on event pages.
static ELO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap_or_else(|_| unreachable!()));
static WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|_| unreachable!()));

/// A selector literal the page layer vouches for at compile time.
fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| unreachable!("static selector: {css}"))
}

/// A required element was missing from a page that passed the anchor
/// check; the caller maps this to a processing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractError {
    pub context: &'static str,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element not found: {}", self.context)
    }
}

impl std::error::Error for ExtractError {}

/// The anchors a usable match page must carry: the event header, at
/// least one team link and at least one stats region. Pages without
/// them are incomplete (match not found, upcoming, or layout change).
pub fn has_required_anchors(document: &Html) -> bool {
    document.select(&sel(".match-header-event")).next().is_some()
        && document.select(&sel(".match-header-link.mod-1")).next().is_some()
        && document.select(&sel(".vm-stats-game")).next().is_some()
}

// ---------------------------------------------------------------------------
// Header extraction
// ---------------------------------------------------------------------------

pub fn extract_header(document: &Html) -> Result<HeaderInfo, ExtractError> {
    let event_name = first_text(document, ".match-header-event div")
        .ok_or(ExtractError { context: "event name (.match-header-event div)" })?;
    let event_series = first_text(document, ".match-header-event-series")
        .map(|s| WS.replace_all(&s, " ").into_owned())
        .ok_or(ExtractError { context: "event series (.match-header-event-series)" })?;
    let event = EventInfo {
        name: event_name,
        series: event_series,
        logo: first_attr(document, ".match-header-event img", "src"),
    };

    let dates_sel = sel(".match-header-date .moment-tz-convert");
    let mut dates = document.select(&dates_sel);
    let date = dates.next().map(element_text);
    let time = dates.next().map(element_text);

    let teams = Teams {
        team1: extract_team(document, "mod-1"),
        team2: extract_team(document, "mod-2"),
    };

    let notes_sel = sel(".match-header-vs-note");
    let mut notes = document.select(&notes_sel);
    let match_status = notes.next().map(element_text);
    let series_type = notes.next().map(element_text);

    let series_score = SeriesScore {
        team1: first_text(document, ".match-header-vs-score-winner"),
        team2: first_text(document, ".match-header-vs-score-loser"),
    };

    let winner = extract_winner(document);

    let veto_text = first_text(document, ".match-header-note");
    let veto_info = parse_veto(veto_text.as_deref());

    Ok(HeaderInfo {
        event,
        date,
        time,
        teams,
        match_status,
        series_score,
        series_type,
        winner,
        veto_info,
    })
}

fn extract_team(document: &Html, side: &str) -> TeamInfo {
    let name = first_text(document, &format!(".match-header-link.{side} .wf-title-med"));
    let logo = first_attr(document, &format!(".match-header-link.{side} img"), "src");
    let elo = first_text(document, &format!(".match-header-link.{side} .match-header-link-name-elo"))
        .and_then(|text| {
            ELO.captures(&text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        });
    TeamInfo { name, logo, elo }
}

/// Best-effort winner heuristic: the element flagged as the winning
/// score must be span 0 (team1) or span 2 (team2) of the score block.
/// Any other layout (live match, draw markup, redesign) yields `None`.
fn extract_winner(document: &Html) -> Option<Winner> {
    let winner = document.select(&sel(".match-header-vs-score-winner")).next()?;
    let spans: Vec<ElementRef> = document.select(&sel(".match-header-vs-score span")).collect();
    if spans.first().map(|s| s.id()) == Some(winner.id()) {
        Some(Winner::Team1)
    } else if spans.get(2).map(|s| s.id()) == Some(winner.id()) {
        Some(Winner::Team2)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Player rows
// ---------------------------------------------------------------------------

/// Walk every stats region in document order and collect their rows.
pub fn collect_players(document: &Html) -> Vec<PlayerStat> {
    let mut players = Vec::new();
    for game in document.select(&sel(".vm-stats-game")) {
        extract_players(game, &mut players);
    }
    players
}

/// Append one `PlayerStat` per data row of one stats region, in document
/// order. A missing cell yields an empty string; no row is ever dropped
/// here; inclusion is decided by the partitioner's positional layout.
pub fn extract_players(game: ElementRef, players: &mut Vec<PlayerStat>) {
    let row_sel = sel("tbody tr");
    let name_sel = sel(".mod-player .text-of");
    let flag_sel = sel(".mod-player .flag");
    let agent_sel = sel(".mod-agents img");
    let rating_sel = sel(".mod-stat:nth-child(3) .side.mod-both");
    let acs_sel = sel(".mod-stat:nth-child(4) .side.mod-both");
    let kills_sel = sel(".mod-vlr-kills .side.mod-both");
    let deaths_sel = sel(".mod-vlr-deaths .side.mod-both");
    let assists_sel = sel(".mod-vlr-assists .side.mod-both");
    let kd_diff_sel = sel(".mod-kd-diff .side.mod-both");
    let kast_sel = sel(".mod-stat:nth-child(9) .side.mod-both");
    let adr_sel = sel(".mod-stat:nth-child(10) .side.mod-both");
    let hs_sel = sel(".mod-stat:nth-child(11) .side.mod-both");
    let fb_sel = sel(".mod-fb .side.mod-both");
    let fd_sel = sel(".mod-fd .side.mod-both");
    let fk_diff_sel = sel(".mod-fk-diff .side.mod-both");

    for row in game.select(&row_sel) {
        let text = |selector: &Selector| -> String {
            row.select(selector).next().map(element_text).unwrap_or_default()
        };
        let attr = |selector: &Selector, name: &str| -> String {
            row.select(selector)
                .next()
                .and_then(|e| e.value().attr(name))
                .unwrap_or_default()
                .to_string()
        };

        players.push(PlayerStat {
            name: text(&name_sel),
            country: attr(&flag_sel, "title"),
            agent: attr(&agent_sel, "title"),
            rating: text(&rating_sel),
            acs: text(&acs_sel),
            kills: text(&kills_sel),
            deaths: text(&deaths_sel),
            assists: text(&assists_sel),
            kd_diff: text(&kd_diff_sel),
            kast: text(&kast_sel),
            adr: text(&adr_sel),
            hs_percent: text(&hs_sel),
            first_kills: text(&fb_sel),
            first_deaths: text(&fd_sel),
            fk_diff: text(&fk_diff_sel),
        });
    }
}

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    document.select(&sel(css)).next().map(element_text)
}

fn first_attr(document: &Html, css: &str, name: &str) -> Option<String> {
    document
        .select(&sel(css))
        .next()
        .and_then(|e| e.value().attr(name))
        .map(str::to_string)
}
