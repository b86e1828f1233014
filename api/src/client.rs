use std::fmt;
use std::time::Duration;

use log::debug;
use scraper::Html;
use serde_json::Value;

use crate::normalize::clean_record;
use crate::page::{self, ExtractError};
use crate::partition;
use crate::{MatchRecord, Overall};

pub type ApiResult<T> = Result<T, ApiError>;

const VLR_BASE: &str = "https://www.vlr.gg";

/// vlr.gg match-page client. Fetches a report page and runs the full
/// extraction pipeline: header + veto, player rows, map partition,
/// normalization.
#[derive(Debug, Clone)]
pub struct VlrApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for VlrApi {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("vlrmatch/0.1 (match report cache)")
                .build()
                .unwrap_or_default(),
            base_url: VLR_BASE.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure reaching the source.
    Network(reqwest::Error),
    /// The source answered with a non-200 status.
    Status(u16),
    /// The page parsed but lacks the required header/stats anchors.
    Incomplete,
    /// The stats regions yielded fewer rows than one full roster pair.
    NoPlayerData,
    /// A required element vanished mid-extraction.
    Extract(ExtractError),
    /// The assembled record failed to serialize.
    Serialize(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Status(code) => write!(f, "source returned status {code}"),
            ApiError::Incomplete => write!(f, "match page missing required structure"),
            ApiError::NoPlayerData => write!(f, "no player data found"),
            ApiError::Extract(e) => write!(f, "extraction failed: {e}"),
            ApiError::Serialize(e) => write!(f, "record serialization failed: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        ApiError::Extract(e)
    }
}

impl VlrApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different source root (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Fetch and extract the normalized record for one match id.
    ///
    /// The result is the cleaned JSON value: header facts at the top
    /// level, `players` grouped by map name, the `overall` roster
    /// slice, and `maps` keyed in veto pick order.
    pub async fn fetch_match(&self, id: u32) -> ApiResult<Value> {
        let url = format!("{}/{id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await.map_err(ApiError::Network)?;

        let document = Html::parse_document(&body);
        if !page::has_required_anchors(&document) {
            return Err(ApiError::Incomplete);
        }

        let header = page::extract_header(&document)?;
        let players = page::collect_players(&document);
        // One full table is two 5-player rosters; anything less means
        // the stats section carries no usable data.
        if players.len() < 10 {
            return Err(ApiError::NoPlayerData);
        }
        debug!("match {id}: {} player rows, {} picks", players.len(), header.veto_info.picks.len());

        let overall = partition::overall_players(&players);
        let maps = partition::partition_maps(&players, &header.veto_info.picks);
        let record = MatchRecord {
            header,
            players: overall.clone(),
            overall: Overall { players: overall },
            maps,
        };

        let record = serde_json::to_value(&record).map_err(ApiError::Serialize)?;
        Ok(clean_record(record))
    }
}
