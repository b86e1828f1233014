//! Synthetic match-page markup for unit tests, shaped like the real
//! page: header block, veto note, and stats regions of 10 rows each.

pub(crate) struct PageOptions {
    pub event_series: &'static str,
    pub team1_elo: &'static str,
    pub team2_won: bool,
    pub scrambled_score: bool,
    pub bare_rows: bool,
    pub tables: usize,
    pub rows_per_table: usize,
    pub veto_note: Option<&'static str>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            event_series: "Playoffs: Grand Final",
            team1_elo: "[1835]",
            team2_won: false,
            scrambled_score: false,
            bare_rows: false,
            tables: 3,
            rows_per_table: 10,
            veto_note: Some(
                "Alpha ban Breeze; Beta ban Fracture; Alpha pick Haven; \
                 Beta pick Bind; remains Split",
            ),
        }
    }
}

pub(crate) fn match_page(opts: &PageOptions) -> String {
    let score = if opts.scrambled_score {
        "<span>1</span>\
         <span class=\"match-header-vs-score-winner\">2</span>\
         <span class=\"match-header-vs-score-colon\">:</span>\
         <span class=\"match-header-vs-score-loser\">1</span>"
            .to_string()
    } else if opts.team2_won {
        "<span class=\"match-header-vs-score-loser\">1</span>\
         <span class=\"match-header-vs-score-colon\">:</span>\
         <span class=\"match-header-vs-score-winner\">2</span>"
            .to_string()
    } else {
        "<span class=\"match-header-vs-score-winner\">2</span>\
         <span class=\"match-header-vs-score-colon\">:</span>\
         <span class=\"match-header-vs-score-loser\">1</span>"
            .to_string()
    };

    let note = opts
        .veto_note
        .map(|n| format!("<div class=\"match-header-note\">{n}</div>"))
        .unwrap_or_default();

    let mut tables = String::new();
    for t in 0..opts.tables {
        let game_id = if t == 0 { "all".to_string() } else { t.to_string() };
        tables.push_str(&format!("<div class=\"vm-stats-game\" data-game-id=\"{game_id}\"><table><tbody>"));
        for r in 0..opts.rows_per_table {
            tables.push_str(&stat_row(&format!("p{t}-{r}"), opts.bare_rows));
        }
        tables.push_str("</tbody></table></div>");
    }

    format!(
        r#"<html><body>
<div class="match-header">
  <div class="match-header-super">
    <a class="match-header-event">
      <img src="//img/event.png">
      <div>Champions Tour 2024</div>
      <div class="match-header-event-series">{series}</div>
    </a>
    <div class="match-header-date">
      <div class="moment-tz-convert">Saturday, June 1st</div>
      <div class="moment-tz-convert">3:00 PM CEST</div>
    </div>
  </div>
  <div class="match-header-vs">
    <a class="match-header-link wf-link-hover mod-1">
      <img src="//img/team-alpha.png">
      <div class="wf-title-med">Team Alpha</div>
      <div class="match-header-link-name-elo">{elo1}</div>
    </a>
    <div class="match-header-vs-score">{score}</div>
    <div class="match-header-vs-note">final</div>
    <div class="match-header-vs-note">Bo3</div>
    <a class="match-header-link wf-link-hover mod-2">
      <img src="//img/team-beta.png">
      <div class="wf-title-med">Team Beta</div>
      <div class="match-header-link-name-elo">[1790]</div>
    </a>
  </div>
  {note}
</div>
{tables}
</body></html>"#,
        series = opts.event_series,
        elo1 = opts.team1_elo,
        score = score,
        note = note,
        tables = tables,
    )
}

fn stat_row(name: &str, bare: bool) -> String {
    if bare {
        return format!(
            "<tr><td class=\"mod-player\"><div class=\"text-of\">{name}</div></td></tr>"
        );
    }
    format!(
        "<tr>\
         <td class=\"mod-player\"><div class=\"text-of\">{name}</div>\
           <i class=\"flag\" title=\"Sweden\"></i></td>\
         <td class=\"mod-agents\"><img title=\"Jett\"></td>\
         <td class=\"mod-stat\"><span class=\"side mod-both\">1.25</span></td>\
         <td class=\"mod-stat\"><span class=\"side mod-both\">250</span></td>\
         <td class=\"mod-stat mod-vlr-kills\"><span class=\"side mod-both\">20</span></td>\
         <td class=\"mod-stat mod-vlr-deaths\"><span class=\"side mod-both\">14</span></td>\
         <td class=\"mod-stat mod-vlr-assists\"><span class=\"side mod-both\">5</span></td>\
         <td class=\"mod-stat mod-kd-diff\"><span class=\"side mod-both\">+6</span></td>\
         <td class=\"mod-stat\"><span class=\"side mod-both\">75%</span></td>\
         <td class=\"mod-stat\"><span class=\"side mod-both\">160</span></td>\
         <td class=\"mod-stat\"><span class=\"side mod-both\">30%</span></td>\
         <td class=\"mod-stat mod-fb\"><span class=\"side mod-both\">3</span></td>\
         <td class=\"mod-stat mod-fd\"><span class=\"side mod-both\">1</span></td>\
         <td class=\"mod-stat mod-fk-diff\"><span class=\"side mod-both\">+2</span></td>\
         </tr>"
    )
}
