//! Status labels, kickoff formatting and plain-text rendering of the two screens.

use std::fmt::{self, Display, Write};

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{League, Match, MatchStatus};
use crate::ordering::MatchBoard;

/// `en-GB` day, short month, 24-hour time.
pub const LONG_DATE_FORMAT: &str = "%d %b, %H:%M";
/// `en-GB` 24-hour time.
pub const SHORT_TIME_FORMAT: &str = "%H:%M";

/// Format a kickoff as e.g. `05 Mar, 14:30` in `tz`.
pub fn format_date<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format(LONG_DATE_FORMAT)
        .to_string()
}

/// Format a kickoff as e.g. `14:30` in `tz`.
pub fn format_time<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format(SHORT_TIME_FORMAT)
        .to_string()
}

/// Background of a match card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Live,
    Neutral,
}

impl Accent {
    pub const fn color(self) -> &'static str {
        match self {
            Accent::Live => "#ff6347",
            Accent::Neutral => "white",
        }
    }
}

/// Human readable status of a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLabel {
    Completed,
    Live,
    HalfTime,
    Postponed,
    Kickoff(String),
    Unknown,
}

impl StatusLabel {
    pub fn for_match<Tz>(m: &Match, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match m.status {
            MatchStatus::Completed => StatusLabel::Completed,
            MatchStatus::Live => StatusLabel::Live,
            MatchStatus::Pause => StatusLabel::HalfTime,
            MatchStatus::Postponed => StatusLabel::Postponed,
            MatchStatus::Scheduled => StatusLabel::Kickoff(format_date(&m.date_time, tz)),
            MatchStatus::Unknown => StatusLabel::Unknown,
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            StatusLabel::Live => Accent::Live,
            _ => Accent::Neutral,
        }
    }
}

impl Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLabel::Completed => f.write_str("Completed"),
            StatusLabel::Live => f.write_str("🔴 Live"),
            StatusLabel::HalfTime => f.write_str("Half Time"),
            StatusLabel::Postponed => f.write_str("Postponed"),
            StatusLabel::Kickoff(when) => f.write_str(when),
            StatusLabel::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Precomputed fields for rendering one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCard {
    pub home: String,
    pub away: String,
    pub home_badge: char,
    pub away_badge: char,
    /// Score such as `2:1`, or the kickoff time before the match starts.
    pub score_slot: String,
    pub status_label: StatusLabel,
    pub accent: Accent,
}

impl MatchCard {
    pub fn from_match<Tz>(m: &Match, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let status_label = StatusLabel::for_match(m, tz);
        let score_slot = match m.status {
            MatchStatus::Scheduled => format_time(&m.date_time, tz),
            _ => format!(
                "{}:{}",
                score_text(m.score_team_one),
                score_text(m.score_team_two)
            ),
        };
        MatchCard {
            home: m.home.clone(),
            away: m.away.clone(),
            home_badge: badge(&m.home),
            away_badge: badge(&m.away),
            score_slot,
            accent: status_label.accent(),
            status_label,
        }
    }
}

fn score_text(score: Option<u32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

fn badge(name: &str) -> char {
    name.chars().next().unwrap_or('?')
}

/// Render the match screen. The live section only appears when it has entries.
pub fn render_board<Tz>(board: &MatchBoard, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if !board.live.is_empty() {
        out.push_str("Live Matches\n");
        for m in &board.live {
            push_card(&mut out, &MatchCard::from_match(m, tz));
        }
        out.push('\n');
    }
    out.push_str("Matches\n");
    for m in &board.others {
        push_card(&mut out, &MatchCard::from_match(m, tz));
    }
    out
}

fn push_card(out: &mut String, card: &MatchCard) {
    let marker = match card.accent {
        Accent::Live => '*',
        Accent::Neutral => ' ',
    };
    let _ = writeln!(
        out,
        "{marker} [{}] {:<20} {:^7} {:>20} [{}]  {}",
        card.home_badge, card.home, card.score_slot, card.away, card.away_badge, card.status_label
    );
}

/// Render the league header and its standings table.
///
/// Teams are printed in the order given; sort them first.
pub fn render_standings(league: &League) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", league.name);
    let _ = writeln!(out, "{}", league.year);
    if league.teams.is_empty() {
        out.push_str("No teams available\n");
        return out;
    }
    for (position, team) in league.teams.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {:<28} {:>4}", position + 1, team.name, team.points);
    }
    out
}
