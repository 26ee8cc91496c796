use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Date format used by the match results files (`dd/mm/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Outcome of a single match, as encoded in the result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    HomeWin,
    AwayWin,
    Draw,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown match result code: {0}")]
pub struct ParseMatchResultError(String);

impl FromStr for MatchResult {
    type Err = ParseMatchResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(MatchResult::HomeWin),
            "A" => Ok(MatchResult::AwayWin),
            "D" => Ok(MatchResult::Draw),
            other => Err(ParseMatchResultError(other.to_string())),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            MatchResult::HomeWin => "H",
            MatchResult::AwayWin => "A",
            MatchResult::Draw => "D",
        };
        f.write_str(code)
    }
}

/// One parsed row of a match results file.
///
/// Immutable once created; analyzers only ever borrow slices of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub result: MatchResult,
    pub extra: String,
}

/// Parses a `dd/mm/yyyy` date field.
pub fn parse_match_date(field: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(field, DATE_FORMAT)
}
