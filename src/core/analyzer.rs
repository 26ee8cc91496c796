use log::debug;

use crate::core::record::{MatchRecord, MatchResult};

/// A statistic computed over the full match record sequence.
///
/// Analyzers are pure: they borrow the records, never mutate them, and
/// produce a human-readable summary string for a report target.
pub trait Analyzer {
    fn run(&self, records: &[MatchRecord]) -> String;
}

/// Counts the games won by a configured team.
///
/// A game counts as a win when the team is the home side and the result is a
/// home win, or the away side and the result is an away win. The team is
/// always the one this analysis was configured with.
#[derive(Debug, Clone)]
pub struct WinsAnalysis {
    team: String,
}

impl WinsAnalysis {
    pub fn new(team: impl Into<String>) -> Self {
        Self { team: team.into() }
    }
}

impl Analyzer for WinsAnalysis {
    fn run(&self, records: &[MatchRecord]) -> String {
        debug!("Start of wins analysis for {}", self.team);

        let wins = records
            .iter()
            .filter(|record| {
                (record.home_team == self.team && record.result == MatchResult::HomeWin)
                    || (record.away_team == self.team && record.result == MatchResult::AwayWin)
            })
            .count();

        debug!("End of wins analysis: {wins} wins");

        format!("Team {} won {} number of games.", self.team, wins)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(home: &str, away: &str, goals: (u32, u32), result: MatchResult) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2018, 8, 10).unwrap(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals: goals.0,
            away_goals: goals.1,
            result,
            extra: String::new(),
        }
    }

    #[test]
    fn empty_input_reports_zero_wins() {
        let analysis = WinsAnalysis::new("Man United");
        assert_eq!(
            analysis.run(&[]),
            "Team Man United won 0 number of games."
        );
    }

    #[test]
    fn counts_home_and_away_wins_for_the_configured_team() {
        let records = vec![
            record("A", "B", (2, 1), MatchResult::HomeWin),
            record("B", "A", (0, 3), MatchResult::AwayWin),
        ];

        let analysis = WinsAnalysis::new("A");
        assert_eq!(analysis.run(&records), "Team A won 2 number of games.");
    }

    #[test]
    fn losses_and_draws_do_not_count() {
        let records = vec![
            record("A", "B", (2, 1), MatchResult::HomeWin),
            record("B", "A", (0, 3), MatchResult::AwayWin),
            record("B", "A", (1, 1), MatchResult::Draw),
        ];

        let analysis = WinsAnalysis::new("B");
        assert_eq!(analysis.run(&records), "Team B won 0 number of games.");
    }

    #[test]
    fn run_does_not_consume_or_mutate_records() {
        let records = vec![record("A", "B", (2, 1), MatchResult::HomeWin)];
        let before = records.clone();

        WinsAnalysis::new("A").run(&records);

        assert_eq!(records, before);
    }
}
