//! Points per position, bench points, goals, assists, xG and xA.

use serde::Serialize;
use std::ops::AddAssign;
use tracing::info;

use crate::{
    cli::types::{Gameweek, GameweekWindow, Position},
    fpl::{source::DataSource, types::FixtureRecord},
    league::{ManagerRoster, PlayerDirectory},
    FplError, Result,
};

use super::Report;


/// Season total and month-window total of one statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Split<T> {
    pub total: T,
    pub month: T,
}

impl<T: AddAssign + Copy> Split<T> {
    fn add(&mut self, value: T, in_month: bool) {
        self.total += value;
        if in_month {
            self.month += value;
        }
    }
}

impl Split<f64> {
    fn rounded(self) -> Self {
        Self {
            total: round2(self.total),
            month: round2(self.month),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalOptions {
    /// Count the captain's bonus (multiplier 2) in positional points.
    pub captain_points_included: bool,
    /// Count benched picks as if they played (multiplier 1).
    pub bench_included: bool,
}

impl Default for PositionalOptions {
    fn default() -> Self {
        Self {
            captain_points_included: true,
            bench_included: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionalSummary {
    pub goalkeeper: Split<i32>,
    pub defender: Split<i32>,
    pub midfielder: Split<i32>,
    pub forward: Split<i32>,
    pub bench: Split<i32>,
    pub goals: Split<i32>,
    pub assists: Split<i32>,
    pub expected_goals: Split<f64>,
    pub expected_assists: Split<f64>,
}

impl PositionalSummary {
    fn position_mut(&mut self, position: Position) -> &mut Split<i32> {
        match position {
            Position::Goalkeeper => &mut self.goalkeeper,
            Position::Defender => &mut self.defender,
            Position::Midfielder => &mut self.midfielder,
            Position::Forward => &mut self.forward,
        }
    }

    /// Fold one pick's fixture into the accumulators.
    ///
    /// Benched picks (effective multiplier 0) always add their points to
    /// `bench`; with `bench_included` they then also count once towards
    /// their position and the attacking stats.
    pub fn add_pick(
        &mut self,
        raw_multiplier: u8,
        position: Position,
        fixture: &FixtureRecord,
        in_month: bool,
        options: PositionalOptions,
    ) {
        let mut multiplier = effective_multiplier(raw_multiplier, options.captain_points_included);
        let points = fixture.total_points;

        if multiplier == 0 {
            self.bench.add(points, in_month);
            if options.bench_included {
                multiplier = 1;
            }
        }

        self.position_mut(position)
            .add(points * i32::from(multiplier), in_month);

        if multiplier != 0 {
            self.goals.add(fixture.goals_scored, in_month);
            self.assists.add(fixture.assists, in_month);
            self.expected_goals.add(fixture.expected_goals, in_month);
            self.expected_assists.add(fixture.expected_assists, in_month);
        }
    }

    /// Round the expected-stat accumulators to two decimals.
    pub fn rounded(self) -> Self {
        Self {
            expected_goals: self.expected_goals.rounded(),
            expected_assists: self.expected_assists.rounded(),
            ..self
        }
    }
}

/// Captain multiplier 2 drops to 1 unless the captain bonus is counted.
/// Triple captain (3) is left alone.
pub fn effective_multiplier(raw: u8, captain_points_included: bool) -> u8 {
    if raw == 2 && !captain_points_included {
        1
    } else {
        raw
    }
}

/// Fixture of `gw` in a player's season history.
///
/// Tries slot `gw - 1` first and accepts it when its round matches, then
/// falls back to searching by round, so a history with a blank gameweek
/// still resolves correctly.
pub fn fixture_for_gameweek(history: &[FixtureRecord], gw: Gameweek) -> Option<&FixtureRecord> {
    let slot = usize::from(gw.as_u16()).checked_sub(1)?;
    match history.get(slot) {
        Some(fixture) if fixture.round == gw => Some(fixture),
        _ => history.iter().find(|f| f.round == gw),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keyed by team name. Walks gameweeks `1..=through` and every pick of
/// every squad.
pub async fn compute(
    source: &dyn DataSource,
    roster: &ManagerRoster,
    directory: &PlayerDirectory,
    month: GameweekWindow,
    through: Gameweek,
    options: PositionalOptions,
) -> Result<Report<PositionalSummary>> {
    let mut report = Report::new();

    for (manager_id, manager) in roster.iter() {
        let mut summary = PositionalSummary::default();

        for gw in through.season_to_date() {
            let picks = source.get_manager_picks(manager_id, gw).await?;

            for pick in &picks.picks {
                let position = directory.position_of(pick.element)?;
                let history = source.get_player_history(pick.element).await?;
                let fixture = fixture_for_gameweek(&history, gw).ok_or(
                    FplError::MisalignedHistory {
                        player: pick.element,
                        gameweek: gw,
                        len: history.len(),
                    },
                )?;

                summary.add_pick(pick.multiplier, position, fixture, month.contains(gw), options);
            }
        }

        report.insert(manager.team.clone(), summary.rounded());
    }

    info!(%month, %through, managers = report.len(), "positional report computed");
    Ok(report)
}
