// This file is part of swiss-tournament.
//
// swiss-tournament is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// swiss-tournament is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{cmp::Ordering, fmt};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::TournamentError,
    matches::Match,
    outcome::Outcome,
    player::{Player, PlayerId},
};

/// One player's record, derived from the match log.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct StandingEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u64,
    pub matches: u64,
    pub ties: u64,
}

impl StandingEntry {
    fn new(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn losses(&self) -> u64 {
        self.matches
            .saturating_sub(self.wins)
            .saturating_sub(self.ties)
    }

    /// Ranking order: more wins first, then more ties, then the lower id.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .wins
            .cmp(&self.wins)
            .then_with(|| other.ties.cmp(&self.ties))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for StandingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.id,
            self.name,
            self.wins,
            self.losses(),
            self.ties,
            self.matches
        )
    }
}

/// Ranks every player by their record in `matches`.
///
/// Players without matches are included with zero counts.
///
/// # Errors
///
/// If a match references a player that isn't in `players`, or two players
/// share an id.
pub fn compute_standings(
    players: &[Player],
    matches: &[Match],
) -> Result<Vec<StandingEntry>, TournamentError> {
    let mut index = FxHashMap::default();
    let mut standings = Vec::with_capacity(players.len());

    for player in players {
        if index.insert(player.id, standings.len()).is_some() {
            return Err(TournamentError::DuplicatePlayer { id: player.id });
        }
        standings.push(StandingEntry::new(player));
    }

    for game in matches {
        let Some(&one) = index.get(&game.player1()) else {
            return Err(TournamentError::UnknownPlayer { id: game.player1() });
        };
        let Some(&two) = index.get(&game.player2()) else {
            return Err(TournamentError::UnknownPlayer { id: game.player2() });
        };

        standings[one].matches += 1;
        standings[two].matches += 1;

        match game.outcome() {
            Outcome::Player1Won => standings[one].wins += 1,
            Outcome::Player2Won => standings[two].wins += 1,
            Outcome::Tie => {
                standings[one].ties += 1;
                standings[two].ties += 1;
            }
        }
    }

    standings.sort_unstable_by(StandingEntry::rank_cmp);
    Ok(standings)
}
