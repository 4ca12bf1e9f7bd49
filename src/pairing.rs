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

//! Adjacent-rank Swiss pairings.
//!
//! The standings are walked two at a time: first against second, third
//! against fourth, and so on. This keeps opponents at equal or nearly equal
//! records but does nothing to avoid rematches and does not look at strength
//! of schedule. Avoiding rematches needs a matching over the graph of players
//! who haven't met yet; [`rematches`] only reports them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::TournamentError,
    matches::Match,
    player::{Player, PlayerId},
    standings::{StandingEntry, compute_standings},
};

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    fn new(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.id1 == id || self.id2 == id
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} vs {} {}", self.id1, self.name1, self.id2, self.name2)
    }
}

/// What to do with the player left over when the count is odd.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ByePolicy {
    /// Fail with [`TournamentError::OddPlayerCount`].
    #[default]
    Reject,
    /// The lowest ranked player sits the round out.
    LowestRanked,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    pub pairings: Vec<Pairing>,
    pub bye: Option<StandingEntry>,
}

/// Pairs the players for the next round, best ranked first.
///
/// # Errors
///
/// If there is an odd number of players or a match references an unknown
/// player.
pub fn compute_pairings(
    players: &[Player],
    matches: &[Match],
) -> Result<Vec<Pairing>, TournamentError> {
    compute_round(players, matches, ByePolicy::Reject).map(|round| round.pairings)
}

/// # Errors
///
/// If a match references an unknown player, or there is an odd number of
/// players and `policy` is [`ByePolicy::Reject`].
pub fn compute_round(
    players: &[Player],
    matches: &[Match],
    policy: ByePolicy,
) -> Result<Round, TournamentError> {
    let mut standings = compute_standings(players, matches)?;

    let bye = if standings.len() % 2 == 1 {
        match policy {
            ByePolicy::Reject => {
                return Err(TournamentError::OddPlayerCount {
                    count: standings.len(),
                });
            }
            ByePolicy::LowestRanked => standings.pop(),
        }
    } else {
        None
    };

    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();

    Ok(Round { pairings, bye })
}

/// The pairings whose players already met in `matches`.
#[must_use]
pub fn rematches<'a>(pairings: &'a [Pairing], matches: &[Match]) -> Vec<&'a Pairing> {
    pairings
        .iter()
        .filter(|pairing| {
            matches
                .iter()
                .any(|game| game.between(pairing.id1, pairing.id2))
        })
        .collect()
}
