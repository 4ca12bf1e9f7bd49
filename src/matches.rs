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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::TournamentError, outcome::Outcome, player::PlayerId};

/// The result of one finished match. Immutable once recorded.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "UncheckedMatch")]
pub struct Match {
    player1: PlayerId,
    player2: PlayerId,
    outcome: Outcome,
}

impl Match {
    /// # Errors
    ///
    /// If `player1` and `player2` are the same player.
    pub fn new(
        player1: PlayerId,
        player2: PlayerId,
        outcome: Outcome,
    ) -> Result<Self, TournamentError> {
        if player1 == player2 {
            return Err(TournamentError::InvalidMatch { id: player1 });
        }

        Ok(Self {
            player1,
            player2,
            outcome,
        })
    }

    #[must_use]
    pub fn player1(&self) -> PlayerId {
        self.player1
    }

    #[must_use]
    pub fn player2(&self) -> PlayerId {
        self.player2
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn involves(&self, id: PlayerId) -> bool {
        self.player1 == id || self.player2 == id
    }

    /// Whether this match was between `a` and `b`, in either slot order.
    #[must_use]
    pub fn between(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.player1 == a && self.player2 == b) || (self.player1 == b && self.player2 == a)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Outcome::Player1Won => Some(self.player1),
            Outcome::Player2Won => Some(self.player2),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.player1, self.player2, self.outcome)
    }
}

#[derive(Deserialize)]
struct UncheckedMatch {
    player1: PlayerId,
    player2: PlayerId,
    outcome: Outcome,
}

impl TryFrom<UncheckedMatch> for Match {
    type Error = TournamentError;

    fn try_from(unchecked: UncheckedMatch) -> Result<Self, Self::Error> {
        Match::new(unchecked.player1, unchecked.player2, unchecked.outcome)
    }
}
