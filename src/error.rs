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

use thiserror::Error;

use crate::player::PlayerId;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TournamentError {
    #[error("players: player id {id} is registered twice")]
    DuplicatePlayer { id: PlayerId },
    #[error("match: player {id} can't play against themself")]
    InvalidMatch { id: PlayerId },
    #[error("pairings: there is an odd number of players ({count})")]
    OddPlayerCount { count: usize },
    #[error("players: {matches} matches still reference the players, delete the matches first")]
    PlayersHaveMatches { matches: usize },
    #[error("players: player {id} isn't registered")]
    UnknownPlayer { id: PlayerId },
}
