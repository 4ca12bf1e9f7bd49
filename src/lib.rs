//! Players, match results, standings and pairings for a Swiss tournament.
//!
//! [`standings::compute_standings`] ranks the players by wins, then ties, then
//! id. [`pairing::compute_pairings`] pairs neighbours in that ranking for the
//! next round. Both are pure functions over a snapshot of the players and
//! matches. [`tournament::Tournament`] reads the snapshot from a
//! [`storage::Storage`] for you.
//!
//! ## Binaries
//!
//! * swiss-tournament - register players, report matches and print the
//!   standings and pairings kept in a RON file

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

#![deny(clippy::panic)]

pub mod error;
pub mod matches;
pub mod outcome;
pub mod pairing;
pub mod player;
pub mod standings;
pub mod storage;
pub mod tournament;
pub mod utils;

pub use error::TournamentError;
pub use matches::Match;
pub use outcome::Outcome;
pub use pairing::{ByePolicy, Pairing, Round, compute_pairings, compute_round, rematches};
pub use player::{Player, PlayerId};
pub use standings::{StandingEntry, compute_standings};
pub use storage::{FileStore, MemoryStore, Storage, TournamentData};
pub use tournament::Tournament;

pub const HOME: &str = "swiss-tournament";
pub const DATA_FILE: &str = "tournament.ron";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Licensed under the AGPLv3"
);

#[allow(clippy::panic)]
#[cfg(test)]
mod tests {
    use super::*;

    fn assert_error_str<T: std::fmt::Debug>(result: anyhow::Result<T>, string: &str) {
        match result {
            Ok(value) => panic!("expected '{string}', got {value:?}"),
            Err(error) => assert_eq!(error.to_string(), string),
        }
    }

    #[test]
    fn error_messages() -> anyhow::Result<()> {
        let mut tournament = Tournament::new(MemoryStore::new());
        let ann = tournament.register_player("Ann")?;

        assert_error_str(
            tournament.report_match(ann, ann, Outcome::Tie),
            "match: player 1 can't play against themself",
        );
        assert_error_str(
            tournament.swiss_pairings(),
            "pairings: there is an odd number of players (1)",
        );
        assert_error_str(
            tournament.report_match(ann, 7, Outcome::Tie),
            "players: player 7 isn't registered",
        );

        let bo = tournament.register_player("Bo")?;
        tournament.report_match(ann, bo, Outcome::Player2Won)?;
        assert_error_str(
            tournament.delete_players(),
            "players: 1 matches still reference the players, delete the matches first",
        );

        Ok(())
    }
}
