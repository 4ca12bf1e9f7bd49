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

use std::{io::Write as _, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use swiss_tournament::{COPYRIGHT, LONG_VERSION, Outcome, PlayerId};

/// Swiss Tournament
///
/// Keeps the players and match results of a Swiss-system tournament and
/// pairs players with similar records for the next round.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Swiss Tournament")]
pub(crate) struct Args {
    /// The tournament file [default: tournament.ron in the data directory]
    #[arg(long, value_name = "path")]
    pub file: Option<PathBuf>,

    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Whether the application is being run by systemd
    #[arg(long)]
    pub systemd: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Register a player, printing their id
    Register {
        /// The player's name, need not be unique
        name: String,
    },

    /// Record the result of a match
    Report {
        player1: PlayerId,
        player2: PlayerId,
        /// player1, player2 or tie
        outcome: Outcome,
    },

    /// Print the standings: id name wins losses ties matches
    Standings,

    /// Print the pairings for the next round
    Pairings {
        /// Give the lowest ranked player a bye when the count is odd
        #[arg(long)]
        bye: bool,
    },

    /// Print the number of registered players
    Count,

    /// Delete every match
    DeleteMatches,

    /// Delete every player, only allowed once there are no matches
    DeletePlayers,
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command().name("swiss-tournament").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-18");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("swiss-tournament.1", buffer)?;
        Ok(())
    }
}
