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

mod command_line;

use clap::{CommandFactory, Parser};
use log::debug;

use swiss_tournament::{ByePolicy, DATA_FILE, FileStore, Tournament, utils};

use crate::command_line::{Args, Command};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug, args.systemd);

    if args.man {
        return Args::generate_man_page();
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let path = args.file.unwrap_or_else(|| utils::data_file(DATA_FILE));
    debug!("tournament file: {}", path.display());
    let mut tournament = Tournament::new(FileStore::open(&path)?);

    match command {
        Command::Register { name } => {
            let id = tournament.register_player(&name)?;
            println!("{id}");
        }
        Command::Report {
            player1,
            player2,
            outcome,
        } => {
            tournament.report_match(player1, player2, outcome)?;
        }
        Command::Standings => {
            for standing in tournament.player_standings()? {
                println!("{standing}");
            }
        }
        Command::Pairings { bye } => {
            let policy = if bye {
                ByePolicy::LowestRanked
            } else {
                ByePolicy::Reject
            };

            let round = tournament.next_round(policy)?;
            for pairing in &round.pairings {
                println!("{pairing}");
            }
            if let Some(bye) = round.bye {
                println!("{} {} bye", bye.id, bye.name);
            }
        }
        Command::Count => println!("{}", tournament.count_players()?),
        Command::DeleteMatches => tournament.delete_matches()?,
        Command::DeletePlayers => tournament.delete_players()?,
    }

    Ok(())
}
