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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Outcome {
    Player1Won,
    Player2Won,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player1Won => write!(f, "player1"),
            Self::Player2Won => write!(f, "player2"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

impl FromStr for Outcome {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        let string = string.to_lowercase();

        // The numbers are the winner column of the old relational schema.
        match string.as_str() {
            "1" | "player1" | "p1" => Ok(Self::Player1Won),
            "2" | "player2" | "p2" => Ok(Self::Player2Won),
            "0" | "tie" | "draw" => Ok(Self::Tie),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to an Outcome!"
            ))),
        }
    }
}
