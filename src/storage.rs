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

//! Where players and matches live between calls.
//!
//! A store must return everything committed before a read. Both stores here
//! are owned values, so a mutating call has finished by the time anyone can
//! read again.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use ron::ser::PrettyConfig;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::TournamentError,
    matches::Match,
    player::{Player, PlayerId},
};

pub trait Storage {
    /// Removes every match record.
    ///
    /// # Errors
    ///
    /// If the store can't be written.
    fn clear_matches(&mut self) -> anyhow::Result<()>;

    /// Removes every player record. Player ids are not handed out again.
    ///
    /// # Errors
    ///
    /// If matches still reference players or the store can't be written.
    fn clear_players(&mut self) -> anyhow::Result<()>;

    /// # Errors
    ///
    /// If the store can't be read.
    fn count_players(&self) -> anyhow::Result<usize>;

    /// Registers a player under a fresh id.
    ///
    /// # Errors
    ///
    /// If the store can't be written.
    fn register_player(&mut self, name: &str) -> anyhow::Result<PlayerId>;

    /// # Errors
    ///
    /// If the store can't be read.
    fn list_players(&self) -> anyhow::Result<Vec<Player>>;

    /// # Errors
    ///
    /// If the store can't be read.
    fn list_matches(&self) -> anyhow::Result<Vec<Match>>;

    /// # Errors
    ///
    /// If either player isn't registered or the store can't be written.
    fn record_match(&mut self, game: Match) -> anyhow::Result<()>;
}

/// Everything a tournament stores.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TournamentData {
    pub next_id: PlayerId,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Default for TournamentData {
    fn default() -> Self {
        Self {
            next_id: 1,
            players: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl TournamentData {
    /// Fails on a player id registered twice and moves `next_id` past every
    /// id in use.
    ///
    /// # Errors
    ///
    /// If two players share an id.
    pub fn check_ids(&mut self) -> Result<(), TournamentError> {
        let mut ids = FxHashSet::default();
        for player in &self.players {
            if !ids.insert(player.id) {
                return Err(TournamentError::DuplicatePlayer { id: player.id });
            }
        }

        if let Some(max) = ids.into_iter().max()
            && max >= self.next_id
        {
            warn!("next_id {} is already in use, moving it to {}", self.next_id, max + 1);
            self.next_id = max + 1;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryStore {
    data: TournamentData,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data(&self) -> &TournamentData {
        &self.data
    }
}

impl From<TournamentData> for MemoryStore {
    fn from(data: TournamentData) -> Self {
        Self { data }
    }
}

impl Storage for MemoryStore {
    fn clear_matches(&mut self) -> anyhow::Result<()> {
        self.data.matches.clear();
        Ok(())
    }

    fn clear_players(&mut self) -> anyhow::Result<()> {
        if !self.data.matches.is_empty() {
            return Err(TournamentError::PlayersHaveMatches {
                matches: self.data.matches.len(),
            }
            .into());
        }

        self.data.players.clear();
        Ok(())
    }

    fn count_players(&self) -> anyhow::Result<usize> {
        Ok(self.data.players.len())
    }

    fn register_player(&mut self, name: &str) -> anyhow::Result<PlayerId> {
        let id = self.data.next_id;
        self.data.next_id += 1;
        self.data.players.push(Player::new(id, name));

        Ok(id)
    }

    fn list_players(&self) -> anyhow::Result<Vec<Player>> {
        Ok(self.data.players.clone())
    }

    fn list_matches(&self) -> anyhow::Result<Vec<Match>> {
        Ok(self.data.matches.clone())
    }

    fn record_match(&mut self, game: Match) -> anyhow::Result<()> {
        for id in [game.player1(), game.player2()] {
            if !self.data.players.iter().any(|player| player.id == id) {
                return Err(TournamentError::UnknownPlayer { id }.into());
            }
        }

        self.data.matches.push(game);
        Ok(())
    }
}

/// A store kept in a RON file. Every change rewrites the file before
/// returning.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl FileStore {
    /// Loads the tournament at `path`, or starts an empty one if there is no
    /// file yet.
    ///
    /// # Errors
    ///
    /// If the file can't be read, isn't a valid tournament, or registers the
    /// same player id twice.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let mut data: TournamentData = match fs::read_to_string(path) {
            Ok(string) => match ron::from_str(string.as_str()) {
                Ok(data) => data,
                Err(err) => {
                    return Err(anyhow::Error::msg(format!(
                        "RON: {}: {err}",
                        path.display(),
                    )));
                }
            },
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    info!("{} not found, starting a new tournament", path.display());
                    TournamentData::default()
                }
                _ => return Err(anyhow::Error::msg(err.to_string())),
            },
        };

        data.check_ids()?;

        Ok(Self {
            path: path.to_path_buf(),
            memory: MemoryStore::from(data),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `change` to a copy of the tournament and keeps the copy only
    /// once it has been written.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryStore) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut memory = self.memory.clone();
        let value = change(&mut memory)?;
        self.save(memory.data())?;
        self.memory = memory;

        Ok(value)
    }

    fn save(&self, data: &TournamentData) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let string = ron::ser::to_string_pretty(data, PrettyConfig::default())?;
        fs::write(&self.path, string)?;
        debug!("saved {}", self.path.display());

        Ok(())
    }
}

impl Storage for FileStore {
    fn clear_matches(&mut self) -> anyhow::Result<()> {
        self.commit(MemoryStore::clear_matches)
    }

    fn clear_players(&mut self) -> anyhow::Result<()> {
        self.commit(MemoryStore::clear_players)
    }

    fn count_players(&self) -> anyhow::Result<usize> {
        self.memory.count_players()
    }

    fn register_player(&mut self, name: &str) -> anyhow::Result<PlayerId> {
        self.commit(|memory| memory.register_player(name))
    }

    fn list_players(&self) -> anyhow::Result<Vec<Player>> {
        self.memory.list_players()
    }

    fn list_matches(&self) -> anyhow::Result<Vec<Match>> {
        self.memory.list_matches()
    }

    fn record_match(&mut self, game: Match) -> anyhow::Result<()> {
        self.commit(|memory| memory.record_match(game))
    }
}
