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

use log::{info, warn};

use crate::{
    matches::Match,
    outcome::Outcome,
    pairing::{self, ByePolicy, Pairing, Round},
    player::PlayerId,
    standings::{self, StandingEntry},
    storage::Storage,
};

/// A single Swiss tournament on top of a store.
#[derive(Clone, Debug, Default)]
pub struct Tournament<S> {
    store: S,
}

impl<S: Storage> Tournament<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// # Errors
    ///
    /// If the store fails.
    pub fn delete_matches(&mut self) -> anyhow::Result<()> {
        self.store.clear_matches()?;
        info!("deleted all matches");
        Ok(())
    }

    /// # Errors
    ///
    /// If matches are still recorded or the store fails.
    pub fn delete_players(&mut self) -> anyhow::Result<()> {
        self.store.clear_players()?;
        info!("deleted all players");
        Ok(())
    }

    /// # Errors
    ///
    /// If the store fails.
    pub fn count_players(&self) -> anyhow::Result<usize> {
        self.store.count_players()
    }

    /// # Errors
    ///
    /// If the store fails.
    pub fn register_player(&mut self, name: &str) -> anyhow::Result<PlayerId> {
        let id = self.store.register_player(name)?;
        info!("{id} {name} registered");
        Ok(id)
    }

    /// # Errors
    ///
    /// If both ids are the same player, either player isn't registered, or
    /// the store fails.
    pub fn report_match(
        &mut self,
        player1: PlayerId,
        player2: PlayerId,
        outcome: Outcome,
    ) -> anyhow::Result<Match> {
        let game = Match::new(player1, player2, outcome)?;
        self.store.record_match(game)?;
        info!("match {game} recorded");
        Ok(game)
    }

    /// # Errors
    ///
    /// If the store fails or holds a match with an unknown player.
    pub fn player_standings(&self) -> anyhow::Result<Vec<StandingEntry>> {
        let players = self.store.list_players()?;
        let matches = self.store.list_matches()?;

        Ok(standings::compute_standings(&players, &matches)?)
    }

    /// # Errors
    ///
    /// If there is an odd number of players, the store fails, or it holds a
    /// match with an unknown player.
    pub fn swiss_pairings(&self) -> anyhow::Result<Vec<Pairing>> {
        self.next_round(ByePolicy::Reject).map(|round| round.pairings)
    }

    /// # Errors
    ///
    /// If there is an odd number of players and `policy` rejects it, the
    /// store fails, or it holds a match with an unknown player.
    pub fn next_round(&self, policy: ByePolicy) -> anyhow::Result<Round> {
        let players = self.store.list_players()?;
        let matches = self.store.list_matches()?;

        let round = pairing::compute_round(&players, &matches, policy)?;

        for rematch in pairing::rematches(&round.pairings, &matches) {
            warn!("rematch: {rematch}");
        }
        if let Some(bye) = &round.bye {
            info!("{} {} gets a bye", bye.id, bye.name);
        }

        Ok(round)
    }
}
