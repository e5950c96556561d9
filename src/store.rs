#![cfg(feature = "std")]
//! Durable-storage contract: the load/save tuple for one game, keyed by an
//! opaque thread identifier supplied by the calling collaborator.
//!
//! The engine never infers the key; mapping conversation threads to games is
//! the boundary's job. Grids persist as bare 6x6 integer matrices, which is
//! the wire format the rendering and statistics collaborators decode.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::board::Board;
use crate::game::{Game, GameState, Player};
use crate::grid::Grid;

/// Lifecycle column of a stored game row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Active,
    Completed,
}

/// One stored game row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameRecord {
    pub game_number: u64,
    pub player1_id: String,
    pub player2_id: String,
    pub player1_board: Grid,
    pub player2_board: Grid,
    pub turn: Player,
    pub game_state: GamePhase,
}

impl GameRecord {
    /// Snapshot a live game into a fresh row.
    pub fn new(game_number: u64, player1_id: String, player2_id: String, game: &Game) -> Self {
        let mut record = GameRecord {
            game_number,
            player1_id,
            player2_id,
            player1_board: *game.board(Player::One).grid(),
            player2_board: *game.board(Player::Two).grid(),
            turn: Player::One,
            game_state: GamePhase::Active,
        };
        record.record_turn(game);
        record
    }

    /// Rebuild the state machine from this row.
    pub fn to_game(&self) -> Game {
        Game::resume(
            Board::from(self.player1_board),
            Board::from(self.player2_board),
            self.turn,
        )
    }

    /// Write a game back into this row after a shot.
    pub fn record_turn(&mut self, game: &Game) {
        self.player1_board = *game.board(Player::One).grid();
        self.player2_board = *game.board(Player::Two).grid();
        match game.state() {
            GameState::Turn(next) => {
                self.turn = next;
                self.game_state = GamePhase::Active;
            }
            GameState::Won(winner) => {
                self.turn = winner;
                self.game_state = GamePhase::Completed;
            }
        }
    }
}

/// Storage boundary used by the surrounding service.
#[async_trait::async_trait]
pub trait GameStore: Send + Sync {
    /// Fetch the game row for a thread, if one exists.
    async fn load(&self, thread_id: &str) -> anyhow::Result<Option<GameRecord>>;

    /// Insert or replace the game row for a thread.
    async fn save(&self, thread_id: &str, record: GameRecord) -> anyhow::Result<()>;

    /// Next unused game number.
    async fn next_game_number(&self) -> anyhow::Result<u64>;
}

/// Process-local store, mostly useful for demos and tests.
pub struct InMemoryStore {
    games: Arc<Mutex<HashMap<String, GameRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new()
    }
}

#[async_trait::async_trait]
impl GameStore for InMemoryStore {
    async fn load(&self, thread_id: &str) -> anyhow::Result<Option<GameRecord>> {
        let games = self.games.lock().unwrap();
        Ok(games.get(thread_id).cloned())
    }

    async fn save(&self, thread_id: &str, record: GameRecord) -> anyhow::Result<()> {
        log::info!(
            "saving game #{} for thread {} ({:?})",
            record.game_number,
            thread_id,
            record.game_state
        );
        let mut games = self.games.lock().unwrap();
        games.insert(thread_id.to_string(), record);
        Ok(())
    }

    async fn next_game_number(&self) -> anyhow::Result<u64> {
        let games = self.games.lock().unwrap();
        Ok(games.values().map(|g| g.game_number).max().unwrap_or(0) + 1)
    }
}
