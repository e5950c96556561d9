//! Turn coordination across two boards.
//!
//! A [`Game`] owns both players' boards and the whose-turn marker, validates
//! turn legality, dispatches each shot to the opponent's board, and advances
//! the state machine. It never does I/O; callers load and persist the state
//! around each call.

use crate::board::{Board, FleetStatus, ShotCounts};
use crate::common::ShotOutcome;
use crate::coord::{CoordError, Coordinate};
use crate::grid::GridError;
use core::fmt;

/// One of the two opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    #[cfg_attr(feature = "std", serde(rename = "player1"))]
    One,
    #[cfg_attr(feature = "std", serde(rename = "player2"))]
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player1"),
            Player::Two => write!(f, "player2"),
        }
    }
}

/// Per-game state machine. Terminal states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for this player's shot.
    Turn(Player),
    /// This player has sunk the entire opposing fleet.
    Won(Player),
}

impl GameState {
    /// True in a terminal state.
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Won(_))
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won(p) => Some(*p),
            GameState::Turn(_) => None,
        }
    }
}

/// Errors returned when a shot request is rejected. None of these mutate the
/// game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The acting player is not the expected actor.
    NotYourTurn { expected: Player },
    /// The game already has a winner.
    GameOver { winner: Player },
    /// The raw coordinate text did not resolve to a cell.
    InvalidCoordinate(CoordError),
    /// Underlying grid error (defensive; indicates a caller bug).
    Grid(GridError),
}

impl From<CoordError> for GameError {
    fn from(err: CoordError) -> Self {
        GameError::InvalidCoordinate(err)
    }
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotYourTurn { expected } => {
                write!(f, "not your turn, waiting on {}", expected)
            }
            GameError::GameOver { winner } => write!(f, "game is over, {} won", winner),
            GameError::InvalidCoordinate(e) => write!(f, "invalid coordinate: {}", e),
            GameError::Grid(e) => write!(f, "grid error: {}", e),
        }
    }
}

/// Everything the rendering and posting collaborators need after one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// Classification of the shot.
    pub outcome: ShotOutcome,
    /// Game state after the shot.
    pub state: GameState,
    /// Whose board absorbed the shot.
    pub target: Player,
    /// Target fleet after the shot.
    pub fleet: FleetStatus,
    /// Target board's shot tally after the shot.
    pub shots: ShotCounts,
}

/// A single game: two boards, the turn marker, and the terminal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    boards: [Board; 2],
    state: GameState,
}

impl Game {
    /// Start a fresh game. Which player fires first is the caller's policy.
    pub fn new(player1: Board, player2: Board, first: Player) -> Game {
        Game {
            boards: [player1, player2],
            state: GameState::Turn(first),
        }
    }

    /// Rebuild a game from persisted boards, re-deriving the terminal state.
    pub fn resume(player1: Board, player2: Board, turn: Player) -> Game {
        let state = if player2.all_sunk() {
            GameState::Won(Player::One)
        } else if player1.all_sunk() {
            GameState::Won(Player::Two)
        } else {
            GameState::Turn(turn)
        };
        Game {
            boards: [player1, player2],
            state,
        }
    }

    /// The named player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Current state of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The expected actor, while the game is live.
    pub fn turn(&self) -> Option<Player> {
        match self.state {
            GameState::Turn(p) => Some(p),
            GameState::Won(_) => None,
        }
    }

    /// Resolve one shot by `actor` against the opponent's board.
    ///
    /// Re-firing at an already-fired cell mutates nothing and leaves the
    /// turn with `actor`; the wasted shot is reported, not punished.
    pub fn apply_shot(
        &mut self,
        actor: Player,
        target: Coordinate,
    ) -> Result<TurnResult, GameError> {
        self.ensure_turn(actor)?;
        let defender = actor.opponent();
        let board = &mut self.boards[defender.index()];
        let outcome = board.apply_shot(target)?;
        let fleet = board.fleet_status();
        let shots = board.shot_counts();
        if !matches!(outcome, ShotOutcome::AlreadyFired) {
            self.state = if fleet.all_sunk() {
                GameState::Won(actor)
            } else {
                GameState::Turn(defender)
            };
        }
        Ok(TurnResult {
            outcome,
            state: self.state,
            target: defender,
            fleet,
            shots,
        })
    }

    /// Resolve one shot from raw coordinate text.
    ///
    /// Turn legality is checked before the text is parsed, so an out-of-turn
    /// player is told so even when their coordinate is garbage.
    pub fn apply_shot_text(&mut self, actor: Player, text: &str) -> Result<TurnResult, GameError> {
        self.ensure_turn(actor)?;
        let coord: Coordinate = text.parse()?;
        self.apply_shot(actor, coord)
    }

    fn ensure_turn(&self, actor: Player) -> Result<(), GameError> {
        match self.state {
            GameState::Won(winner) => Err(GameError::GameOver { winner }),
            GameState::Turn(expected) if expected != actor => {
                Err(GameError::NotYourTurn { expected })
            }
            GameState::Turn(_) => Ok(()),
        }
    }
}
