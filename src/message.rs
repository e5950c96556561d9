#![cfg(feature = "std")]
//! Reply-text composition for the messaging collaborator.
//!
//! The engine reports classifications; these helpers turn them into the
//! strings the surrounding service posts back to players.

use crate::common::ShotOutcome;
use crate::config::NUM_SHIPS;
use crate::game::{GameError, GameState, TurnResult};

/// Headline for one resolved shot.
pub fn shot_announcement(outcome: ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Miss => "Miss! 🌊".to_string(),
        ShotOutcome::Hit(_) => "Hit! 💥".to_string(),
        ShotOutcome::Sunk(size) => match outcome.ship() {
            Some(ship) => format!("You sunk the {}! 💥🚢", ship.name()),
            None => format!("You sunk a size-{} ship! 💥🚢", size),
        },
        ShotOutcome::AlreadyFired => {
            "Already fired at that spot! Pick a new target. 🎯".to_string()
        }
    }
}

/// Full reply for one turn: headline, stats, and whose move comes next.
pub fn turn_reply(
    result: &TurnResult,
    firing_player: &str,
    next_player: &str,
    game_number: u64,
) -> String {
    let headline = shot_announcement(result.outcome);
    match result.state {
        GameState::Won(_) => format!(
            "{}\n\n\
             🎉 GAME OVER! @{} WINS! 🏆\n\n\
             📊 Final Stats:\n\
             • Shots: {}\n\
             • Hits: {} 💥\n\
             • Misses: {} ⭕\n\
             • Accuracy: {}%\n\n\
             Game #{}",
            headline,
            firing_player,
            result.shots.total(),
            result.shots.hits,
            result.shots.misses,
            result.shots.accuracy_pct(),
            game_number
        ),
        GameState::Turn(_) => format!(
            "{}\n\n\
             📊 Stats: {} hits, {} misses\n\
             🚢 Ships left: {}/{}\n\n\
             🎯 @{}'s turn!\n\n\
             Game #{}",
            headline,
            result.shots.hits,
            result.shots.misses,
            result.fleet.ships_afloat(),
            NUM_SHIPS,
            next_player,
            game_number
        ),
    }
}

/// Reply for a rejected shot request. `player1`/`player2` are display names.
pub fn rejection_reply(err: &GameError, player1: &str, player2: &str) -> String {
    match err {
        GameError::NotYourTurn { expected } => {
            let name = match expected {
                crate::game::Player::One => player1,
                crate::game::Player::Two => player2,
            };
            format!("⏳ Hold up! It's @{}'s turn. You'll go next!", name)
        }
        GameError::GameOver { .. } => {
            "This game is already over! Start a new challenge to play again. ⚔️".to_string()
        }
        GameError::InvalidCoordinate(e) => {
            format!("🎯 {}! Example: 'fire A1' (A-F, 1-6)", e)
        }
        GameError::Grid(e) => format!("⚠️ Oops! Something went wrong: {}", e),
    }
}

/// Announcement posted when a challenge is accepted and the game begins.
pub fn challenge_reply(game_number: u64, challenger: &str, opponent: &str) -> String {
    format!(
        "⚔️ Game #{} has begun! ⚔️\n\n\
         @{} vs @{}\n\n\
         🎯 @{} starts first!\n\n\
         Reply with 'Fire [coordinate]' (e.g., 'Fire C3') to take your shot!",
        game_number, challenger, opponent, challenger
    )
}
