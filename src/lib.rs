#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coord;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod message;
#[cfg(feature = "std")]
pub mod render;
mod ship;
#[cfg(feature = "std")]
pub mod store;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
#[cfg(feature = "std")]
pub use store::{GamePhase, GameRecord, GameStore, InMemoryStore};
