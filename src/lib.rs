#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod agent;
mod agent_ai;
#[cfg(feature = "std")]
mod agent_cli;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use agent::*;
pub use agent_ai::*;
#[cfg(feature = "std")]
pub use agent_cli::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
