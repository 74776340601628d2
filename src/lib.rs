//! Stabbr turn core.
//!
//! Exposes the map and order model, the turn controller, support-strength
//! adjudication, and legal order generation for use by a game driver.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod options;
pub mod resolve;

pub use error::GameError;
pub use game::{GameState, OrderResult, ResolvedOrder};
pub use options::GameOptions;
