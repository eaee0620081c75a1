//! An adversarial hangman engine.
//!
//! [`GameState`] never picks a secret word. It keeps every word that fits the letters shown so
//! far, and answers each guess in whichever way leaves the most words in play.

mod data;
mod engine;
mod game;
mod pattern;
mod results;

pub use data::Dictionary;
pub use engine::*;
pub use game::GameState;
pub use pattern::*;
pub use results::*;
