//! Game rules: legality, placement, cascades, and game over.
//!
//! `Game` is the only thing that mutates a board. Drivers feed it moves
//! through a `MoveSource` and read state back through its query methods.

pub mod cascade;
pub mod engine;
pub mod source;

pub use cascade::{CascadeQueue, WaveReport};
pub use engine::{Game, GameStatus, MoveRecord, Placement, TurnOutcome};
pub use source::{MoveSource, ScriptedSource};
