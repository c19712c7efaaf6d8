//! Driving complete games with computer players.

pub mod config;
pub mod runner;

pub use config::MatchConfig;
pub use runner::{Match, MatchEnd, MatchReport, PolicySource};
