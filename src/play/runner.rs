//! Policy-vs-policy matches.
//!
//! A `Match` owns two policies and drives a fresh `Game` with them until one
//! side is eliminated or a cap is hit. Each placement goes through
//! `Game::execute_turn` via a `PolicySource`, and each pending cascade wave
//! is advanced on its own step, the same way an interactive driver would.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::MatchConfig;
use crate::ai::MovePolicy;
use crate::core::{Board, GameRng, Player, Position, Result};
use crate::rules::{Game, GameStatus, MoveRecord, MoveSource, TurnOutcome};

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// A player was eliminated.
    Decided(Player),
    /// The turn cap was reached.
    TurnLimit,
    /// A single cascade exceeded the wave cap.
    CascadeLimit,
    /// The active player had no legal move.
    NoLegalMoves,
}

/// Summary of a finished match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchReport {
    pub end: MatchEnd,
    /// Policy name seated as White.
    pub white: String,
    /// Policy name seated as Black.
    pub black: String,
    /// Whether the policies were swapped from the order given.
    pub swapped: bool,
    /// Turn number reached.
    pub turns: u32,
    /// Cascade waves resolved, including the ending waves.
    pub waves: u32,
    pub history: Vec<MoveRecord>,
    pub final_board: Board,
}

impl MatchReport {
    /// The winning player, if the match was decided.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.end {
            MatchEnd::Decided(player) => Some(player),
            _ => None,
        }
    }

    /// Name of the winning policy.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner().map(|player| match player {
            Player::White => self.white.as_str(),
            Player::Black => self.black.as_str(),
        })
    }
}

/// Feeds a policy's pick to the engine.
///
/// The first candidate is the policy's choice; if the engine rejects it,
/// later retries walk the legal moves in order.
#[derive(Clone, Debug)]
pub struct PolicySource {
    choice: Option<Position>,
    fallback: Vec<Position>,
}

impl PolicySource {
    /// Ask `policy` for a move in the current position of `game`.
    pub fn new<P>(policy: &mut P, game: &Game) -> Self
    where
        P: MovePolicy + ?Sized,
    {
        let board = game.snapshot();
        Self {
            choice: policy.choose_move(&board, game.active_player()),
            fallback: game.legal_moves(),
        }
    }

    /// Whether any legal move exists.
    #[must_use]
    pub fn has_moves(&self) -> bool {
        !self.fallback.is_empty()
    }
}

impl MoveSource for PolicySource {
    fn next_move(&mut self, retry: u32) -> Position {
        let fallback = || {
            if self.fallback.is_empty() {
                Position::default()
            } else {
                let index = retry.saturating_sub(1) as usize % self.fallback.len();
                self.fallback[index]
            }
        };

        match (retry, self.choice) {
            (0, Some(pos)) => pos,
            _ => fallback(),
        }
    }
}

/// Two policies and the rules to pit them against each other.
pub struct Match {
    config: MatchConfig,
    seats: [Box<dyn MovePolicy>; 2],
    swapped: bool,
}

impl Match {
    /// Seat `first` as White and `second` as Black, unless
    /// `config.random_sides` flips them.
    pub fn new(
        config: MatchConfig,
        first: Box<dyn MovePolicy>,
        second: Box<dyn MovePolicy>,
    ) -> Self {
        let swapped = config.random_sides && GameRng::new(config.seed).coin_flip();
        let seats = if swapped {
            [second, first]
        } else {
            [first, second]
        };

        Self {
            config,
            seats,
            swapped,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Name of the policy playing `player`.
    #[must_use]
    pub fn seat_name(&self, player: Player) -> &str {
        self.seats[player.index()].name()
    }

    /// Play one game to completion.
    ///
    /// Fails only if the game configuration is invalid.
    pub fn run(&mut self) -> Result<MatchReport> {
        let mut game = Game::new(&self.config.game)?;

        debug!(
            white = self.seat_name(Player::White),
            black = self.seat_name(Player::Black),
            swapped = self.swapped,
            "match started"
        );

        let mut cascade_waves = 0usize;
        let end = loop {
            if let Some(winner) = game.check_game_over().winner() {
                let settled = game.settle(self.config.ending_waves);
                debug!(%winner, ending_waves = settled.len(), "game decided");
                break MatchEnd::Decided(winner);
            }

            if game.pending_cascade() {
                if cascade_waves >= self.config.max_cascade_waves {
                    break MatchEnd::CascadeLimit;
                }
                if game.advance_cascade().is_some() {
                    cascade_waves += 1;
                }
                continue;
            }

            if game.turn_number() > self.config.max_turns {
                break MatchEnd::TurnLimit;
            }

            let player = game.active_player();
            let mut source = PolicySource::new(&mut self.seats[player.index()], &game);
            if !source.has_moves() {
                break MatchEnd::NoLegalMoves;
            }

            cascade_waves = 0;
            if let TurnOutcome::Placed(placement) = game.execute_turn(&mut source) {
                if placement.triggered_cascade {
                    debug!(
                        %player,
                        pos = %placement.position,
                        turn = game.turn_number(),
                        "cascade started"
                    );
                }
            }
        };

        let report = MatchReport {
            end,
            white: self.seat_name(Player::White).to_string(),
            black: self.seat_name(Player::Black).to_string(),
            swapped: self.swapped,
            turns: game.turn_number(),
            waves: game.waves_resolved(),
            history: game.history().iter().copied().collect(),
            final_board: game.snapshot(),
        };

        info!(
            end = ?report.end,
            winner = report.winner_name().unwrap_or("none"),
            turns = report.turns,
            waves = report.waves,
            "match finished"
        );

        Ok(report)
    }

    /// Final status helper for drivers that only care about the result.
    pub fn play(&mut self) -> Result<GameStatus> {
        let report = self.run()?;
        Ok(match report.winner() {
            Some(Player::White) => GameStatus::WhiteWins,
            Some(Player::Black) => GameStatus::BlackWins,
            None => GameStatus::Ongoing,
        })
    }
}
