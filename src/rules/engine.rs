//! The simulation engine.
//!
//! `Game` owns the board and the turn state machine:
//!
//! ```text
//!            placement (value < 4)                 toggle turn
//!   Ready ───────────────────────────────────────────────────────▶ Ready
//!     │
//!     │ placement reaches 4
//!     ▼
//!   Cascading ── execute_turn: one wave ──▶ queue empty? ── yes ──▶ toggle turn
//!     ▲                                        │
//!     └────────────────── no ──────────────────┘
//! ```
//!
//! While cascading, `execute_turn` resolves one wave per call and never
//! consults the move source, so a renderer gets one frame per wave.
//!
//! ## Wave order
//!
//! A wave first clears every exploding cell, then spreads from each of them
//! in queue order, visiting neighbours up, down, left, right. Clearing
//! before spreading means two cells that explode into each other in the same
//! wave both keep the unit they received. Units arriving at a cell that is
//! already at 4 are absorbed, so no observable value exceeds 4.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::cascade::{CascadeQueue, WaveReport};
use super::source::MoveSource;
use crate::core::{
    Board, Cell, GameConfig, GameError, Player, PlayerMap, Position, Result, SeedPolicy,
    CRITICAL_MASS, OPENING_VALUE,
};

/// Game-over check result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    WhiteWins,
    BlackWins,
}

impl GameStatus {
    /// The winning player, if the game is over.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::WhiteWins => Some(Player::White),
            GameStatus::BlackWins => Some(Player::Black),
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// A placement in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub position: Position,
    /// Whether this was the player's opening move.
    pub opening: bool,
    /// Turn number the placement was made on.
    pub turn: u32,
}

/// Result of a single placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: Player,
    pub position: Position,
    pub opening: bool,
    /// Cell value after the placement.
    pub value: u8,
    /// The cell reached critical mass and is queued to explode.
    pub triggered_cascade: bool,
}

/// What a call to [`Game::execute_turn`] did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A piece was placed.
    Placed(Placement),
    /// A pending cascade advanced by one wave; no piece was placed.
    Wave(WaveReport),
}

/// A chain-reaction game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active: Player,
    opening: PlayerMap<bool>,
    cascade: CascadeQueue,
    history: Vector<MoveRecord>,
    turn_number: u32,
    waves_resolved: u32,
}

impl Game {
    /// Create a game from a configuration.
    ///
    /// Fails with [`GameError::BoardTooSmall`] for boards under 2×2 and
    /// [`GameError::BoardTooLarge`] for boards past the cell limit. A
    /// malformed seed board either falls back to an empty board (the
    /// default) or fails with [`GameError::MalformedSeed`], depending on
    /// `config.seed_policy`.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let empty = Board::new(config.rows, config.columns)?;

        let board = match &config.seed_board {
            None => empty,
            Some(seed) => match Board::from_seed(config.rows, config.columns, seed) {
                Ok(board) => board,
                Err(err) if config.seed_policy == SeedPolicy::Reject => return Err(err),
                Err(err) => {
                    warn!("{}; starting from an empty board", err);
                    empty
                }
            },
        };

        // Seeded pieces count as a completed opening.
        let opening = PlayerMap::new(|player| board.count_owned(player) == 0);

        debug!(
            rows = config.rows,
            columns = config.columns,
            seeded = config.seed_board.is_some(),
            "new game"
        );

        Ok(Self {
            board,
            active: Player::White,
            opening,
            cascade: CascadeQueue::new(),
            history: Vector::new(),
            turn_number: 1,
            waves_resolved: 0,
        })
    }

    /// Create an empty `rows × columns` game.
    pub fn with_size(rows: usize, columns: usize) -> Result<Self> {
        Self::new(&GameConfig::new(rows, columns))
    }

    // === Queries ===

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An isolated O(1) copy of the board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    /// The player whose turn is in progress.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[must_use]
    pub fn is_white_turn(&self) -> bool {
        self.active == Player::White
    }

    /// Whether `player` has yet to make an opening move.
    #[must_use]
    pub fn is_opening(&self, player: Player) -> bool {
        self.opening[player]
    }

    /// Positions owned by `player`, row-major.
    #[must_use]
    pub fn owned_by(&self, player: Player) -> Vec<Position> {
        self.board.owned_by(player).collect()
    }

    /// Whether cascade waves remain to be resolved.
    #[must_use]
    pub fn pending_cascade(&self) -> bool {
        !self.cascade.is_empty()
    }

    /// Cells queued to explode in the next wave.
    #[must_use]
    pub fn cascade_queue(&self) -> &[Position] {
        self.cascade.as_slice()
    }

    /// Every placement made so far.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Total cascade waves resolved this game.
    #[must_use]
    pub fn waves_resolved(&self) -> u32 {
        self.waves_resolved
    }

    // === Legality ===

    /// Check whether the active player may place at `pos`.
    ///
    /// Off-board positions are never legal.
    #[must_use]
    pub fn is_legal_move(&self, pos: Position) -> bool {
        let Some(cell) = self.board.get(pos) else {
            return false;
        };

        if self.opening[self.active] {
            cell.is_empty()
        } else {
            cell.is_owned_by(self.active)
        }
    }

    /// All legal positions for the active player, row-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board
            .positions()
            .filter(|&pos| self.is_legal_move(pos))
            .collect()
    }

    // === Turn execution ===

    /// Advance the game by one step.
    ///
    /// With a cascade pending, resolves one wave and returns its report;
    /// `source` is not consulted. Otherwise pulls candidates from `source`
    /// until one is legal and places it.
    pub fn execute_turn<S>(&mut self, source: &mut S) -> TurnOutcome
    where
        S: MoveSource + ?Sized,
    {
        if let Some(report) = self.advance_cascade() {
            return TurnOutcome::Wave(report);
        }

        let mut retry = 0u32;
        let mut pos = source.next_move(retry);
        while !self.is_legal_move(pos) {
            trace!(player = %self.active, %pos, retry, "rejected candidate");
            retry = retry.saturating_add(1);
            pos = source.next_move(retry);
        }

        TurnOutcome::Placed(self.place(pos))
    }

    /// Place at `pos` without retrying.
    pub fn try_place(&mut self, pos: Position) -> Result<Placement> {
        if self.pending_cascade() {
            return Err(GameError::CascadePending);
        }
        if !self.is_legal_move(pos) {
            return Err(GameError::IllegalMove(pos));
        }
        Ok(self.place(pos))
    }

    /// Resolve one wave if a cascade is pending.
    pub fn advance_cascade(&mut self) -> Option<WaveReport> {
        if self.pending_cascade() {
            Some(self.resolve_wave())
        } else {
            None
        }
    }

    /// Resolve waves until the cascade settles or `max_waves` have run.
    ///
    /// Returns the reports of the waves that ran.
    pub fn settle(&mut self, max_waves: usize) -> Vec<WaveReport> {
        let mut reports = Vec::new();
        while reports.len() < max_waves {
            match self.advance_cascade() {
                Some(report) => reports.push(report),
                None => break,
            }
        }
        reports
    }

    fn place(&mut self, pos: Position) -> Placement {
        let player = self.active;
        let opening = self.opening[player];

        let value = if opening {
            self.opening[player] = false;
            OPENING_VALUE
        } else {
            self.board.value(pos).saturating_add(1).min(CRITICAL_MASS)
        };
        self.board.set(pos, Cell::owned(player, value));

        self.history.push_back(MoveRecord {
            player,
            position: pos,
            opening,
            turn: self.turn_number,
        });

        let triggered_cascade = !opening && value >= CRITICAL_MASS;
        if triggered_cascade {
            self.cascade.push(pos);
            debug!(%player, %pos, "cascade triggered");
        } else {
            trace!(%player, %pos, value, opening, "placed");
            self.end_turn();
        }

        Placement {
            player,
            position: pos,
            opening,
            value,
            triggered_cascade,
        }
    }

    fn resolve_wave(&mut self) -> WaveReport {
        let mover = self.active;
        let (rows, columns) = self.board.dimensions();
        let wave = self.cascade.take_wave();

        for &pos in &wave {
            self.board.set(pos, Cell::EMPTY);
        }

        let mut report = WaveReport::default();
        for &origin in &wave {
            for target in origin.orthogonal(rows, columns) {
                self.spread_into(target, mover, &mut report);
            }
        }
        report.exploded = wave;
        self.waves_resolved += 1;

        debug!(
            player = %mover,
            exploded = report.exploded.len(),
            queued = report.newly_queued.len(),
            captured = report.captured.len(),
            "cascade wave"
        );

        if self.cascade.is_empty() {
            self.end_turn();
        }

        report
    }

    fn spread_into(&mut self, target: Position, mover: Player, report: &mut WaveReport) {
        let before = self.board.get(target).copied().unwrap_or_default();
        let value = before.value.saturating_add(1).min(CRITICAL_MASS);

        self.board.set(target, Cell::owned(mover, value));

        if before.owner == Some(mover.opponent()) {
            report.captured.push(target);
        }
        if value >= CRITICAL_MASS && self.cascade.push(target) {
            report.newly_queued.push(target);
        }
    }

    fn end_turn(&mut self) {
        self.active = self.active.opponent();
        self.turn_number += 1;
    }

    // === Game over ===

    /// Check for a winner.
    ///
    /// A player loses once they have made their opening move and own no
    /// cells.
    #[must_use]
    pub fn check_game_over(&self) -> GameStatus {
        let eliminated =
            |player: Player| !self.opening[player] && self.board.count_owned(player) == 0;

        if eliminated(Player::White) {
            GameStatus::BlackWins
        } else if eliminated(Player::Black) {
            GameStatus::WhiteWins
        } else {
            GameStatus::Ongoing
        }
    }
}
