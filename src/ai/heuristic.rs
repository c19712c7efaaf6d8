//! Positional heuristic AI.
//!
//! Every owned cell gets a score from local features of its neighbourhood;
//! the best-scoring cell is reinforced. A cell one short of critical mass is
//! called "primed" below.
//!
//! | Feature | Applies to | Effect |
//! |---|---|---|
//! | Edge | any cell | − per touched edge |
//! | Adjacent primed | unprimed cell next to any primed cell | − once |
//! | Burst | primed cell next to a foreign primed cell | + per such neighbour |
//! | Corner fill | unprimed cell | + Σ max(0, v − 1) over foreign diagonals |
//! | Corner burst | primed cell | − Σ max(0, v − 1) over foreign diagonals |
//!
//! Ties go to cells holding 2, then 1, then 3 pieces, then to the cell
//! closest to the centre, then to the first in row-major order.

use tracing::trace;

use super::config::HeuristicConfig;
use super::policy::MovePolicy;
use crate::core::{Board, Player, Position, CRITICAL_MASS};

const PRIMED: u8 = CRITICAL_MASS - 1;

/// Preferred own-cell values when scores tie.
const TIE_BREAK_VALUES: [u8; 3] = [2, 1, 3];

/// Diagonal offsets tried, in order, when the centre is taken on an opening.
const OPENING_FALLBACKS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Heuristic move selection.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy {
    config: HeuristicConfig,
}

impl HeuristicPolicy {
    #[must_use]
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Pick a move for `player`. Pure: reads `board` only.
    #[must_use]
    pub fn choose(&self, board: &Board, player: Player) -> Option<Position> {
        let scored: Vec<(Position, i32)> = board
            .owned_by(player)
            .map(|pos| (pos, self.score_cell(board, player, pos)))
            .collect();

        if scored.is_empty() {
            return Self::opening_move(board);
        }

        let choice = Self::select(board, &scored);
        trace!(%player, ?choice, candidates = scored.len(), "heuristic choice");
        choice
    }

    /// Scores for every cell in row-major order; `None` where `player`
    /// does not own the cell.
    #[must_use]
    pub fn score_board(&self, board: &Board, player: Player) -> Vec<Option<i32>> {
        board
            .positions()
            .map(|pos| {
                board
                    .is_owned_by(pos, player)
                    .then(|| self.score_cell(board, player, pos))
            })
            .collect()
    }

    /// Score one cell as a reinforcement target for `player`.
    #[must_use]
    pub fn score_cell(&self, board: &Board, player: Player, pos: Position) -> i32 {
        let (rows, columns) = board.dimensions();
        let value = board.value(pos);
        let primed = value == PRIMED;
        let foreign = |p: Position| !board.is_owned_by(p, player);

        let mut score = -self.config.edge_penalty * pos.edges_touched(rows, columns) as i32;

        let orthogonal = pos.orthogonal(rows, columns);
        if primed {
            let targets = orthogonal
                .iter()
                .filter(|p| foreign(**p) && board.value(**p) == PRIMED)
                .count() as i32;
            score += self.config.burst_bonus * targets;
        } else if orthogonal.iter().any(|p| board.value(*p) == PRIMED) {
            score -= self.config.adjacent_primed_penalty;
        }

        let diagonal = pos.diagonal(rows, columns);
        let corner_mass: i32 = diagonal
            .iter()
            .filter(|p| foreign(**p))
            .map(|p| i32::from(board.value(*p).saturating_sub(1)))
            .sum();
        if primed {
            score -= self.config.corner_burst_weight * corner_mass;
        } else if diagonal.iter().any(|p| foreign(*p) && board.value(*p) != 1) {
            score += self.config.corner_fill_weight * corner_mass;
        }

        score
    }

    /// Opening placement: the centre, else a diagonal neighbour of it, else
    /// the first empty cell.
    #[must_use]
    pub fn opening_move(board: &Board) -> Option<Position> {
        let (rows, columns) = board.dimensions();
        let center = center_of(board);
        let is_free = |pos: &Position| board.get(*pos).is_some_and(|cell| cell.is_empty());

        std::iter::once(center)
            .chain(
                OPENING_FALLBACKS
                    .iter()
                    .filter_map(|&(dr, dc)| center.offset(dr, dc, rows, columns)),
            )
            .find(is_free)
            .or_else(|| board.empty_cells().next())
    }

    fn select(board: &Board, scored: &[(Position, i32)]) -> Option<Position> {
        let best = scored.iter().map(|&(_, score)| score).max()?;
        let tied: Vec<Position> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(pos, _)| pos)
            .collect();

        if tied.len() == 1 {
            return tied.first().copied();
        }

        let preferred = TIE_BREAK_VALUES.iter().find_map(|&value| {
            let bucket: Vec<Position> = tied
                .iter()
                .copied()
                .filter(|&pos| board.value(pos) == value)
                .collect();
            (!bucket.is_empty()).then_some(bucket)
        });
        let bucket = preferred.unwrap_or(tied);

        let center = center_of(board);
        bucket.into_iter().min_by_key(|pos| pos.manhattan(center))
    }
}

impl MovePolicy for HeuristicPolicy {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        self.choose(board, player)
    }
}

/// Centre cell, `(rows / 2, columns / 2)`.
fn center_of(board: &Board) -> Position {
    Position::new(board.rows() / 2, board.columns() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(seed: &[Vec<i8>]) -> Board {
        Board::from_seed(seed.len(), seed[0].len(), seed).unwrap()
    }

    fn score_at(board: &Board, player: Player, row: usize, col: usize) -> Option<i32> {
        HeuristicPolicy::default().score_board(board, player)[row * board.columns() + col]
    }

    #[test]
    fn test_opening_takes_center() {
        let empty = Board::new(5, 5).unwrap();
        assert_eq!(
            HeuristicPolicy::default().choose(&empty, Player::White),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn test_opening_center_taken_prefers_bottom_right() {
        let mut seed = vec![vec![0i8; 4]; 4];
        seed[2][2] = -3;
        let b = board(&seed);
        assert_eq!(HeuristicPolicy::opening_move(&b), Some(Position::new(3, 3)));
    }

    #[test]
    fn test_opening_on_two_by_two() {
        let b = board(&[vec![0, 0], vec![0, -3]]);
        assert_eq!(HeuristicPolicy::opening_move(&b), Some(Position::new(0, 0)));

        let crowded = board(&[vec![-1, 0], vec![0, -3]]);
        assert_eq!(HeuristicPolicy::opening_move(&crowded), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_edge_penalty() {
        let b = board(&[
            vec![1, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, -1],
        ]);

        assert_eq!(score_at(&b, Player::White, 0, 0), Some(-2));
        assert_eq!(score_at(&b, Player::White, 2, 2), Some(0));
        assert_eq!(score_at(&b, Player::White, 4, 4), None);
        assert_eq!(HeuristicPolicy::default().choose(&b, Player::White), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_burst_bonus() {
        let b = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 3, -3, 0],
            vec![0, 0, 0, 0, 0],
            vec![2, 0, 0, 0, 0],
        ]);

        assert_eq!(score_at(&b, Player::White, 2, 2), Some(7));
        assert_eq!(score_at(&b, Player::White, 4, 0), Some(-2));
        assert_eq!(HeuristicPolicy::default().choose(&b, Player::White), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_adjacent_primed_penalty_applies_once() {
        let b = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, -3, 0, 0],
            vec![0, -3, 1, -3, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);

        // (2,2) touches three primed cells but is penalised once; its
        // diagonal (1,1) is its own.
        assert_eq!(score_at(&b, Player::White, 2, 2), Some(-3));
    }

    #[test]
    fn test_prefers_cell_away_from_primed_enemy() {
        let b = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 0, 0, 0],
            vec![0, 0, 1, -3, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);

        assert_eq!(score_at(&b, Player::White, 1, 1), Some(0));
        assert_eq!(score_at(&b, Player::White, 2, 2), Some(-3));
        assert_eq!(HeuristicPolicy::default().choose(&b, Player::White), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_corner_fill_and_burst() {
        let fill = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, -3, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        assert_eq!(score_at(&fill, Player::White, 2, 2), Some(2));

        let burst = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, -3, 0, 0, 0],
            vec![0, 0, 3, 0, 0],
            vec![0, 0, 0, -2, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        assert_eq!(score_at(&burst, Player::White, 2, 2), Some(-3));
    }

    #[test]
    fn test_own_diagonals_ignored() {
        let b = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 3, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, -1],
        ]);
        assert_eq!(score_at(&b, Player::White, 2, 2), Some(0));
    }

    #[test]
    fn test_tie_break_prefers_two() {
        let b = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 0, 2, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, -1],
        ]);
        assert_eq!(HeuristicPolicy::default().choose(&b, Player::White), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_tie_break_by_distance_to_center() {
        let b = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 2, 0, 0, 0],
            vec![0, 0, 2, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, -1],
        ]);
        assert_eq!(HeuristicPolicy::default().choose(&b, Player::White), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_tie_break_first_in_row_major() {
        let b = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 2, 0, 0],
            vec![0, 2, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, -1],
        ]);
        assert_eq!(HeuristicPolicy::default().choose(&b, Player::White), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_custom_weights() {
        let b = board(&[vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, -1]]);
        let policy = HeuristicPolicy::new(HeuristicConfig::default().with_edge_penalty(5));
        assert_eq!(policy.score_board(&b, Player::White)[0], Some(-10));
    }
}
