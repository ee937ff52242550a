//! Precomputed outcome table
//!
//! Gantree: L3_Outcome → OutcomeTable
//!
//! Classifies every classical board of a `d x d` grid once, so the result of
//! a collapse is a single vector lookup.

use crate::lines::{all_lines, Line};
use qttt_core::{sim, BoardIndex, ClassicalBoard, GameResult, QtttError, QtttResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of boards per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    /// Boards won by player A (all-zero line)
    pub player_a: usize,
    /// Boards won by player B (all-one line)
    pub player_b: usize,
    /// Drawn boards
    pub draw: usize,
}

impl OutcomeCounts {
    /// Total number of boards
    pub fn total(&self) -> usize {
        self.player_a + self.player_b + self.draw
    }
}

/// Probability mass per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    /// P(player A wins)
    pub player_a: f64,
    /// P(player B wins)
    pub player_b: f64,
    /// P(draw)
    pub draw: f64,
}

impl OutcomeDistribution {
    /// Probability of a label
    pub fn get(&self, result: GameResult) -> f64 {
        match result {
            GameResult::PlayerA => self.player_a,
            GameResult::PlayerB => self.player_b,
            GameResult::Draw => self.draw,
        }
    }

    /// Total mass (1 for a normalized state)
    pub fn total(&self) -> f64 {
        self.player_a + self.player_b + self.draw
    }
}

impl fmt::Display for OutcomeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P(A)={:.4}, P(B)={:.4}, P(draw)={:.4}",
            self.player_a, self.player_b, self.draw
        )
    }
}

/// Classify one board given as row-major cells
///
/// A player who owns any complete line wins; owning lines for both players
/// cancels out into a draw.
pub fn classify_cells(cells: &[u8], lines: &[Line]) -> GameResult {
    let owns_line = |player: GameResult| {
        lines
            .iter()
            .any(|line| line.iter().all(|&p| Some(cells[p]) == player.line_value()))
    };

    match (owns_line(GameResult::PlayerA), owns_line(GameResult::PlayerB)) {
        (true, false) => GameResult::PlayerA,
        (false, true) => GameResult::PlayerB,
        _ => GameResult::Draw,
    }
}

/// Result label for every classical board of a given size
/// Gantree: OutcomeTable // 결과 테이블
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTable {
    /// Linear board size
    dimension: usize,

    /// Label per basis-state index
    labels: Vec<GameResult>,
}

impl OutcomeTable {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Enumerate and classify all 2^(d^2) boards
    /// Gantree: build(d) -> Result<Self> // 전수 분류
    pub fn build(dimension: usize) -> QtttResult<Self> {
        if dimension == 0 || dimension > sim::MAX_DIMENSION {
            return Err(QtttError::InvalidDimension {
                value: dimension,
                max: sim::MAX_DIMENSION,
            });
        }

        let num_cells = dimension * dimension;
        let size = sim::state_dimension(num_cells);
        let lines = all_lines(dimension);

        let mut cells = vec![0u8; num_cells];
        let mut labels = Vec::with_capacity(size);

        for index in 0..size {
            for (p, cell) in cells.iter_mut().enumerate() {
                let qubit = ClassicalBoard::qubit_for_position(p, num_cells);
                *cell = ((index >> qubit) & 1) as u8;
            }
            labels.push(classify_cells(&cells, &lines));
        }

        log::trace!(
            "built {}x{} outcome table ({} boards)",
            dimension,
            dimension,
            size
        );

        Ok(Self { dimension, labels })
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Label of a collapsed board
    /// Gantree: classify(index) -> Result<GameResult> // O(1) 조회
    pub fn classify(&self, index: BoardIndex) -> QtttResult<GameResult> {
        self.get(index).ok_or(QtttError::InvalidBoardIndex {
            index,
            size: self.labels.len(),
        })
    }

    /// Label of a collapsed board, `None` when out of range
    #[inline]
    pub fn get(&self, index: BoardIndex) -> Option<GameResult> {
        self.labels.get(index).copied()
    }

    /// Every board index carrying `result`, ascending
    pub fn indices_for(&self, result: GameResult) -> Vec<BoardIndex> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| label == result)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of boards per label
    pub fn counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for label in &self.labels {
            match label {
                GameResult::PlayerA => counts.player_a += 1,
                GameResult::PlayerB => counts.player_b += 1,
                GameResult::Draw => counts.draw += 1,
            }
        }
        counts
    }

    /// Sum basis-state probabilities by label
    pub fn distribution(&self, probabilities: &[f64]) -> QtttResult<OutcomeDistribution> {
        if probabilities.len() != self.labels.len() {
            return Err(QtttError::LengthMismatch {
                expected: self.labels.len(),
                actual: probabilities.len(),
            });
        }

        let mut dist = OutcomeDistribution::default();
        for (label, &p) in self.labels.iter().zip(probabilities) {
            match label {
                GameResult::PlayerA => dist.player_a += p,
                GameResult::PlayerB => dist.player_b += p,
                GameResult::Draw => dist.draw += p,
            }
        }
        Ok(dist)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Linear board size
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of qubits (cells)
    pub fn num_qubits(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Number of boards (2^N)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a built table
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for OutcomeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.counts();
        write!(
            f,
            "OutcomeTable({}x{}, A={}, B={}, draw={})",
            self.dimension, self.dimension, counts.player_a, counts.player_b, counts.draw
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
