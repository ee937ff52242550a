//! Classical board view of a collapsed register
//!
//! Gantree: L1_Moves → ClassicalBoard
//!
//! The basis index is read as a zero-padded binary string laid out row-major,
//! so row-major position `p` maps to bit `N-1-p` of the index (qubit `N-1-p`).

use crate::constants::sim;
use crate::error::{QtttError, QtttResult};
use crate::types::{BoardIndex, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collapsed board of `dimension x dimension` classical cells
/// Gantree: ClassicalBoard // 고전 보드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalBoard {
    index: BoardIndex,
    dimension: usize,
}

impl ClassicalBoard {
    /// Create a board view of `index` on a `dimension`-wide grid
    pub fn new(index: BoardIndex, dimension: usize) -> QtttResult<Self> {
        if dimension == 0 || dimension > sim::MAX_DIMENSION {
            return Err(QtttError::InvalidDimension {
                value: dimension,
                max: sim::MAX_DIMENSION,
            });
        }

        let size = sim::state_dimension(dimension * dimension);
        if index >= size {
            return Err(QtttError::InvalidBoardIndex { index, size });
        }

        Ok(Self { index, dimension })
    }

    /// Basis-state index
    pub fn index(&self) -> BoardIndex {
        self.index
    }

    /// Linear board size
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells
    pub fn num_cells(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Qubit backing the cell at row-major position `position`
    #[inline]
    pub fn qubit_for_position(position: usize, num_cells: usize) -> QubitId {
        num_cells - 1 - position
    }

    /// Cell value (0 or 1) at row-major `position`
    #[inline]
    pub fn cell_at(&self, position: usize) -> u8 {
        let qubit = Self::qubit_for_position(position, self.num_cells());
        ((self.index >> qubit) & 1) as u8
    }

    /// Cell value (0 or 1) at (row, col)
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cell_at(row * self.dimension + col)
    }

    /// Cells in row-major order
    pub fn cells(&self) -> Vec<u8> {
        (0..self.num_cells()).map(|p| self.cell_at(p)).collect()
    }

    /// Zero-padded binary string, most significant bit first
    pub fn to_bitstring(&self) -> String {
        format!("{:0width$b}", self.index, width = self.num_cells())
    }
}

impl fmt::Display for ClassicalBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.dimension {
                let mark = if self.cell(row, col) == 0 { 'O' } else { 'X' };
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_bitstring() {
        // 0b0001 -> "0001" -> rows 00 / 01
        let board = ClassicalBoard::new(0b0001, 2).unwrap();
        assert_eq!(board.to_bitstring(), "0001");
        assert_eq!(board.cells(), vec![0, 0, 0, 1]);
        assert_eq!(board.cell(1, 1), 1);
        assert_eq!(board.cell(0, 0), 0);
    }

    #[test]
    fn test_qubit_mapping() {
        assert_eq!(ClassicalBoard::qubit_for_position(0, 9), 8);
        assert_eq!(ClassicalBoard::qubit_for_position(8, 9), 0);
    }

    #[test]
    fn test_display() {
        let board = ClassicalBoard::new(0b111_000_010, 3).unwrap();
        assert_eq!(board.to_string(), "XXX\nOOO\nOXO");
    }

    #[test]
    fn test_index_out_of_range() {
        assert_eq!(
            ClassicalBoard::new(16, 2),
            Err(QtttError::InvalidBoardIndex {
                index: 16,
                size: 16
            })
        );
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            ClassicalBoard::new(0, 0),
            Err(QtttError::InvalidDimension { value: 0, .. })
        ));
    }

    #[test]
    fn test_huge_dimension_is_rejected() {
        assert_eq!(
            ClassicalBoard::new(0, usize::MAX),
            Err(QtttError::InvalidDimension {
                value: usize::MAX,
                max: sim::MAX_DIMENSION
            })
        );
        assert!(ClassicalBoard::new(0, sim::MAX_DIMENSION + 1).is_err());
        assert!(ClassicalBoard::new(0, sim::MAX_DIMENSION).is_ok());
    }
}
