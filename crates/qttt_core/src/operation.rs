//! Quantum operations available as moves
//!
//! Gantree: L1_Moves → Operation
//!
//! The three gates a player may place on the board, together with the
//! unitary matrices they denote.

use crate::error::{QtttError, QtttResult};
use crate::types::{Amplitude, QubitId};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// 2x2 complex matrix, row-major
pub type Matrix2 = [[Amplitude; 2]; 2];

/// 4x4 complex matrix, row-major
pub type Matrix4 = [[Amplitude; 4]; 4];

const ZERO: Amplitude = Amplitude::new(0.0, 0.0);
const ONE: Amplitude = Amplitude::new(1.0, 0.0);
const H: Amplitude = Amplitude::new(FRAC_1_SQRT_2, 0.0);

/// Hadamard matrix
pub const HADAMARD: Matrix2 = [[H, H], [H, Amplitude::new(-FRAC_1_SQRT_2, 0.0)]];

/// Pauli-X (NOT) matrix
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Controlled-X matrix in the |control target⟩ basis (00, 01, 10, 11)
pub const CONTROLLED_X: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// Unitary denoted by an operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unitary {
    /// Acts on one qubit
    Single(Matrix2),
    /// Acts on an ordered qubit pair
    Two(Matrix4),
}

impl Unitary {
    /// Matrix dimension (2 or 4)
    pub fn dimension(&self) -> usize {
        match self {
            Unitary::Single(_) => 2,
            Unitary::Two(_) => 4,
        }
    }

    /// Element at (row, col)
    pub fn entry(&self, row: usize, col: usize) -> Amplitude {
        match self {
            Unitary::Single(m) => m[row][col],
            Unitary::Two(m) => m[row][col],
        }
    }

    /// Check U·U† = I within `tol`
    pub fn is_unitary(&self, tol: f64) -> bool {
        let n = self.dimension();
        for i in 0..n {
            for j in 0..n {
                let dot: Amplitude = (0..n)
                    .map(|k| self.entry(i, k) * self.entry(j, k).conj())
                    .sum();
                let expected = if i == j { ONE } else { ZERO };
                if (dot - expected).norm() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Target block of a controlled two-qubit unitary
    ///
    /// Returns the lower-right 2x2 block when the matrix is the identity on
    /// the control = 0 subspace and does not mix the two subspaces.
    pub fn controlled_target(&self) -> Option<Matrix2> {
        let m = match self {
            Unitary::Single(_) => return None,
            Unitary::Two(m) => m,
        };

        for (row, entries) in m.iter().enumerate() {
            for (col, &value) in entries.iter().enumerate() {
                if row >= 2 && col >= 2 {
                    continue;
                }
                let expected = if row == col { ONE } else { ZERO };
                if value != expected {
                    return None;
                }
            }
        }

        Some([[m[2][2], m[2][3]], [m[3][2], m[3][3]]])
    }
}

/// A move's quantum operation
/// Gantree: Operation // 게이트 enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Equal superposition relative to the current state
    /// Gantree: Hadamard(QubitId) // 하다마드
    Hadamard(QubitId),

    /// Bit flip
    /// Gantree: PauliX(QubitId) // 파울리 X
    PauliX(QubitId),

    /// Target flip conditioned on the control qubit
    /// Gantree: ControlledX{{c,t}} // ctrl, tgt
    ControlledX {
        /// Control qubit
        control: QubitId,
        /// Target qubit
        target: QubitId,
    },
}

impl Operation {
    /// Qubits the operation acts on, control first
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Hadamard(q) | Operation::PauliX(q) => vec![*q],
            Operation::ControlledX { control, target } => vec![*control, *target],
        }
    }

    /// Check if the operation acts on a single qubit
    pub fn is_single_qubit(&self) -> bool {
        !self.is_two_qubit()
    }

    /// Check if the operation acts on two qubits
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Operation::ControlledX { .. })
    }

    /// Gate name in OpenQASM spelling
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Hadamard(_) => "h",
            Operation::PauliX(_) => "x",
            Operation::ControlledX { .. } => "cx",
        }
    }

    /// Unitary matrix this operation denotes
    pub fn matrix(&self) -> Unitary {
        match self {
            Operation::Hadamard(_) => Unitary::Single(HADAMARD),
            Operation::PauliX(_) => Unitary::Single(PAULI_X),
            Operation::ControlledX { .. } => Unitary::Two(CONTROLLED_X),
        }
    }

    /// Validate qubit indices against a register of `num_qubits`
    /// Gantree: validate(n) -> Result // 인덱스 검증
    pub fn validate(&self, num_qubits: usize) -> QtttResult<()> {
        for qubit in self.qubits() {
            if qubit >= num_qubits {
                return Err(QtttError::InvalidQubitIndex { qubit, num_qubits });
            }
        }

        if let Operation::ControlledX { control, target } = self {
            if control == target {
                return Err(QtttError::DuplicateQubitIndex(*control));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Hadamard(q) | Operation::PauliX(q) => {
                write!(f, "{} q[{}]", self.name(), q)
            }
            Operation::ControlledX { control, target } => {
                write!(f, "{} q[{}],q[{}]", self.name(), control, target)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cx(control: QubitId, target: QubitId) -> Operation {
        Operation::ControlledX { control, target }
    }

    #[test]
    fn test_qubits() {
        assert_eq!(Operation::Hadamard(3).qubits(), vec![3]);
        assert_eq!(cx(1, 0).qubits(), vec![1, 0]);
    }

    #[test]
    fn test_classification() {
        assert!(Operation::PauliX(0).is_single_qubit());
        assert!(cx(0, 1).is_two_qubit());
        assert!(!cx(0, 1).is_single_qubit());
    }

    #[test]
    fn test_matrices_are_unitary() {
        for op in [Operation::Hadamard(0), Operation::PauliX(0), cx(0, 1)] {
            assert!(op.matrix().is_unitary(1e-12), "{} is not unitary", op);
        }
    }

    #[test]
    fn test_hadamard_entries() {
        let m = Operation::Hadamard(0).matrix();
        assert_eq!(m.dimension(), 2);
        assert_relative_eq!(m.entry(0, 0).re, FRAC_1_SQRT_2);
        assert_relative_eq!(m.entry(1, 1).re, -FRAC_1_SQRT_2);
    }

    #[test]
    fn test_controlled_x_swaps_lower_block() {
        let m = cx(0, 1).matrix();
        assert_eq!(m.dimension(), 4);
        assert_eq!(m.entry(2, 3), ONE);
        assert_eq!(m.entry(3, 2), ONE);
        assert_eq!(m.entry(2, 2), ZERO);
        assert_eq!(m.entry(0, 0), ONE);
    }

    #[test]
    fn test_controlled_target_block() {
        assert_eq!(cx(0, 1).matrix().controlled_target(), Some(PAULI_X));
        assert_eq!(Operation::Hadamard(0).matrix().controlled_target(), None);

        // SWAP mixes the control subspaces
        let swap = Unitary::Two([
            [ONE, ZERO, ZERO, ZERO],
            [ZERO, ZERO, ONE, ZERO],
            [ZERO, ONE, ZERO, ZERO],
            [ZERO, ZERO, ZERO, ONE],
        ]);
        assert_eq!(swap.controlled_target(), None);
    }

    #[test]
    fn test_validate_range() {
        assert!(Operation::Hadamard(8).validate(9).is_ok());
        assert_eq!(
            Operation::PauliX(9).validate(9),
            Err(QtttError::InvalidQubitIndex {
                qubit: 9,
                num_qubits: 9
            })
        );
        assert!(matches!(
            cx(0, 12).validate(9),
            Err(QtttError::InvalidQubitIndex { qubit: 12, .. })
        ));
    }

    #[test]
    fn test_validate_duplicate() {
        assert_eq!(cx(2, 2).validate(4), Err(QtttError::DuplicateQubitIndex(2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Hadamard(0).to_string(), "h q[0]");
        assert_eq!(cx(0, 1).to_string(), "cx q[0],q[1]");
    }
}
