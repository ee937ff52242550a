//! Move vocabulary
//!
//! Gantree: L1_Moves → MoveTable
//!
//! Ordered association from move identifiers to operations. Identifiers are
//! dense and insertion-ordered so they are stable across runs:
//! `H(0), X(0), H(1), X(1), ...` followed by every ordered `CX(c, t)` pair in
//! lexicographic order.

use crate::constants::{game, sim};
use crate::error::{QtttError, QtttResult};
use crate::operation::Operation;
use crate::types::{MoveId, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the move table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Move identifier
    pub id: MoveId,

    /// Qubits the move acts on
    pub qubits: Vec<QubitId>,

    /// Operation applied by the move
    pub operation: Operation,
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}: {}", self.id, self.operation)
    }
}

/// Move table for a fixed qubit count
/// Gantree: MoveTable // 수 목록
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTable {
    num_qubits: usize,
    entries: Vec<MoveEntry>,
}

impl MoveTable {
    /// Generate the move table for `num_qubits`
    /// Gantree: generate(n) -> Result<Self> // 수 생성
    ///
    /// `num_qubits` is bounded by [`sim::MAX_QUBITS`], the largest register
    /// a table can drive.
    pub fn generate(num_qubits: usize) -> QtttResult<Self> {
        if num_qubits > sim::MAX_QUBITS {
            return Err(QtttError::InvalidDimension {
                value: num_qubits,
                max: sim::MAX_QUBITS,
            });
        }

        let mut entries = Vec::with_capacity(game::move_count(num_qubits));

        let mut push = |operation: Operation| {
            entries.push(MoveEntry {
                id: entries.len(),
                qubits: operation.qubits(),
                operation,
            });
        };

        for q in 0..num_qubits {
            push(Operation::Hadamard(q));
            push(Operation::PauliX(q));
        }

        for control in 0..num_qubits {
            for target in (0..num_qubits).filter(|&t| t != control) {
                push(Operation::ControlledX { control, target });
            }
        }

        Ok(Self {
            num_qubits,
            entries,
        })
    }

    /// Look up a move by identifier
    pub fn lookup(&self, id: MoveId) -> QtttResult<&MoveEntry> {
        self.entries
            .get(id)
            .ok_or(QtttError::UnknownMoveIdentifier {
                id,
                table_size: self.entries.len(),
            })
    }

    /// Find the identifier of an operation
    pub fn find(&self, operation: &Operation) -> Option<MoveId> {
        self.entries
            .iter()
            .find(|e| &e.operation == operation)
            .map(|e| e.id)
    }

    /// Qubit count the table was generated for
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &MoveEntry> {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
