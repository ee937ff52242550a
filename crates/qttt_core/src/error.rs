//! Error types for QTTT
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every variant is a synchronous contract violation raised at the call that
//! broke the precondition. No operation partially applies before failing.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QTTT
/// Gantree: QtttError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QtttError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Qubit count or board dimension outside the supported range
    /// Gantree: InvalidDimension{{value,max}} // 차원 범위
    #[error("Invalid dimension {value}: must be in range [1, {max}]")]
    InvalidDimension { value: usize, max: usize },

    /// Qubit index outside [0, N)
    /// Gantree: InvalidQubitIndex{{q,n}} // 큐비트 범위
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    InvalidQubitIndex { qubit: usize, num_qubits: usize },

    /// Two-qubit operation whose control and target coincide
    #[error("Duplicate qubit index {0}: control and target must differ")]
    DuplicateQubitIndex(usize),

    /// Move identifier not present in the move table
    #[error("Unknown move identifier {id}: table has {table_size} entries")]
    UnknownMoveIdentifier { id: usize, table_size: usize },

    /// Classical board index outside [0, 2^N)
    #[error("Board index {index} out of range: table has {size} entries")]
    InvalidBoardIndex { index: usize, size: usize },

    /// Probability vector length does not match the outcome table
    #[error("Length mismatch: expected {expected} entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    // ========================================================================
    // Register State Errors
    // ========================================================================
    /// Operation applied after the register was observed
    #[error("Register has collapsed; reset before applying further operations")]
    RegisterCollapsed,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Environment configuration rejected by validation
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for QTTT operations
/// Gantree: QtttResult<T> // type alias
pub type QtttResult<T> = Result<T, QtttError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QtttError {
    fn from(err: serde_json::Error) -> Self {
        QtttError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QtttError {
    /// Check if error is an input validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            QtttError::InvalidDimension { .. }
                | QtttError::InvalidQubitIndex { .. }
                | QtttError::DuplicateQubitIndex(_)
                | QtttError::UnknownMoveIdentifier { .. }
                | QtttError::InvalidBoardIndex { .. }
                | QtttError::LengthMismatch { .. }
        )
    }

    /// Check if the error is cleared by resetting the register
    pub fn is_cleared_by_reset(&self) -> bool {
        matches!(self, QtttError::RegisterCollapsed)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QtttError::InvalidQubitIndex {
            qubit: 12,
            num_qubits: 9,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_duplicate_display() {
        let err = QtttError::DuplicateQubitIndex(4);
        assert!(err.to_string().contains("4"));
    }

    #[test]
    fn test_is_validation_error() {
        assert!(QtttError::DuplicateQubitIndex(0).is_validation_error());
        assert!(QtttError::UnknownMoveIdentifier {
            id: 200,
            table_size: 90
        }
        .is_validation_error());
        assert!(!QtttError::RegisterCollapsed.is_validation_error());
        assert!(!QtttError::InvalidConfig("x".into()).is_validation_error());
    }

    #[test]
    fn test_cleared_by_reset() {
        assert!(QtttError::RegisterCollapsed.is_cleared_by_reset());
        assert!(!QtttError::DuplicateQubitIndex(1).is_cleared_by_reset());
    }

    #[test]
    fn test_from_json_error() {
        let err: QtttError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, QtttError::JsonError(_)));
    }
}
