//! Qubit register for the board
//!
//! Gantree: L2_Simulator → QubitRegister
//!
//! Dense state vector of `2^N` complex amplitudes, where bit `i` of an index
//! is the classical value of qubit `i`. The vector stays normalized across
//! every operation and across collapse.

use crate::kernel;
use crate::sampling::sample_index;
use qttt_core::{sim, Amplitude, BoardIndex, Operation, QtttError, QtttResult, Unitary};
use rand::Rng;
use std::fmt;

/// N-qubit register in a dense amplitude representation
/// Gantree: QubitRegister // 상태 벡터
#[derive(Debug, Clone, PartialEq)]
pub struct QubitRegister {
    /// Number of qubits
    num_qubits: usize,

    /// Amplitudes indexed by basis state
    amplitudes: Vec<Amplitude>,

    /// Sampled index once the register has been observed
    collapsed: Option<BoardIndex>,
}

impl QubitRegister {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a register with every qubit in equal superposition
    /// Gantree: initialize(n) -> Result<Self> // 균등 중첩
    pub fn initialize(num_qubits: usize) -> QtttResult<Self> {
        if num_qubits == 0 || num_qubits > sim::MAX_QUBITS {
            return Err(QtttError::InvalidDimension {
                value: num_qubits,
                max: sim::MAX_QUBITS,
            });
        }

        let dim = sim::state_dimension(num_qubits);
        let amp = Amplitude::new(1.0 / (dim as f64).sqrt(), 0.0);

        log::trace!("initialized {}-qubit register ({} amplitudes)", num_qubits, dim);

        Ok(Self {
            num_qubits,
            amplitudes: vec![amp; dim],
            collapsed: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^N)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Borrow the amplitude vector
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    /// Snapshot of the amplitude vector
    pub fn observe_amplitudes(&self) -> Vec<Amplitude> {
        self.amplitudes.clone()
    }

    /// Snapshot with each component rounded to `decimals` places
    ///
    /// Precision beyond [`sim::MAX_ROUNDING_DECIMALS`] keeps every component
    /// unrounded.
    pub fn rounded_amplitudes(&self, decimals: u32) -> Vec<Amplitude> {
        if decimals > sim::MAX_ROUNDING_DECIMALS {
            return self.observe_amplitudes();
        }

        let scale = 10f64.powi(decimals as i32);
        let round = |x: f64| (x * scale).round() / scale;
        self.amplitudes
            .iter()
            .map(|a| Amplitude::new(round(a.re), round(a.im)))
            .collect()
    }

    /// Probability of every basis state, |a_i|^2
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Total probability mass
    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Check the unit-norm invariant within `tol`
    pub fn is_normalized(&self, tol: f64) -> bool {
        (self.norm_squared() - 1.0).abs() <= tol
    }

    /// Check if the register has been observed
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.is_some()
    }

    /// Index sampled by [`QubitRegister::collapse`], if any
    pub fn collapsed_index(&self) -> Option<BoardIndex> {
        self.collapsed
    }

    // ========================================================================
    // Evolution
    // ========================================================================

    /// Apply an operation in place
    /// Gantree: apply_operation(op) -> Result // 게이트 적용
    ///
    /// Indices are validated before the vector is touched, so a rejected
    /// operation leaves the register unchanged.
    pub fn apply_operation(&mut self, operation: &Operation) -> QtttResult<()> {
        if self.collapsed.is_some() {
            return Err(QtttError::RegisterCollapsed);
        }
        operation.validate(self.num_qubits)?;

        // qubits() is control first, matching the |control target⟩ basis
        let qubits = operation.qubits();
        let unitary = operation.matrix();
        match (unitary, unitary.controlled_target()) {
            (Unitary::Single(m), _) => kernel::apply_single(&mut self.amplitudes, qubits[0], &m),
            (Unitary::Two(_), Some(block)) => {
                kernel::apply_controlled(&mut self.amplitudes, qubits[0], qubits[1], &block)
            }
            (Unitary::Two(m), None) => {
                kernel::apply_two(&mut self.amplitudes, qubits[0], qubits[1], &m)
            }
        }

        log::trace!("applied {}", operation);
        Ok(())
    }

    // ========================================================================
    // Measurement
    // ========================================================================

    /// Sample one classical basis state and project onto it
    /// Gantree: collapse(rng) -> BoardIndex // 측정
    ///
    /// Uses a single uniform draw against the cumulative |a_i|^2 in index
    /// order. A collapsed register keeps returning the same index.
    pub fn collapse<R: Rng + ?Sized>(&mut self, rng: &mut R) -> BoardIndex {
        if let Some(index) = self.collapsed {
            return index;
        }

        let draw: f64 = rng.gen();
        let index = sample_index(&self.probabilities(), draw);

        self.amplitudes.fill(Amplitude::new(0.0, 0.0));
        self.amplitudes[index] = Amplitude::new(1.0, 0.0);
        self.collapsed = Some(index);

        log::trace!("collapsed to |{:0width$b}⟩", index, width = self.num_qubits);
        index
    }
}

impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.collapsed {
            Some(index) => write!(
                f,
                "QubitRegister({}Q, collapsed=|{:0width$b}⟩)",
                self.num_qubits,
                index,
                width = self.num_qubits
            ),
            None => write!(
                f,
                "QubitRegister({}Q, norm={:.6})",
                self.num_qubits,
                self.norm_squared()
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
