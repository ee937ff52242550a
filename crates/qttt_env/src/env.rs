//! Quantum Tic-Tac-Toe environment
//!
//! Gantree: L4_Env → QuantumTicTacToeEnv
//!
//! Thin game loop over the engine: moves are looked up in the move table and
//! forwarded to the register, `resolve` collapses the board and reads the
//! result from the outcome table.

use crate::config::EnvConfig;
use qttt_core::{
    Amplitude, BoardIndex, ClassicalBoard, GameResult, MoveId, MoveTable, QtttError, QtttResult,
};
use qttt_outcome::{OutcomeDistribution, OutcomeTable};
use qttt_sim::QubitRegister;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Observation returned by [`QuantumTicTacToeEnv::step`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Amplitude snapshot after the move
    pub state: Vec<Amplitude>,

    /// Fixed per-move reward
    pub reward: f64,

    /// Always false; only `resolve` ends a game
    pub done: bool,
}

/// Outcome of [`QuantumTicTacToeEnv::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Result label
    pub result: GameResult,

    /// Collapsed basis-state index
    pub index: BoardIndex,

    /// Classical board view of `index`
    pub board: ClassicalBoard,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{}", self.result)
    }
}

/// Game session on a `d x d` quantum board
/// Gantree: QuantumTicTacToeEnv // 게임 환경
pub struct QuantumTicTacToeEnv {
    /// Configuration
    config: EnvConfig,

    /// Move vocabulary
    moves: MoveTable,

    /// Result per classical board, shareable across sessions
    outcomes: Arc<OutcomeTable>,

    /// Board state
    register: QubitRegister,

    /// Collapse RNG
    rng: StdRng,

    /// Applied move identifiers
    history: Vec<MoveId>,
}

impl QuantumTicTacToeEnv {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new environment, building its own outcome table
    pub fn new(config: EnvConfig) -> QtttResult<Self> {
        config.validate()?;
        let outcomes = Arc::new(OutcomeTable::build(config.grid_size)?);
        Self::with_outcomes(config, outcomes)
    }

    /// Create a new environment reusing a prebuilt outcome table
    pub fn with_outcomes(config: EnvConfig, outcomes: Arc<OutcomeTable>) -> QtttResult<Self> {
        config.validate()?;
        if outcomes.dimension() != config.grid_size {
            return Err(QtttError::InvalidConfig(format!(
                "outcome table is {}x{} but grid_size is {}",
                outcomes.dimension(),
                outcomes.dimension(),
                config.grid_size
            )));
        }

        let register = QubitRegister::initialize(config.num_qubits())?;
        let moves = MoveTable::generate(config.num_qubits())?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::debug!("created environment: {}", config);

        Ok(Self {
            config,
            moves,
            outcomes,
            register,
            rng,
            history: Vec::new(),
        })
    }

    // ========================================================================
    // Game Loop
    // ========================================================================

    /// Apply a move and observe the board
    /// Gantree: step(action) -> Result<StepResult> // 수 적용
    pub fn step(&mut self, move_id: MoveId) -> QtttResult<StepResult> {
        let entry = self.moves.lookup(move_id)?;
        if let Err(err) = self.register.apply_operation(&entry.operation) {
            if err.is_cleared_by_reset() {
                log::warn!("move {} rejected after resolve, reset to play again", move_id);
            }
            return Err(err);
        }
        self.history.push(move_id);

        log::debug!("move {} ({}), history {}", move_id, entry.operation, self.status_id());

        Ok(StepResult {
            state: self.snapshot(),
            reward: self.config.step_reward,
            done: false,
        })
    }

    /// Restart from the equal superposition
    /// Gantree: reset() -> Result<Vec<Amplitude>> // 초기화
    pub fn reset(&mut self) -> QtttResult<Vec<Amplitude>> {
        self.register = QubitRegister::initialize(self.config.num_qubits())?;
        self.history.clear();
        Ok(self.snapshot())
    }

    /// Collapse the board and classify the result
    /// Gantree: resolve() -> Result<Resolution> // 측정+판정
    pub fn resolve(&mut self) -> QtttResult<Resolution> {
        let index = self.register.collapse(&mut self.rng);
        self.finish(index)
    }

    /// [`QuantumTicTacToeEnv::resolve`] with a caller-supplied RNG
    pub fn resolve_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QtttResult<Resolution> {
        let index = self.register.collapse(rng);
        self.finish(index)
    }

    fn finish(&self, index: BoardIndex) -> QtttResult<Resolution> {
        let result = self.outcomes.classify(index)?;
        let board = ClassicalBoard::new(index, self.config.grid_size)?;

        log::info!("board collapsed to {}: {}", board.to_bitstring(), result);

        Ok(Resolution {
            result,
            index,
            board,
        })
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Amplitude snapshot rounded per configuration
    pub fn snapshot(&self) -> Vec<Amplitude> {
        match self.config.display_decimals {
            Some(decimals) => self.register.rounded_amplitudes(decimals),
            None => self.register.observe_amplitudes(),
        }
    }

    /// Probability of each result if the board collapsed now
    pub fn outcome_probabilities(&self) -> QtttResult<OutcomeDistribution> {
        self.outcomes.distribution(&self.register.probabilities())
    }

    /// Move history as `"3-5-"`
    pub fn status_id(&self) -> String {
        self.history.iter().map(|id| format!("{}-", id)).collect()
    }

    /// Applied move identifiers
    pub fn history(&self) -> &[MoveId] {
        &self.history
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Configuration
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Number of available moves
    pub fn action_space_size(&self) -> usize {
        self.moves.len()
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.register.num_qubits()
    }

    /// Move vocabulary
    pub fn moves(&self) -> &MoveTable {
        &self.moves
    }

    /// Outcome table
    pub fn outcomes(&self) -> &Arc<OutcomeTable> {
        &self.outcomes
    }

    /// Board state
    pub fn register(&self) -> &QubitRegister {
        &self.register
    }
}

impl fmt::Display for QuantumTicTacToeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuantumTicTacToeEnv({}x{}, moves={}, history={})",
            self.config.grid_size,
            self.config.grid_size,
            self.history.len(),
            self.status_id()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
