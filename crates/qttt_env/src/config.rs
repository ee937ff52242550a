//! Environment configuration
//!
//! Gantree: L4_Env → EnvConfig
//!
//! Board size, reward shaping, snapshot precision, and RNG seed for a game
//! session.

use qttt_core::{game, sim, QtttError, QtttResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game environment configuration
/// Gantree: EnvConfig // 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Linear board size (N = grid_size^2 qubits)
    /// Gantree: grid_size: usize // 보드 크기 (3)
    pub grid_size: usize,

    /// Reward returned by every step
    /// Gantree: step_reward: f64 // 스텝 보상 (-0.1)
    pub step_reward: f64,

    /// Decimal places kept in amplitude snapshots, `None` for full precision
    pub display_decimals: Option<u32>,

    /// Seed for the collapse RNG, `None` draws from entropy
    /// Gantree: seed: Option<u64> // 시드
    pub seed: Option<u64>,
}

impl EnvConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Classic 3x3 board
    pub fn default_3x3() -> Self {
        Self {
            grid_size: game::DEFAULT_GRID_SIZE,
            step_reward: game::STEP_REWARD,
            display_decimals: Some(game::DISPLAY_DECIMALS),
            seed: None,
        }
    }

    /// Configuration for a `d x d` board
    pub fn for_grid(d: usize) -> Self {
        Self::default_3x3().with_grid_size(d)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set board size
    pub fn with_grid_size(mut self, d: usize) -> Self {
        self.grid_size = d;
        self
    }

    /// Set per-step reward
    pub fn with_step_reward(mut self, reward: f64) -> Self {
        self.step_reward = reward;
        self
    }

    /// Set snapshot precision
    pub fn with_display_decimals(mut self, decimals: Option<u32>) -> Self {
        self.display_decimals = decimals;
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Number of qubits (one per cell)
    pub fn num_qubits(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Number of moves available on this board
    pub fn action_space_size(&self) -> usize {
        game::move_count(self.num_qubits())
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> QtttResult<()> {
        if self.grid_size == 0 || self.grid_size > sim::MAX_DIMENSION {
            return Err(QtttError::InvalidDimension {
                value: self.grid_size,
                max: sim::MAX_DIMENSION,
            });
        }

        if !self.step_reward.is_finite() {
            return Err(QtttError::InvalidConfig(format!(
                "step_reward must be finite, got {}",
                self.step_reward
            )));
        }

        if let Some(decimals) = self.display_decimals {
            if decimals > sim::MAX_ROUNDING_DECIMALS {
                return Err(QtttError::InvalidConfig(format!(
                    "display_decimals must be <= {}, got {}",
                    sim::MAX_ROUNDING_DECIMALS, decimals
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> QtttResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate from JSON
    pub fn from_json(json: &str) -> QtttResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::default_3x3()
    }
}

impl fmt::Display for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EnvConfig({}x{}, moves={}, reward={}, seed={:?})",
            self.grid_size,
            self.grid_size,
            self.action_space_size(),
            self.step_reward,
            self.seed
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_3x3() {
        let config = EnvConfig::default_3x3();

        assert_eq!(config.grid_size, 3);
        assert_eq!(config.num_qubits(), 9);
        assert_eq!(config.action_space_size(), 90);
        assert_eq!(config.step_reward, -0.1);
        assert_eq!(config.display_decimals, Some(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EnvConfig::for_grid(2)
            .with_step_reward(-0.5)
            .with_display_decimals(None)
            .with_seed(42);

        assert_eq!(config.num_qubits(), 4);
        assert_eq!(config.step_reward, -0.5);
        assert_eq!(config.display_decimals, None);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            EnvConfig::for_grid(0).validate(),
            Err(QtttError::InvalidDimension { value: 0, .. })
        ));
        assert!(EnvConfig::for_grid(5).validate().is_err());
        assert!(matches!(
            EnvConfig::default().with_step_reward(f64::NAN).validate(),
            Err(QtttError::InvalidConfig(_))
        ));
        assert!(EnvConfig::default()
            .with_display_decimals(Some(20))
            .validate()
            .is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = EnvConfig::for_grid(2).with_seed(7);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"grid_size\": 2"));
        assert_eq!(EnvConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let json = r#"{"grid_size": 9, "step_reward": -0.1, "display_decimals": 2, "seed": null}"#;
        assert!(matches!(
            EnvConfig::from_json(json),
            Err(QtttError::InvalidDimension { value: 9, .. })
        ));
        assert!(matches!(
            EnvConfig::from_json("{"),
            Err(QtttError::JsonError(_))
        ));
    }
}
