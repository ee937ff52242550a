//! Cumulative-distribution sampling
//!
//! Gantree: L2_Simulator → Sampling

/// Pick the first index whose cumulative probability exceeds `draw`
///
/// `draw` is expected in [0, 1). When rounding leaves `draw` at or above the
/// total mass, the last index with non-zero probability is returned.
pub fn sample_index(probabilities: &[f64], draw: f64) -> usize {
    let mut cumsum = 0.0;

    for (i, &p) in probabilities.iter().enumerate() {
        cumsum += p;
        if draw < cumsum {
            return i;
        }
    }

    probabilities
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(probabilities.len().saturating_sub(1))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_bucket() {
        assert_eq!(sample_index(&[0.25, 0.25, 0.5], 0.0), 0);
        assert_eq!(sample_index(&[0.25, 0.25, 0.5], 0.2499), 0);
    }

    #[test]
    fn test_boundary_goes_to_next() {
        // cumulative must strictly exceed the draw
        assert_eq!(sample_index(&[0.25, 0.25, 0.5], 0.25), 1);
        assert_eq!(sample_index(&[0.25, 0.25, 0.5], 0.75), 2);
    }

    #[test]
    fn test_zero_probability_skipped() {
        assert_eq!(sample_index(&[0.0, 1.0, 0.0], 0.0), 1);
        assert_eq!(sample_index(&[0.5, 0.0, 0.5], 0.5), 2);
    }

    #[test]
    fn test_rounding_shortfall() {
        // mass sums just under 1
        assert_eq!(sample_index(&[0.5, 0.4999999, 0.0], 0.99999999), 1);
    }
}
