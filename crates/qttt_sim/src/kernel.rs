//! Gate kernels on a dense amplitude vector
//!
//! Gantree: L2_Simulator → Kernels
//!
//! The pair kernels walk the 2^(N-1) index pairs that differ only in the
//! target bit and replace each pair with its image under a 2x2 matrix. The
//! quad kernel does the same for groups of four indices under a 4x4 matrix.
//! Callers validate qubit indices beforehand.

use qttt_core::{Amplitude, Matrix2, Matrix4, QubitId};

#[inline]
fn mix(m: &Matrix2, a: Amplitude, b: Amplitude) -> (Amplitude, Amplitude) {
    (m[0][0] * a + m[0][1] * b, m[1][0] * a + m[1][1] * b)
}

/// Apply `m` to `qubit`, leaving all other qubits unchanged
pub fn apply_single(state: &mut [Amplitude], qubit: QubitId, m: &Matrix2) {
    let mask = 1usize << qubit;
    for i in 0..state.len() {
        if i & mask == 0 {
            let j = i | mask;
            let (new_i, new_j) = mix(m, state[i], state[j]);
            state[i] = new_i;
            state[j] = new_j;
        }
    }
}

/// Apply `m` to `target` on the subspace where `control` is 1
pub fn apply_controlled(state: &mut [Amplitude], control: QubitId, target: QubitId, m: &Matrix2) {
    let control_mask = 1usize << control;
    let target_mask = 1usize << target;

    for i in 0..state.len() {
        if (i & control_mask) != 0 && (i & target_mask) == 0 {
            let j = i | target_mask;
            let (new_i, new_j) = mix(m, state[i], state[j]);
            state[i] = new_i;
            state[j] = new_j;
        }
    }
}

/// Apply a 4x4 `m` over the ordered pair (`hi`, `lo`)
///
/// Sub-index `2 * bit(hi) + bit(lo)` selects the matrix row and column.
pub fn apply_two(state: &mut [Amplitude], hi: QubitId, lo: QubitId, m: &Matrix4) {
    let hi_mask = 1usize << hi;
    let lo_mask = 1usize << lo;

    for base in 0..state.len() {
        if base & (hi_mask | lo_mask) != 0 {
            continue;
        }
        let group = [base, base | lo_mask, base | hi_mask, base | hi_mask | lo_mask];
        let old = group.map(|i| state[i]);

        for (row, &index) in group.iter().enumerate() {
            state[index] = (0..4).map(|col| m[row][col] * old[col]).sum();
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
    use qttt_core::operation::{CONTROLLED_X, HADAMARD, PAULI_X};

    fn basis(n: usize, index: usize) -> Vec<Amplitude> {
        let mut state = vec![Amplitude::new(0.0, 0.0); 1 << n];
        state[index] = Amplitude::new(1.0, 0.0);
        state
    }

    /// Reference: embed a 4x4 matrix over (hi, lo) and multiply densely
    fn apply_dense_two(state: &[Amplitude], hi: usize, lo: usize, m: &Matrix4) -> Vec<Amplitude> {
        let mut out = vec![Amplitude::new(0.0, 0.0); state.len()];
        for (col, &amp) in state.iter().enumerate() {
            let sub_col = (((col >> hi) & 1) << 1) | ((col >> lo) & 1);
            let rest = col & !(1 << hi) & !(1 << lo);
            for sub_row in 0..4 {
                let row = rest | ((sub_row >> 1) << hi) | ((sub_row & 1) << lo);
                out[row] += m[sub_row][sub_col] * amp;
            }
        }
        out
    }

    #[test]
    fn test_x_flips_basis_state() {
        let mut state = basis(3, 0b000);
        apply_single(&mut state, 1, &PAULI_X);
        assert_relative_eq!(state[0b010].re, 1.0);
        assert_relative_eq!(state[0b000].re, 0.0);
    }

    #[test]
    fn test_hadamard_on_zero() {
        let mut state = basis(1, 0);
        apply_single(&mut state, 0, &HADAMARD);
        assert_relative_eq!(state[0].re, std::f64::consts::FRAC_1_SQRT_2);
        assert_relative_eq!(state[1].re, std::f64::consts::FRAC_1_SQRT_2);
    }

    #[test]
    fn test_controlled_requires_control_bit() {
        // control = qubit 0 clear: no change
        let mut state = basis(2, 0b00);
        apply_controlled(&mut state, 0, 1, &PAULI_X);
        assert_relative_eq!(state[0b00].re, 1.0);

        // control set: target flips
        let mut state = basis(2, 0b01);
        apply_controlled(&mut state, 0, 1, &PAULI_X);
        assert_relative_eq!(state[0b11].re, 1.0);
        assert_relative_eq!(state[0b01].re, 0.0);
    }

    #[test]
    fn test_controlled_matches_dense_embedding() {
        // Uniform superposition with one sign flip so pair order matters
        let n = 3;
        let mut state = basis(n, 0);
        for q in 0..n {
            apply_single(&mut state, q, &HADAMARD);
        }
        apply_single(&mut state, 0, &PAULI_X);
        state[5] = -state[5];

        for (control, target) in [(0, 1), (2, 0), (1, 2)] {
            let expected = apply_dense_two(&state, control, target, &CONTROLLED_X);
            let mut actual = state.clone();
            apply_controlled(&mut actual, control, target, &PAULI_X);

            for (a, e) in actual.iter().zip(&expected) {
                assert_relative_eq!(a.re, e.re, epsilon = 1e-12);
                assert_relative_eq!(a.im, e.im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_two_matches_dense_embedding() {
        let n = 3;
        let mut state = basis(n, 0);
        for q in 0..n {
            apply_single(&mut state, q, &HADAMARD);
        }
        state[3] = -state[3];
        state[6] *= Amplitude::new(0.0, 1.0);

        // H on hi, phase on lo: not symmetric under swapping the pair
        let phase: Matrix2 = [
            [Amplitude::new(1.0, 0.0), Amplitude::new(0.0, 0.0)],
            [Amplitude::new(0.0, 0.0), Amplitude::new(0.0, 1.0)],
        ];
        let mut product = [[Amplitude::new(0.0, 0.0); 4]; 4];
        for (r, row) in product.iter_mut().enumerate() {
            for (c, entry) in row.iter_mut().enumerate() {
                *entry = HADAMARD[r >> 1][c >> 1] * phase[r & 1][c & 1];
            }
        }

        for m in [CONTROLLED_X, product] {
            for (hi, lo) in [(0, 1), (2, 0), (1, 2)] {
                let expected = apply_dense_two(&state, hi, lo, &m);
                let mut actual = state.clone();
                apply_two(&mut actual, hi, lo, &m);

                for (a, e) in actual.iter().zip(&expected) {
                    assert_relative_eq!(a.re, e.re, epsilon = 1e-12);
                    assert_relative_eq!(a.im, e.im, epsilon = 1e-12);
                }
            }
        }
    }
}
