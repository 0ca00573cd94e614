use super::constants::{BLOCK_SIZE, MIX_MATRIX, NUM_ROUNDS};
use super::field::multiply_row_column;
use super::substitution::substitute;

/// Performs one round on `state` and returns the new state.
/// Every round but the last is SubBytes, ShiftRows, MixColumns; the last round skips MixColumns.
#[inline(always)]
pub fn round(state: &[u8; BLOCK_SIZE], round_idx: usize) -> [u8; BLOCK_SIZE] {
    let s = shift_rows(&sub_bytes(state));
    if round_idx < NUM_ROUNDS - 1 {
        mix_columns(&s)
    } else {
        s
    }
}

/// SubBytes step. Each byte is substituted independently.
#[inline(always)]
pub fn sub_bytes(state: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    state.map(substitute)
}

/// Rotates a single row left by `offset` positions.
#[inline(always)]
pub fn shift_row(row: [u8; 4], offset: usize) -> [u8; 4] {
    std::array::from_fn(|j| row[(j + offset) % 4])
}

/// ShiftRows step.
/// The 0th row (bytes 0..4) does not change.
/// Row r (bytes 4r..4r+4) is rotated left by r positions.
#[inline(always)]
pub fn shift_rows(state: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = *state;
    for (r, row) in out.chunks_exact_mut(4).enumerate().skip(1) {
        let shifted = shift_row([row[0], row[1], row[2], row[3]], r);
        row.copy_from_slice(&shifted);
    }
    out
}

/// MixColumns step. Output row i, column j is the GF(2^8) product of [`MIX_MATRIX`] row i
/// with state column j (bytes j, 4+j, 8+j, 12+j).
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub fn mix_columns(state: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (i, coeffs) in MIX_MATRIX.iter().enumerate() {
        for j in 0..4 {
            let column = [state[j], state[4 + j], state[8 + j], state[12 + j]];
            out[4 * i + j] = multiply_row_column(*coeffs, column);
        }
    }
    out
}
