/// GF(2^8) doubling. Shifts left and reduces by the AES polynomial when bit 7 was set.
#[inline(always)]
pub(crate) fn dbl(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 { shifted ^ 0x1B } else { shifted }
}

/// Product of a coefficient and a byte for the coefficients used by MixColumns.
/// Coefficients outside {1, 2, 3} contribute nothing.
#[inline(always)]
fn scale(coeff: u8, b: u8) -> u8 {
    debug_assert!((1..=3).contains(&coeff), "mix coefficient {coeff} out of range");
    match coeff {
        1 => b,
        2 => dbl(b),
        3 => b ^ dbl(b),
        _ => 0,
    }
}

/// Dot product of one MixColumns coefficient row with one state column over GF(2^8).
///
/// Each column byte is scaled by its coefficient (1, 2 or 3) and the products are summed
/// with XOR.
#[inline(always)]
pub fn multiply_row_column(row: [u8; 4], column: [u8; 4]) -> u8 {
    row.iter()
        .zip(column.iter())
        .fold(0, |acc, (&coeff, &b)| acc ^ scale(coeff, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbl() {
        assert_eq!(dbl(0x57), 0xae);
        assert_eq!(dbl(0xae), 0x47, "high bit set must reduce by 0x1b");
        assert_eq!(dbl(0x80), 0x1b);
        assert_eq!(dbl(0x00), 0x00);
    }

    #[test]
    fn test_identity_row_is_xor() {
        let column = [0xdb, 0x13, 0x53, 0x45];
        assert_eq!(
            multiply_row_column([1, 1, 1, 1], column),
            0xdb ^ 0x13 ^ 0x53 ^ 0x45
        );
    }

    #[test]
    fn test_triple_is_double_xor_self() {
        for b in 0..=255u8 {
            assert_eq!(
                multiply_row_column([3, 1, 1, 1], [b, 0, 0, 0]),
                b ^ dbl(b),
                "coefficient 3 mismatch for {b:#04x}"
            );
        }
    }

    #[test]
    fn test_mix_column_vector() {
        // column from https://en.wikipedia.org/wiki/Rijndael_MixColumns
        let column = [0xdb, 0x13, 0x53, 0x45];
        assert_eq!(multiply_row_column([2, 3, 1, 1], column), 0x8e);
        assert_eq!(multiply_row_column([1, 2, 3, 1], column), 0x4d);
        assert_eq!(multiply_row_column([1, 1, 2, 3], column), 0xa1);
        assert_eq!(multiply_row_column([3, 1, 1, 2], column), 0xbc);
    }
}
