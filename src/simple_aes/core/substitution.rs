use super::constants::SBOX;

/// Bits of `b`, least significant first.
#[inline(always)]
fn bits(b: u8) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (i, bit) in out.iter_mut().enumerate() {
        *bit = (b >> i) & 1;
    }
    out
}

/// Substitutes a single byte through the S-box.
///
/// The high nibble (bits 7..4) gives `x` and the low nibble (bits 3..0) gives `y`; the
/// substituted value is `SBOX[16 * y + x]`, i.e. the low nibble selects the row of the
/// listing and the high nibble selects the column.
#[inline(always)]
pub fn substitute(b: u8) -> u8 {
    let bits = bits(b);
    let x = 8 * bits[7] + 4 * bits[6] + 2 * bits[5] + bits[4];
    let y = 8 * bits[3] + 4 * bits[2] + 2 * bits[1] + bits[0];
    SBOX[16 * y as usize + x as usize]
}
