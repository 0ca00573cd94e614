//! A reduced-round AES round visualiser.
//!
//! A 16-byte [`State`] is pushed through ten rounds of SubBytes, ShiftRows and MixColumns
//! (the last round skips MixColumns). There is no key schedule, no AddRoundKey and no
//! inverse: the crate exists to show how the AES round primitives interact, not to encrypt.

mod simple_aes;

pub use simple_aes::{
    BLOCK_SIZE, DEFAULT_INPUT, Error, MIX_MATRIX, NUM_ROUNDS, Result, Rounds, SBOX, State, Trace,
    Transform, mix_columns, multiply_row_column, round, shift_row, shift_rows, sub_bytes,
    substitute, to_column_major,
};
