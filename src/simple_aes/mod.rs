mod core;
mod error;
mod state;
mod transform;

pub use self::core::constants::{BLOCK_SIZE, MIX_MATRIX, NUM_ROUNDS, SBOX};
pub use self::core::{mix_columns, multiply_row_column, round, shift_row, shift_rows, sub_bytes, substitute};
pub use error::{Error, Result};
pub use state::{State, to_column_major};
pub use transform::{DEFAULT_INPUT, Rounds, Trace, Transform};
