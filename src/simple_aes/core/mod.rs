//! Round primitives operating on a single 16-byte state. Every step returns a new state and
//! leaves its input untouched.

pub mod constants;
mod field;
mod round;
mod substitution;

pub use field::multiply_row_column;
pub use round::{mix_columns, round, shift_row, shift_rows, sub_bytes};
pub use substitution::substitute;
