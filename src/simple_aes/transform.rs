use rayon::prelude::*;

use crate::simple_aes::core::constants::NUM_ROUNDS;
use crate::simple_aes::core::round;
use crate::simple_aes::state::State;

/// Text transformed when no input is given.
pub const DEFAULT_INPUT: &str = "abcdefghijklmnop";

/// run batches in parallel if they hold more than this many states
pub const PARALLEL_THRESHOLD: usize = 64;

/// Runs the fixed ten-round pipeline over a [`State`].
///
/// Each round is SubBytes then ShiftRows, followed by MixColumns on every round but the last.
/// There is no key and no inverse. The transform holds no data and is cheap to copy.
///
/// ## Examples
/// ```
/// # fn main() -> simpleaes::Result<()> {
/// use simpleaes::{State, Transform};
///
/// let state = State::from_text("abcdefghijklmnop")?;
/// let trace = Transform::new().run(&state);
///
/// // one observed state per round
/// assert_eq!(trace.rounds().len(), 10);
/// assert_eq!(trace.final_state(), trace.round(10));
///
/// // the iterator yields the same states lazily
/// let last = Transform::new().rounds(&state).last();
/// assert_eq!(last, Some(*trace.final_state()));
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Transform;

impl Transform {
    pub fn new() -> Self {
        Self
    }

    /// Lazily yields the state after each round, starting from `state`.
    pub fn rounds(&self, state: &State) -> Rounds {
        Rounds {
            state: *state,
            next_round: 0,
        }
    }

    /// Runs all rounds and records every intermediate state.
    pub fn run(&self, state: &State) -> Trace {
        tracing::debug!(rounds = NUM_ROUNDS, "running transform");
        Trace {
            initial: *state,
            rounds: self.rounds(state).collect(),
        }
    }

    /// Runs all rounds and returns only the final state.
    pub fn finish(&self, state: &State) -> State {
        self.rounds(state).fold(*state, |_, s| s)
    }

    /// Runs every state independently. Output order matches input order.
    pub fn run_batch(&self, states: &[State]) -> Vec<Trace> {
        tracing::debug!(len = states.len(), "running batch");
        if states.len() > PARALLEL_THRESHOLD {
            states.par_iter().map(|s| self.run(s)).collect()
        } else {
            states.iter().map(|s| self.run(s)).collect()
        }
    }
}

/// Iterator over post-round states, created by [`Transform::rounds`].
#[derive(Clone, Debug)]
pub struct Rounds {
    state: State,
    next_round: usize,
}

impl Iterator for Rounds {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        if self.next_round >= NUM_ROUNDS {
            return None;
        }
        let idx = self.next_round;
        self.state = State::from(round(self.state.as_bytes(), idx));
        self.next_round += 1;
        tracing::trace!(
            round = idx + 1,
            mixed = idx < NUM_ROUNDS - 1,
            state = ?self.state.as_bytes(),
            "round complete"
        );
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = NUM_ROUNDS - self.next_round;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Rounds {}

/// Ingested state plus the state after every round.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Trace {
    initial: State,
    rounds: Vec<State>,
}

impl Trace {
    /// State before the first round.
    pub fn initial(&self) -> &State {
        &self.initial
    }

    /// States after rounds 1 through 10, in order.
    pub fn rounds(&self) -> &[State] {
        &self.rounds
    }

    /// State after round `n` (1-based). Panics if `n` is 0 or greater than the round count.
    pub fn round(&self, n: usize) -> &State {
        assert!((1..=NUM_ROUNDS).contains(&n), "round {n} out of range");
        &self.rounds[n - 1]
    }

    pub fn final_state(&self) -> &State {
        &self.rounds[NUM_ROUNDS - 1]
    }
}
