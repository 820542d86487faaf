//! Regex-driven string generation library.
//!
//! This crate produces strings that are guaranteed to be accepted by a
//! finite-state automaton, typically one compiled from a regular expression.
//! It is the inverse of a matcher: a weighted random walk goes from the
//! initial state to an accepting state and records one character per step.
//!
//! It provides:
//! - An immutable automaton arena with character-range transitions
//! - A pluggable, seedable source of randomness
//! - The weighted walk with advisory min/max length bounds and a loop guard
//! - Concurrent batch generation and automaton persistence
//!
//! The walk is a heuristic. Outputs are *not* uniformly distributed over the
//! automaton's language: each transition is weighted by the number of
//! characters it matches, and every accepting state stops with probability 1/2.
//!
//! Compiling a regular expression into an automaton is left to the caller.

/// Automaton model, randomness and generation logic.
pub mod model;

/// Error types for automaton construction, persistence and generation.
pub mod error;

/// Automaton persistence (postcard encoding on disk).
///
/// Not exposed
pub(crate) mod io;

pub use error::{AutomatonIoError, BuildError, GenerationError};
pub use model::automaton::{Automaton, AutomatonBuilder, StateId};
pub use model::batch::generate_many;
pub use model::generation_input::{DEFAULT_LOOP_LIMIT, GenerationInput};
pub use model::generator::Generator;
pub use model::random::{RandomSource, RngSource, random_int};
pub use model::state::{State, Transition};
pub use model::walk::generate;
