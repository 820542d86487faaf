//! Top-level module for the generation system.
//!
//! It contains:
//! - The automaton arena and its builder (`Automaton`, `AutomatonBuilder`)
//! - States and character-range transitions (`State`, `Transition`)
//! - The randomness capability (`RandomSource`, `RngSource`)
//! - Generation parameters (`GenerationInput`)
//! - The weighted walk itself and the high-level `Generator`

/// Immutable automaton graph, addressed by `StateId`.
///
/// Validates the graph at build time and verifies candidate strings.
pub mod automaton;

/// States and transitions of the automaton, with weighted selection.
pub mod state;

/// Seedable source of integers and coin flips.
pub mod random;

/// Length bounds and loop guard of a walk.
pub mod generation_input;

/// The weighted random walk and its stop policy.
pub mod walk;

/// High-level interface owning a random source and generation parameters.
pub mod generator;

/// Parallel generation of many strings.
pub mod batch;
