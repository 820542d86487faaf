use thiserror::Error;

use crate::model::automaton::StateId;

/// Errors raised while assembling an [`Automaton`](crate::Automaton).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	#[error("automaton has no states")]
	NoStates,
	#[error("initial state was never set")]
	InitialStateMissing,
	#[error("unknown state: {state}")]
	UnknownState { state: StateId },
	#[error("invalid character range: {min:?} > {max:?}")]
	InvalidRange { min: char, max: char },
}

/// Errors raised by a generation walk or by its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
	/// A non-accepting state has no outgoing transitions.
	///
	/// The automaton is inconsistent; the walk never patches it.
	#[error("automaton invariant violated: state {state} is a non-accepting dead end")]
	AutomatonInvariantViolation { state: StateId },

	/// The loop guard fired and no accepting state is reachable any more.
	#[error("generation bound exceeded after {steps} steps ({length} characters emitted)")]
	GenerationBoundExceeded { steps: usize, length: usize },

	#[error("invalid length bounds: min {min} > max {max}")]
	InvalidBounds { min: usize, max: usize },
}

/// Errors raised while saving or loading an automaton.
#[derive(Debug, Error)]
pub enum AutomatonIoError {
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
	/// Also raised when the decoded graph fails validation.
	#[error("encoding error: {0}")]
	Encoding(#[from] postcard::Error),
}
