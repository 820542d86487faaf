use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Default number of visits a single state may receive before the walk
/// drains towards the nearest accepting state.
pub const DEFAULT_LOOP_LIMIT: usize = 64;

/// Parameters of a generation walk.
///
/// # Responsibilities
/// - Track the advisory length bounds (`None` = unset)
/// - Track the loop guard ceiling
///
/// # Invariants
/// - When both bounds are set, `desired_min_length <= desired_max_length`
///   (enforced by the setters)
///
/// Both bounds are best effort. The max bound holds whenever the automaton
/// can complete within it; the min bound is only pursued while no loop guard
/// fires.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationInput {
	/// Keep walking past accepting states until this many characters exist.
	desired_min_length: Option<usize>,

	/// Stop at the first accepting state reached with this many characters.
	desired_max_length: Option<usize>,

	/// Visits allowed per state before the walk switches to draining mode.
	pub loop_limit: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			desired_min_length: None,
			desired_max_length: None,
			loop_limit: DEFAULT_LOOP_LIMIT,
		}
	}
}

impl GenerationInput {
	/// Unbounded input with the default loop guard.
	pub fn new() -> Self {
		Self::default()
	}

	/// Input with both length bounds set at once.
	///
	/// # Errors
	/// Returns `InvalidBounds` if `min > max`.
	pub fn bounded(min: Option<usize>, max: Option<usize>) -> Result<Self, GenerationError> {
		let mut input = Self::default();
		input.set_length_bounds(min, max)?;
		Ok(input)
	}

	/// Returns the same input with another loop guard ceiling.
	pub fn with_loop_limit(mut self, loop_limit: usize) -> Self {
		self.loop_limit = loop_limit;
		self
	}

	pub fn desired_min_length(&self) -> Option<usize> {
		self.desired_min_length
	}

	pub fn desired_max_length(&self) -> Option<usize> {
		self.desired_max_length
	}

	/// Replaces both bounds.
	///
	/// # Errors
	/// Returns `InvalidBounds` if `min > max`; the input is left unchanged.
	pub fn set_length_bounds(&mut self, min: Option<usize>, max: Option<usize>) -> Result<(), GenerationError> {
		if let (Some(min), Some(max)) = (min, max) {
			if min > max {
				return Err(GenerationError::InvalidBounds { min, max });
			}
		}
		self.desired_min_length = min;
		self.desired_max_length = max;
		Ok(())
	}

	pub fn set_desired_min_length(&mut self, min: Option<usize>) -> Result<(), GenerationError> {
		self.set_length_bounds(min, self.desired_max_length)
	}

	pub fn set_desired_max_length(&mut self, max: Option<usize>) -> Result<(), GenerationError> {
		self.set_length_bounds(self.desired_min_length, max)
	}
}
