use rand::rngs::StdRng;

use super::automaton::Automaton;
use super::generation_input::GenerationInput;
use super::random::{RandomSource, RngSource};
use super::walk;
use crate::error::GenerationError;

/// Produces strings accepted by a borrowed automaton.
///
/// # Responsibilities
/// - Own the random source for the walks it runs
/// - Keep the length bounds and loop guard between calls
///
/// Cheap to create; the automaton is only read. For concurrent walks give
/// each thread its own `Generator` (or use [`generate_many`](super::batch::generate_many)).
#[derive(Debug)]
pub struct Generator<'a, R = RngSource<StdRng>> {
	automaton: &'a Automaton,
	random: R,
	input: GenerationInput,
}

impl<'a> Generator<'a, RngSource<StdRng>> {
	/// Creates a generator with a non-reproducible source.
	pub fn from_entropy(automaton: &'a Automaton) -> Self {
		Self::new(automaton, RngSource::from_entropy())
	}

	/// Creates a reproducible generator.
	///
	/// Two generators seeded alike produce the same sequence of strings.
	pub fn seeded(automaton: &'a Automaton, seed: u64) -> Self {
		Self::new(automaton, RngSource::seeded(seed))
	}

	/// Restarts the random sequence from `seed`.
	pub fn reseed(&mut self, seed: u64) {
		self.random.reseed(seed);
	}
}

impl<'a, R: RandomSource> Generator<'a, R> {
	pub fn new(automaton: &'a Automaton, random: R) -> Self {
		Self {
			automaton,
			random,
			input: GenerationInput::default(),
		}
	}

	/// Replaces the generation parameters.
	pub fn with_input(mut self, input: GenerationInput) -> Self {
		self.input = input;
		self
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	pub fn input_mut(&mut self) -> &mut GenerationInput {
		&mut self.input
	}

	pub fn automaton(&self) -> &'a Automaton {
		self.automaton
	}

	/// Generates a string with the current parameters.
	///
	/// # Errors
	/// See [`walk::generate`].
	pub fn generate(&mut self) -> Result<String, GenerationError> {
		walk::generate(self.automaton, &self.input, &mut self.random)
	}

	/// Stores new length bounds, then generates a string.
	///
	/// The bounds stay in effect for later calls to [`generate`](Self::generate).
	/// `None` leaves a side unbounded.
	///
	/// # Errors
	/// `InvalidBounds` if `min > max`, otherwise see [`walk::generate`].
	pub fn generate_bounded(&mut self, min: Option<usize>, max: Option<usize>) -> Result<String, GenerationError> {
		self.input.set_length_bounds(min, max)?;
		self.generate()
	}

	/// Gives the random source back, e.g. to continue its sequence elsewhere.
	pub fn into_random(self) -> R {
		self.random
	}
}
