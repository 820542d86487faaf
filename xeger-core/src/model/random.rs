use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::Transition;

/// Entropy consumed by a generation walk.
///
/// A walk calls [`sample`](RandomSource::sample) to pick a transition and a
/// character, and [`flip_coin`](RandomSource::flip_coin) to decide whether to
/// stop at an accepting state. Two sources producing the same sequence of
/// answers yield the same output for the same automaton and bounds.
///
/// Implementations are not expected to be thread-safe: use one source per
/// walk or per thread.
pub trait RandomSource {
	/// Returns a uniformly distributed integer in `[min, max]`.
	///
	/// Callers guarantee `min <= max`.
	fn sample(&mut self, min: u64, max: u64) -> u64;

	/// Returns an unbiased boolean.
	fn flip_coin(&mut self) -> bool;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
	fn sample(&mut self, min: u64, max: u64) -> u64 {
		(**self).sample(min, max)
	}

	fn flip_coin(&mut self) -> bool {
		(**self).flip_coin()
	}
}

/// [`RandomSource`] backed by any `rand` generator.
///
/// Defaults to `StdRng`, which is reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
	rng: R,
}

impl RngSource<StdRng> {
	/// Creates a reproducible source.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}

	/// Creates a source seeded from the thread-local generator.
	pub fn from_entropy() -> Self {
		Self::new(StdRng::from_rng(&mut rand::rng()))
	}

	/// Restarts the sequence from `seed`.
	pub fn reseed(&mut self, seed: u64) {
		self.rng = StdRng::seed_from_u64(seed);
	}
}

impl<R: Rng> RngSource<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	pub fn into_inner(self) -> R {
		self.rng
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn sample(&mut self, min: u64, max: u64) -> u64 {
		self.rng.random_range(min..=max)
	}

	fn flip_coin(&mut self) -> bool {
		self.rng.random()
	}
}

/// Draws an integer in `[min, max]`.
///
/// A degenerate range returns `min` without consuming entropy.
pub fn random_int<S: RandomSource + ?Sized>(min: u64, max: u64, source: &mut S) -> u64 {
	if min >= max {
		return min;
	}
	source.sample(min, max)
}

/// Draws one character uniformly from the range matched by `transition`.
///
/// The draw covers `[min, min + weight - 1]`, which equals `[min, max]`
/// unless the range spans the surrogate block.
pub(crate) fn sample_char<S: RandomSource + ?Sized>(transition: &Transition, source: &mut S) -> char {
	let min = u64::from(u32::from(transition.min()));
	let code = random_int(min, min + transition.weight() - 1, source);
	transition.char_at(code - min)
}
