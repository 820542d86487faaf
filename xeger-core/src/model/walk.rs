use log::{debug, trace, warn};

use super::automaton::{Automaton, StateId};
use super::generation_input::GenerationInput;
use super::random::{RandomSource, random_int, sample_char};
use super::state::{State, Transition, select};
use crate::error::GenerationError;

/// Generates a string accepted by `automaton`.
///
/// Walks from the initial state, one transition per character:
/// 1. A state without transitions ends the walk (it must be accepting).
/// 2. Each transition is weighted by the number of characters it matches and
///    an `option` is drawn from `[1, total_weight]`.
/// 3. At an accepting state the stop policy may end the walk; the drawn
///    option is then discarded.
/// 4. Otherwise the transition whose cumulative weight first reaches `option`
///    is taken and one character of its range is appended.
///
/// The stop policy stops once `desired_max_length` is reached, keeps going
/// below `desired_min_length`, and flips a coin in between.
///
/// Outputs are not uniform over the automaton's language. Wide character
/// ranges are favoured over narrow ones, and the coin makes short outputs
/// likely (`a*` usually yields zero or one `a`).
///
/// # Loop guard
/// Once any state has been visited more than `input.loop_limit` times, the
/// walk drains: it stops at the next accepting state and otherwise only
/// follows transitions that bring it closer to one.
///
/// # Errors
/// - `AutomatonInvariantViolation` if the walk reaches a non-accepting state
///   without transitions
/// - `GenerationBoundExceeded` if the loop guard fires where no accepting
///   state is reachable
///
/// # Determinism
/// For a fixed automaton, input and sequence of answers from `random`, the
/// output is identical across runs.
pub fn generate<R: RandomSource + ?Sized>(
	automaton: &Automaton,
	input: &GenerationInput,
	random: &mut R,
) -> Result<String, GenerationError> {
	Walk::new(automaton, input).run(random)
}

/// State of a single walk. Discarded once the string is produced.
struct Walk<'a> {
	automaton: &'a Automaton,
	input: &'a GenerationInput,
	builder: String,
	/// Length of `builder` in characters.
	length: usize,
	visits: Vec<usize>,
	draining: bool,
}

impl<'a> Walk<'a> {
	fn new(automaton: &'a Automaton, input: &'a GenerationInput) -> Self {
		Self {
			automaton,
			input,
			builder: String::new(),
			length: 0,
			visits: vec![0; automaton.state_count()],
			draining: false,
		}
	}

	fn run<R: RandomSource + ?Sized>(mut self, random: &mut R) -> Result<String, GenerationError> {
		let automaton = self.automaton;
		let mut current = automaton.initial();
		let mut candidates: Vec<&'a Transition> = Vec::new();

		loop {
			let state = automaton.node(current);
			if state.transitions().is_empty() {
				if !state.is_accepting() {
					return Err(GenerationError::AutomatonInvariantViolation { state: current });
				}
				break;
			}

			self.visits[current.index()] += 1;
			if !self.draining && self.visits[current.index()] > self.input.loop_limit {
				warn!(
					"loop limit {} reached at state {} after {} characters, draining",
					self.input.loop_limit, current, self.length
				);
				self.draining = true;
			}

			if self.draining {
				if state.is_accepting() {
					break;
				}
				self.draining_candidates(current, state, &mut candidates)?;
			} else {
				self.walking_candidates(state, &mut candidates);
				if candidates.is_empty() {
					// Accepting state where every continuation overshoots the max bound
					trace!("no transition fits the max length at state {}, stopping", current);
					break;
				}
			}

			let total_weight: u64 = candidates.iter().map(|t| t.weight()).sum();
			let option = random_int(1, total_weight, random);

			if state.is_accepting() && self.decide_whether_to_stop(random) {
				break;
			}

			let Some(transition) = select(&candidates, option) else {
				break;
			};
			self.builder.push(sample_char(transition, random));
			self.length += 1;
			current = transition.to();
		}

		debug!("generated {} characters, ended at state {}", self.length, current);
		Ok(self.builder)
	}

	/// Stop policy, consulted only at accepting states.
	///
	/// The max bound is a hard ceiling, the min bound keeps the walk going,
	/// and anything in between is a fair coin.
	fn decide_whether_to_stop<R: RandomSource + ?Sized>(&self, random: &mut R) -> bool {
		if self.input.desired_max_length().is_some_and(|max| self.length >= max) {
			trace!("max length reached at {} characters, stopping", self.length);
			return true;
		}
		if self.input.desired_min_length().is_some_and(|min| self.length < min) {
			trace!("below min length at {} characters, continuing", self.length);
			return false;
		}

		let stop = random.flip_coin();
		trace!("coin flip at {} characters: stop = {}", self.length, stop);
		stop
	}

	/// All transitions, minus those that cannot finish within the max bound.
	///
	/// Leaves `candidates` empty only for an accepting state with nothing that
	/// fits. A non-accepting state that cannot fit falls back to its shortest
	/// completions.
	fn walking_candidates(&self, state: &'a State, candidates: &mut Vec<&'a Transition>) {
		candidates.clear();
		candidates.extend(state.transitions());

		let Some(max) = self.input.desired_max_length() else {
			return;
		};

		let fits = |t: &&Transition| {
			self.automaton
				.distance_to_accept(t.to())
				.is_some_and(|d| self.length + 1 + d <= max)
		};
		if candidates.iter().any(fits) {
			candidates.retain(fits);
		} else if state.is_accepting() {
			candidates.clear();
		} else {
			self.retain_shortest(candidates);
		}
	}

	/// Transitions that strictly decrease the distance to acceptance.
	fn draining_candidates(
		&self,
		current: StateId,
		state: &'a State,
		candidates: &mut Vec<&'a Transition>,
	) -> Result<(), GenerationError> {
		if self.automaton.distance_to_accept(current).is_none() {
			return Err(GenerationError::GenerationBoundExceeded {
				steps: self.visits.iter().sum(),
				length: self.length,
			});
		}

		candidates.clear();
		candidates.extend(state.transitions());
		self.retain_shortest(candidates);
		Ok(())
	}

	/// Keeps the transitions leading to the states closest to acceptance.
	///
	/// Keeps everything if none of them can reach an accepting state.
	fn retain_shortest(&self, candidates: &mut Vec<&'a Transition>) {
		let distance = |t: &&Transition| self.automaton.distance_to_accept(t.to());
		if let Some(shortest) = candidates.iter().filter_map(distance).min() {
			candidates.retain(|t| distance(t) == Some(shortest));
		}
	}
}
