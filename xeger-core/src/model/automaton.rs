use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::state::{State, Transition};
use crate::error::{AutomatonIoError, BuildError};
use crate::io;

/// Index of a state inside an [`Automaton`].
///
/// States live in an arena and refer to each other by index, so transitions
/// can point backwards (cycles) without shared ownership.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
	pub(crate) fn new(index: usize) -> Self {
		Self(index)
	}

	/// Position of the state in the automaton's arena.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for StateId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// An immutable finite-state automaton over characters.
///
/// Built once with an [`AutomatonBuilder`] (usually by a regex compiler) and
/// then only read. It is `Send + Sync` and can be shared by any number of
/// concurrent walks without locking.
///
/// Besides the states themselves, the automaton caches the shortest distance
/// (in transitions) from every state to an accepting state. The walk uses it
/// to honour the max length bound and to drain out of cycles.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(into = "AutomatonParts", try_from = "AutomatonParts")]
pub struct Automaton {
	states: Vec<State>,
	initial: StateId,
	/// `None` when no accepting state is reachable.
	distances: Vec<Option<usize>>,
}

/// Serialized form: the derived distances are recomputed on load.
#[derive(Serialize, Deserialize)]
struct AutomatonParts {
	states: Vec<State>,
	initial: StateId,
}

impl From<Automaton> for AutomatonParts {
	fn from(automaton: Automaton) -> Self {
		Self {
			states: automaton.states,
			initial: automaton.initial,
		}
	}
}

impl TryFrom<AutomatonParts> for Automaton {
	type Error = BuildError;

	fn try_from(parts: AutomatonParts) -> Result<Self, Self::Error> {
		AutomatonBuilder {
			states: parts.states,
			initial: Some(parts.initial),
		}
		.build()
	}
}

impl Automaton {
	/// Starting state of every walk.
	pub fn initial(&self) -> StateId {
		self.initial
	}

	/// Number of states in the arena.
	pub fn state_count(&self) -> usize {
		self.states.len()
	}

	/// Returns the state for `id`, or `None` if `id` belongs to another automaton.
	pub fn state(&self, id: StateId) -> Option<&State> {
		self.states.get(id.0)
	}

	/// Iterates over `(id, state)` pairs in arena order.
	pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
		self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
	}

	/// Ids are validated at build time, so indexing cannot fail for ids
	/// handed out by this automaton.
	pub(crate) fn node(&self, id: StateId) -> &State {
		&self.states[id.0]
	}

	/// Length of the shortest path from `id` to an accepting state.
	///
	/// `Some(0)` for accepting states, `None` if no accepting state is reachable.
	pub fn distance_to_accept(&self, id: StateId) -> Option<usize> {
		self.distances.get(id.0).copied().flatten()
	}

	/// Checks whether the automaton accepts `input`.
	///
	/// Runs a subset simulation, so it also works on non-deterministic
	/// automatons. Independent from the generation walk; used to verify its
	/// output.
	pub fn accepts(&self, input: &str) -> bool {
		let mut current = BTreeSet::from([self.initial]);

		for c in input.chars() {
			let next: BTreeSet<StateId> = current
				.iter()
				.flat_map(|&id| self.node(id).transitions())
				.filter(|t| t.contains(c))
				.map(Transition::to)
				.collect();

			if next.is_empty() {
				return false;
			}
			current = next;
		}

		current.iter().any(|&id| self.node(id).is_accepting())
	}

	/// Encodes the automaton with postcard and writes it to `path`.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AutomatonIoError> {
		io::write_automaton(path, self)
	}

	/// Reads an automaton previously written by [`Automaton::save`].
	///
	/// # Errors
	/// Fails on I/O or decoding errors, and if the decoded graph is not a
	/// structurally valid automaton.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AutomatonIoError> {
		io::read_automaton(path)
	}

	/// Multi-source BFS over reversed edges, starting from every accepting state.
	fn compute_distances(states: &[State]) -> Vec<Option<usize>> {
		let mut reversed: Vec<Vec<usize>> = vec![Vec::new(); states.len()];
		for (from, state) in states.iter().enumerate() {
			for transition in state.transitions() {
				reversed[transition.to().0].push(from);
			}
		}

		let mut distances = vec![None; states.len()];
		let mut queue = VecDeque::new();
		for (id, state) in states.iter().enumerate() {
			if state.is_accepting() {
				distances[id] = Some(0);
				queue.push_back(id);
			}
		}

		while let Some(id) = queue.pop_front() {
			let next = distances[id].map_or(0, |d| d + 1);
			for &from in &reversed[id] {
				if distances[from].is_none() {
					distances[from] = Some(next);
					queue.push_back(from);
				}
			}
		}

		distances
	}
}

/// Incremental constructor for an [`Automaton`].
///
/// # Example
/// ```
/// use xeger_core::AutomatonBuilder;
///
/// // ab*
/// let mut builder = AutomatonBuilder::new();
/// let start = builder.add_state(false);
/// let tail = builder.add_state(true);
/// builder.add_char_transition(start, 'a', tail).unwrap();
/// builder.add_char_transition(tail, 'b', tail).unwrap();
/// builder.set_initial(start).unwrap();
/// let automaton = builder.build().unwrap();
///
/// assert!(automaton.accepts("abbb"));
/// assert!(!automaton.accepts("b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
	states: Vec<State>,
	initial: Option<StateId>,
}

impl AutomatonBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a state and returns its id.
	pub fn add_state(&mut self, accepting: bool) -> StateId {
		self.states.push(State::new(accepting));
		StateId(self.states.len() - 1)
	}

	pub fn set_accepting(&mut self, state: StateId, accepting: bool) -> Result<(), BuildError> {
		self.states
			.get_mut(state.0)
			.ok_or(BuildError::UnknownState { state })?
			.set_accepting(accepting);
		Ok(())
	}

	pub fn set_initial(&mut self, state: StateId) -> Result<(), BuildError> {
		self.check_state(state)?;
		self.initial = Some(state);
		Ok(())
	}

	/// Adds a transition from `from` to `to` matching `[min, max]`.
	///
	/// # Errors
	/// - `UnknownState` if either endpoint was not added first
	/// - `InvalidRange` if `min > max`
	pub fn add_transition(&mut self, from: StateId, min: char, max: char, to: StateId) -> Result<(), BuildError> {
		if min > max {
			return Err(BuildError::InvalidRange { min, max });
		}
		self.check_state(to)?;
		self.states
			.get_mut(from.0)
			.ok_or(BuildError::UnknownState { state: from })?
			.push_transition(Transition::new(min, max, to));
		Ok(())
	}

	/// Shorthand for a transition matching the single character `c`.
	pub fn add_char_transition(&mut self, from: StateId, c: char, to: StateId) -> Result<(), BuildError> {
		self.add_transition(from, c, c, to)
	}

	/// Validates the graph, sorts every state's transitions by `min` and
	/// computes distances to acceptance.
	///
	/// Dead-end states that are not accepting are *not* rejected here: they
	/// are reported by the walk that reaches them.
	pub fn build(mut self) -> Result<Automaton, BuildError> {
		if self.states.is_empty() {
			return Err(BuildError::NoStates);
		}
		let initial = self.initial.ok_or(BuildError::InitialStateMissing)?;
		self.check_state(initial)?;

		for state in &self.states {
			for transition in state.transitions() {
				if transition.min() > transition.max() {
					return Err(BuildError::InvalidRange {
						min: transition.min(),
						max: transition.max(),
					});
				}
				self.check_state(transition.to())?;
			}
		}

		for state in &mut self.states {
			state.sort_transitions();
		}
		let distances = Automaton::compute_distances(&self.states);

		Ok(Automaton {
			states: self.states,
			initial,
			distances,
		})
	}

	fn check_state(&self, state: StateId) -> Result<(), BuildError> {
		if state.0 < self.states.len() {
			Ok(())
		} else {
			Err(BuildError::UnknownState { state })
		}
	}
}
