use serde::{Deserialize, Serialize};

use super::automaton::StateId;

/// First code point of the UTF-16 surrogate block, which `char` cannot hold.
const SURROGATE_FIRST: u32 = 0xD800;
/// Number of code points in the surrogate block.
const SURROGATE_LEN: u32 = 0x800;

/// An edge labelled with the closed character interval `[min, max]`.
///
/// ## Invariants
/// - `min <= max` (checked by [`AutomatonBuilder`](super::automaton::AutomatonBuilder))
/// - `to` is a valid state of the owning automaton
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
	min: char,
	max: char,
	to: StateId,
}

impl Transition {
	pub(crate) fn new(min: char, max: char, to: StateId) -> Self {
		Self { min, max, to }
	}

	/// Lowest character matched by this transition.
	pub fn min(&self) -> char {
		self.min
	}

	/// Highest character matched by this transition.
	pub fn max(&self) -> char {
		self.max
	}

	/// Destination state.
	pub fn to(&self) -> StateId {
		self.to
	}

	/// Returns `true` if `c` lies in `[min, max]`.
	pub fn contains(&self, c: char) -> bool {
		self.min <= c && c <= self.max
	}

	/// Number of characters this transition can match.
	///
	/// This is `max - min + 1`, minus the surrogate block when the range
	/// spans it. Always at least 1.
	pub fn weight(&self) -> u64 {
		let (min, max) = (self.min as u32, self.max as u32);
		let mut span = max - min + 1;
		if min < SURROGATE_FIRST && max >= SURROGATE_FIRST + SURROGATE_LEN {
			span -= SURROGATE_LEN;
		}
		u64::from(span)
	}

	/// Maps an offset in `[0, weight)` to the character it designates.
	///
	/// Offsets past the surrogate block skip over it.
	pub(crate) fn char_at(&self, offset: u64) -> char {
		let min = self.min as u32;
		let mut code = min.saturating_add(offset as u32);
		if min < SURROGATE_FIRST && code >= SURROGATE_FIRST {
			code += SURROGATE_LEN;
		}
		char::from_u32(code).unwrap_or(self.max)
	}
}

/// A node of the automaton.
///
/// Holds the accepting flag and the outgoing transitions, sorted ascending by
/// `min` once the automaton is built. The order is part of the generation
/// contract: the same order maps the same random draw to the same transition.
///
/// ## Invariants
/// - A state with no transitions must be accepting. This is only checked
///   during a walk, never repaired.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct State {
	accepting: bool,
	transitions: Vec<Transition>,
}

impl State {
	pub(crate) fn new(accepting: bool) -> Self {
		Self {
			accepting,
			transitions: Vec::new(),
		}
	}

	pub fn is_accepting(&self) -> bool {
		self.accepting
	}

	/// Outgoing transitions, sorted ascending by `min`.
	pub fn transitions(&self) -> &[Transition] {
		&self.transitions
	}

	pub(crate) fn set_accepting(&mut self, accepting: bool) {
		self.accepting = accepting;
	}

	pub(crate) fn push_transition(&mut self, transition: Transition) {
		self.transitions.push(transition);
	}

	pub(crate) fn sort_transitions(&mut self) {
		self.transitions.sort_by_key(|t| (t.min, t.max, t.to));
	}
}

/// Selects the transition whose cumulative weight first reaches `option`.
///
/// `option` is drawn from `[1, total_weight]`. The lowest index wins ties,
/// so earlier-sorted transitions take precedence.
///
/// Returns `None` only if `candidates` is empty.
pub(crate) fn select<'t>(candidates: &[&'t Transition], option: u64) -> Option<&'t Transition> {
	let mut discarded_weight = 0;
	for transition in candidates {
		discarded_weight += transition.weight();
		if discarded_weight >= option {
			return Some(transition);
		}
	}

	// Only reachable if `option` exceeds the total weight
	candidates.last().copied()
}
