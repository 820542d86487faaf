#![allow(dead_code)]

use std::collections::VecDeque;

use xeger_core::{Automaton, AutomatonBuilder, RandomSource};

/// `a*`: one accepting state looping on `a`.
pub fn a_star() -> Automaton {
	let mut builder = AutomatonBuilder::new();
	let state = builder.add_state(true);
	builder.add_char_transition(state, 'a', state).unwrap();
	builder.set_initial(state).unwrap();
	builder.build().unwrap()
}

/// `ab*`
pub fn ab_star() -> Automaton {
	let mut builder = AutomatonBuilder::new();
	let start = builder.add_state(false);
	let tail = builder.add_state(true);
	builder.add_char_transition(start, 'a', tail).unwrap();
	builder.add_char_transition(tail, 'b', tail).unwrap();
	builder.set_initial(start).unwrap();
	builder.build().unwrap()
}

/// `[ab]{4,6}c`, as a minimal DFA.
pub fn ab_4_to_6_c() -> Automaton {
	let mut builder = AutomatonBuilder::new();
	let chain: Vec<_> = (0..=6).map(|_| builder.add_state(false)).collect();
	let end = builder.add_state(true);
	for i in 0..6 {
		builder.add_transition(chain[i], 'a', 'b', chain[i + 1]).unwrap();
	}
	for &state in &chain[4..] {
		builder.add_char_transition(state, 'c', end).unwrap();
	}
	builder.set_initial(chain[0]).unwrap();
	builder.build().unwrap()
}

/// The empty pattern: accepts only `""`.
pub fn empty() -> Automaton {
	let mut builder = AutomatonBuilder::new();
	let state = builder.add_state(true);
	builder.set_initial(state).unwrap();
	builder.build().unwrap()
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn identifier() -> Automaton {
	let mut builder = AutomatonBuilder::new();
	let start = builder.add_state(false);
	let tail = builder.add_state(true);
	for (min, max) in [('A', 'Z'), ('_', '_'), ('a', 'z')] {
		builder.add_transition(start, min, max, tail).unwrap();
	}
	for (min, max) in [('0', '9'), ('A', 'Z'), ('_', '_'), ('a', 'z')] {
		builder.add_transition(tail, min, max, tail).unwrap();
	}
	builder.set_initial(start).unwrap();
	builder.build().unwrap()
}

/// Replays a fixed sequence of samples and coin flips.
pub struct ScriptedSource {
	samples: VecDeque<u64>,
	coins: VecDeque<bool>,
}

impl ScriptedSource {
	pub fn new(samples: &[u64], coins: &[bool]) -> Self {
		Self {
			samples: samples.iter().copied().collect(),
			coins: coins.iter().copied().collect(),
		}
	}

	pub fn is_exhausted(&self) -> bool {
		self.samples.is_empty() && self.coins.is_empty()
	}
}

impl RandomSource for ScriptedSource {
	fn sample(&mut self, min: u64, max: u64) -> u64 {
		let value = self.samples.pop_front().expect("unexpected sample");
		assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");
		value
	}

	fn flip_coin(&mut self) -> bool {
		self.coins.pop_front().expect("unexpected coin flip")
	}
}
