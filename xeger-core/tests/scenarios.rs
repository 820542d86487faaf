mod common;

use xeger_core::{GenerationError, GenerationInput, Generator, RngSource, generate};

use common::{ScriptedSource, a_star, ab_4_to_6_c, ab_star, empty, identifier};

#[test]
fn test_a_star_replays_fixed_sequence() {
	let automaton = a_star();
	let input = GenerationInput::new();

	let mut random = ScriptedSource::new(&[], &[false, false, false, true]);
	assert_eq!(generate(&automaton, &input, &mut random).unwrap(), "aaa");
	assert!(random.is_exhausted());

	let mut first = Generator::seeded(&automaton, 42);
	let mut second = Generator::seeded(&automaton, 42);
	for _ in 0..100 {
		let output = first.generate().unwrap();
		assert_eq!(output, second.generate().unwrap());
		assert!(output.chars().all(|c| c == 'a'));
	}
}

#[test]
fn test_ab_4_to_6_c_shape() {
	let automaton = ab_4_to_6_c();
	let mut generator = Generator::from_entropy(&automaton);

	for _ in 0..1000 {
		let output = generator.generate().unwrap();
		let length = output.chars().count();
		assert!((5..=7).contains(&length), "{output}");
		assert!(output.ends_with('c'), "{output}");
		assert!(output[..output.len() - 1].chars().all(|c| c == 'a' || c == 'b'), "{output}");
		assert!(automaton.accepts(&output));
	}
}

#[test]
fn test_repeatable_generation() {
	let automaton = ab_4_to_6_c();

	for _ in 0..10 {
		let mut first = Generator::seeded(&automaton, 1000);
		let mut second = Generator::seeded(&automaton, 1000);
		for i in 0..1000 {
			assert_eq!(first.generate().unwrap(), second.generate().unwrap(), "index mismatch: {i}");
		}
	}
}

#[test]
fn test_empty_pattern() {
	let automaton = empty();

	for seed in 0..100 {
		let mut generator = Generator::seeded(&automaton, seed);
		assert_eq!(generator.generate().unwrap(), "");
		assert_eq!(generator.generate_bounded(Some(5), Some(10)).unwrap(), "");
	}
}

#[test]
fn test_generate_bounded() {
	let automaton = ab_star();
	let mut generator = Generator::seeded(&automaton, 1000);

	for _ in 0..100 {
		let output = generator.generate_bounded(Some(3), Some(7)).unwrap();
		assert!((3..=7).contains(&output.chars().count()), "{output}");
		assert!(automaton.accepts(&output));
	}
}

#[test]
fn test_exact_length() {
	let automaton = identifier();
	let input = GenerationInput::bounded(Some(12), Some(12)).unwrap();
	let mut random = RngSource::seeded(3);

	for _ in 0..200 {
		let output = generate(&automaton, &input, &mut random).unwrap();
		assert_eq!(output.chars().count(), 12);
		assert!(automaton.accepts(&output));
	}
}

#[test]
fn test_infeasible_max_is_best_effort() {
	// The shortest accepted string has 5 characters
	let automaton = ab_4_to_6_c();
	let input = GenerationInput::bounded(None, Some(2)).unwrap();
	let mut random = RngSource::seeded(11);

	for _ in 0..100 {
		let output = generate(&automaton, &input, &mut random).unwrap();
		assert_eq!(output.chars().count(), 5);
		assert!(automaton.accepts(&output));
	}
}

#[test]
fn test_unreachable_min_is_best_effort() {
	let automaton = ab_4_to_6_c();
	let input = GenerationInput::bounded(Some(50), None).unwrap();
	let mut random = RngSource::seeded(8);

	// Only the final state accepts, so the min bound never gets a say
	for _ in 0..100 {
		let output = generate(&automaton, &input, &mut random).unwrap();
		assert!((5..=7).contains(&output.chars().count()), "{output}");
		assert!(automaton.accepts(&output));
	}
}

#[test]
fn test_loop_guard_terminates() {
	let automaton = a_star();
	let input = GenerationInput::bounded(Some(usize::MAX), None).unwrap().with_loop_limit(100);
	let mut random = RngSource::seeded(0);

	assert_eq!(generate(&automaton, &input, &mut random).unwrap(), "a".repeat(100));
}

#[test]
fn test_invalid_bounds() {
	assert_eq!(
		GenerationInput::bounded(Some(3), Some(1)),
		Err(GenerationError::InvalidBounds { min: 3, max: 1 })
	);
}
