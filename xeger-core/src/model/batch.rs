use std::sync::mpsc;
use std::thread;

use log::debug;

use super::automaton::Automaton;
use super::generation_input::GenerationInput;
use super::random::RngSource;
use super::walk;
use crate::error::GenerationError;

/// Generates `count` strings in parallel.
///
/// # Behavior
/// - Splits the outputs into chunks (based on CPU cores).
/// - Spawns one scoped thread per chunk; the automaton is shared read-only.
/// - Output `i` uses its own source seeded from `seed` and `i`, so the result
///   does not depend on how many threads ran.
///
/// # Errors
/// Returns the error of the first failing output, in output order.
pub fn generate_many(
	automaton: &Automaton,
	input: &GenerationInput,
	count: usize,
	seed: u64,
) -> Result<Vec<String>, GenerationError> {
	if count == 0 {
		return Ok(Vec::new());
	}

	let workers = num_cpus::get().clamp(1, count);
	let chunk_size = count.div_ceil(workers);
	debug!("generating {} strings on {} threads", count, workers);

	let (tx, rx) = mpsc::channel();
	thread::scope(|scope| {
		for (chunk_index, start) in (0..count).step_by(chunk_size).enumerate() {
			let tx = tx.clone();
			let end = (start + chunk_size).min(count);

			scope.spawn(move || {
				let chunk: Result<Vec<String>, GenerationError> = (start..end)
					.map(|i| {
						let mut random = RngSource::seeded(item_seed(seed, i));
						walk::generate(automaton, input, &mut random)
					})
					.collect();
				// The receiver outlives the scope
				let _ = tx.send((chunk_index, chunk));
			});
		}
	});
	drop(tx);

	let mut chunks: Vec<_> = rx.iter().collect();
	chunks.sort_by_key(|(chunk_index, _)| *chunk_index);

	let mut outputs = Vec::with_capacity(count);
	for (_, chunk) in chunks {
		outputs.extend(chunk?);
	}
	Ok(outputs)
}

/// Seed of the `index`-th output of a batch.
fn item_seed(seed: u64, index: usize) -> u64 {
	seed.wrapping_add(index as u64)
}
