use std::fs;
use std::path::Path;

use crate::error::AutomatonIoError;
use crate::model::automaton::Automaton;

/// Writes an automaton to `path` using postcard.
///
/// - Creates missing parent directories
/// - Overwrites an existing file
pub(crate) fn write_automaton<P: AsRef<Path>>(path: P, automaton: &Automaton) -> Result<(), AutomatonIoError> {
	let path = path.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}

	let bytes = postcard::to_stdvec(automaton)?;
	fs::write(path, bytes)?;
	Ok(())
}

/// Reads an automaton written by [`write_automaton`].
///
/// The graph is validated again while decoding.
pub(crate) fn read_automaton<P: AsRef<Path>>(path: P) -> Result<Automaton, AutomatonIoError> {
	let bytes = fs::read(path)?;
	let automaton = postcard::from_bytes(&bytes)?;
	Ok(automaton)
}
