//! Interaction scripts.
//!
//! A script is a JSON-lines file with one [`FormEvent`] per line, e.g.
//!
//! ```text
//! # fill in the username
//! {"event": "change", "field": "username", "value": "alice"}
//! {"event": "blur", "field": "username"}
//! {"event": "submit"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;
use std::path::Path;

use signup_forms::{FormEvent, RegistrationForm, SubmitOutcome};
use tracing::debug;

use crate::error::{Result, ScriptError};

/// Parses events from a reader. `path` is only used in error messages.
///
/// # Errors
///
/// Returns an error if reading fails or a line is not a valid event.
pub fn parse_events(reader: impl BufRead, path: &Path) -> Result<Vec<FormEvent>> {
    let mut events = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        events.push(event);
    }

    Ok(events)
}

/// Loads events from a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains an invalid event.
pub fn load_events(path: &Path) -> Result<Vec<FormEvent>> {
    let file = std::fs::File::open(path)?;
    let events = parse_events(std::io::BufReader::new(file), path)?;
    debug!(path = %path.display(), count = events.len(), "loaded script");
    Ok(events)
}

/// Applies events in order and returns the outcome of every submit.
pub fn replay(
    form: &mut RegistrationForm,
    events: impl IntoIterator<Item = FormEvent>,
) -> Vec<SubmitOutcome> {
    events
        .into_iter()
        .filter_map(|event| form.handle(event))
        .collect()
}
