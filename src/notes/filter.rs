//! Search projection over the note list
//!
//! Pure read-side function; recomputed on every render.

use crate::notes::types::Note;

/// Notes whose name contains `query` as a case-insensitive substring
///
/// An empty query returns the full sequence in order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.name.to_lowercase().contains(&needle))
        .collect()
}
