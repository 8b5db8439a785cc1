pub mod filter;
pub mod registry;
pub mod types;

pub use filter::filter_notes;
pub use registry::NoteRegistry;
pub use types::{format_duration, Note, DEFAULT_NOTE_NAME};
