//! Color-coded notes.

mod model;
mod repository;

pub use model::{Note, NoteParams, NotePatch};
pub use repository::NoteRepository;
