//! Calendar events.

mod model;
mod repository;

pub use model::{Event, EventParams, EventPatch};
pub use repository::EventRepository;
