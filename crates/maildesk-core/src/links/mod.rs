//! Saved links.

mod model;
mod repository;

pub use model::{Link, LinkParams, LinkPatch};
pub use repository::LinkRepository;
