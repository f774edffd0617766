//! Address book.

mod model;
mod repository;

pub use model::{Contact, ContactParams, ContactPatch};
pub use repository::ContactRepository;
