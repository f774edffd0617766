//! Image gallery.

mod model;
mod repository;

pub use model::GalleryItem;
pub use repository::GalleryRepository;
