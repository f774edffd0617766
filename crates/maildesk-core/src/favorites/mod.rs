//! Starred items of any kind.

mod model;
mod repository;

pub use model::{Favorite, FavoriteParams, FavoritePatch};
pub use repository::FavoriteRepository;
