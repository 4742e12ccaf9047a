mod album_store;
mod image_store;
mod link_store;
mod tag_store;

pub use album_store::AlbumStore;
pub use image_store::{ImageStore, NewImage};
pub use link_store::LinkStore;
pub use tag_store::TagStore;
