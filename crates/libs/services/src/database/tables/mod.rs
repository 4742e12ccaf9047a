mod album;
mod image;
mod links;
mod tag;

pub use album::Album;
pub use image::Image;
pub use links::{AlbumImage, AlbumTag, ImageTag};
pub use tag::Tag;
