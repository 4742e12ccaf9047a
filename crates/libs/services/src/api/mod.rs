pub mod albums;
pub mod auth;
pub mod images;
pub mod links;
pub mod pagination;
pub mod tags;
