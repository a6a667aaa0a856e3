//! Thumbnail lifecycle, content images and attachment storage ports

mod images;
pub mod ports;
mod thumbnail;

pub use images::ContentImageLibrary;
pub use thumbnail::ThumbnailManager;
