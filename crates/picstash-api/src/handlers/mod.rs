//! HTTP request handlers.

mod image;
mod root;
mod upload;

pub use image::get_image;
pub use root::root;
pub use upload::upload_images;
