pub mod client;

pub use client::{GalleryClient, ImageDetails, SearchResultItem};
