pub mod lazy_image;
mod scripts;
