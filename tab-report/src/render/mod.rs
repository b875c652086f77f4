//! HTML rendering
//!
//! Converts collected inputs into HTML fragments and assembles the final
//! page: CSV files become `<table>` fragments, PNG files become inline
//! base64 images, and the page shell supplies the static styling and the
//! tab-switching script.

pub mod image;
pub mod page;
pub mod table;

pub use image::encode_image;
pub use page::{escape_html, render_page, TabIds};
pub use table::render_table;
