//! Image loading, keying, and saving utilities.

mod key;
mod load;
mod save;

pub use key::{apply_transparency_key, key_pixel, TRANSPARENT_WHITE, WHITE_THRESHOLD};
pub use load::load_rgba;
pub use save::save_square_png;
