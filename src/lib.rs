//! # `launcher-icons`
//!
//! Turns one source image into a set of Android launcher icons plus a
//! store-listing icon.
//!
//! Near-white pixels (all of red, green and blue above 240) are keyed to
//! transparent white, then the image is resized with Lanczos3 into
//! `mipmap-{mdpi,hdpi,xhdpi,xxhdpi,xxxhdpi}/ic_launcher.png` (48 to 192 px)
//! and a 512 px `app_icon_512.png`.
//!
//! ## Example
//!
//! ```no_run
//! use launcher_icons::{Config, IconGenerator};
//!
//! # fn main() -> launcher_icons::Result<()> {
//! let generator = IconGenerator::new(Config::default());
//!
//! for icon in generator.run()? {
//!     println!("{}", icon.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod icons;
pub mod image;

pub use error::{Error, Result};
pub use icons::{Config, IconGenerator, IconTarget};
