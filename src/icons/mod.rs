//! Launcher and store-listing icon generation.

mod generator;
mod target;

pub use generator::{summary, Config, IconGenerator};
pub use target::{
    targets, Density, IconKind, IconTarget, LAUNCHER_FILE_NAME, STORE_LISTING_DIR,
    STORE_LISTING_FILE_NAME, STORE_LISTING_SIZE,
};
