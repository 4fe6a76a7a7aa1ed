//! Output icon targets.

use std::path::{Path, PathBuf};

/// File name of every launcher icon.
pub const LAUNCHER_FILE_NAME: &str = "ic_launcher.png";

/// File name of the store-listing icon.
pub const STORE_LISTING_FILE_NAME: &str = "app_icon_512.png";

/// Directory name the store-listing icon is conventionally written to.
pub const STORE_LISTING_DIR: &str = "store_listing";

/// Edge length of the store-listing icon.
pub const STORE_LISTING_SIZE: u32 = 512;

/// Android screen-density buckets that get a launcher icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every density, smallest first.
    pub const ALL: [Self; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    /// Bucket name as used in resource qualifiers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Launcher icon edge length in pixels.
    #[must_use]
    pub const fn size(&self) -> u32 {
        match self {
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }

    /// Resource directory holding this density's launcher icon.
    #[must_use]
    pub fn dir_name(&self) -> String {
        format!("mipmap-{}", self.label())
    }
}

/// What an output icon is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// On-device launcher icon for one density bucket.
    Launcher(Density),
    /// Large icon for the app marketplace listing.
    StoreListing,
}

/// A single square PNG to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub kind: IconKind,
    pub size: u32,
    pub path: PathBuf,
}

impl IconTarget {
    /// Launcher icon for `density` under the resource directory `res_dir`.
    #[must_use]
    pub fn launcher(res_dir: &Path, density: Density) -> Self {
        Self {
            kind: IconKind::Launcher(density),
            size: density.size(),
            path: res_dir.join(density.dir_name()).join(LAUNCHER_FILE_NAME),
        }
    }

    /// Store-listing icon inside `store_dir`.
    #[must_use]
    pub fn store_listing(store_dir: &Path) -> Self {
        Self {
            kind: IconKind::StoreListing,
            size: STORE_LISTING_SIZE,
            path: store_dir.join(STORE_LISTING_FILE_NAME),
        }
    }

    /// Short relative name and dimensions, e.g. `mipmap-mdpi/ic_launcher.png (48x48)`.
    #[must_use]
    pub fn describe(&self) -> String {
        let name = match self.kind {
            IconKind::Launcher(density) => format!("{}/{LAUNCHER_FILE_NAME}", density.dir_name()),
            IconKind::StoreListing => format!("{STORE_LISTING_DIR}/{STORE_LISTING_FILE_NAME}"),
        };
        format!("{name} ({size}x{size})", size = self.size)
    }
}

/// All icons to produce: one launcher icon per density, then the store listing.
#[must_use]
pub fn targets(res_dir: &Path, store_dir: &Path) -> Vec<IconTarget> {
    Density::ALL
        .iter()
        .map(|&density| IconTarget::launcher(res_dir, density))
        .chain(std::iter::once(IconTarget::store_listing(store_dir)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_sizes() {
        let sizes: Vec<_> = Density::ALL.iter().map(Density::size).collect();
        assert_eq!(sizes, [48, 72, 96, 144, 192]);
    }

    #[test]
    fn test_targets_layout() {
        let res = Path::new("/res");
        let store = Path::new("/store");
        let targets = targets(res, store);

        assert_eq!(targets.len(), 6);
        assert_eq!(targets[0].path, Path::new("/res/mipmap-mdpi/ic_launcher.png"));
        assert_eq!(targets[4].path, Path::new("/res/mipmap-xxxhdpi/ic_launcher.png"));
        assert_eq!(targets[4].size, 192);
        assert_eq!(targets[5].kind, IconKind::StoreListing);
        assert_eq!(targets[5].path, Path::new("/store/app_icon_512.png"));
        assert_eq!(targets[5].size, 512);
    }

    #[test]
    fn test_describe() {
        let hdpi = IconTarget::launcher(Path::new("/res"), Density::Hdpi);
        assert_eq!(hdpi.describe(), "mipmap-hdpi/ic_launcher.png (72x72)");

        let store = IconTarget::store_listing(Path::new("/anywhere"));
        assert_eq!(store.describe(), "store_listing/app_icon_512.png (512x512)");
    }
}
