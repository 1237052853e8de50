//! Extension tags and the file names derived from them.
//!
//! A tag is whatever follows the final `.` of a file name. Comparison is
//! exact: `icon.PNG` is not a `png`.

use std::path::{Path, PathBuf};

/// Compiled GDScript
pub const COMPILED_SCRIPT: &str = "gdc";

/// Decompiled GDScript source
pub const SCRIPT_SOURCE: &str = "gd";

/// Suffix of the remap sidecar written next to an exported script
pub const REMAP_SUFFIX: &str = "gd.remap";

/// Import settings sidecar, named `<asset>.import`
pub const IMPORT_METADATA: &str = "import";

/// Directory, relative to the project root, holding imported assets
pub const IMPORT_DIR: &str = ".import";

/// Tags of assets eligible for re-linking
pub const IMPORTED_ASSETS: &[&str] = &["png", "wav", "ogg", "svg"];

/// Extension tag of `path`, if it has one
pub fn extension_tag(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Whether `path` carries exactly `tag`
pub fn has_tag(path: &Path, tag: &str) -> bool {
    extension_tag(path) == Some(tag)
}

/// Whether `path` carries any of `tags`
pub fn has_any_tag(path: &Path, tags: &[&str]) -> bool {
    extension_tag(path).is_some_and(|t| tags.contains(&t))
}

/// File name with the final tag stripped (`icon.png.import` -> `icon.png`)
pub fn stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Sibling of `path` named `<stem>.<suffix>`
pub fn sibling(path: &Path, stem: &str, suffix: &str) -> PathBuf {
    path.with_file_name(format!("{stem}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_tag() {
        assert_eq!(extension_tag(Path::new("a/b/player.gdc")), Some("gdc"));
        assert_eq!(extension_tag(Path::new("icon.png.import")), Some("import"));
        assert_eq!(extension_tag(Path::new("README")), None);
        // Leading dot alone is not a tag
        assert_eq!(extension_tag(Path::new(".gdc")), None);
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        assert!(has_tag(Path::new("x.gdc"), COMPILED_SCRIPT));
        assert!(!has_tag(Path::new("x.GDC"), COMPILED_SCRIPT));
        assert!(!has_tag(Path::new("x.gd"), COMPILED_SCRIPT));
    }

    #[test]
    fn test_has_any_tag() {
        assert!(has_any_tag(Path::new("music.ogg"), IMPORTED_ASSETS));
        assert!(has_any_tag(Path::new("logo.svg"), IMPORTED_ASSETS));
        assert!(!has_any_tag(Path::new("icon.png-abc.stex"), IMPORTED_ASSETS));
        assert!(!has_any_tag(Path::new("noext"), IMPORTED_ASSETS));
    }

    #[test]
    fn test_stem_strips_only_final_tag() {
        assert_eq!(stem(Path::new("sub/icon.png.import")), Some("icon.png"));
        assert_eq!(stem(Path::new("a.b.gdc")), Some("a.b"));
    }

    #[test]
    fn test_sibling() {
        let path = Path::new("/root/scenes/scene.gdc");
        assert_eq!(
            sibling(path, "scene", REMAP_SUFFIX),
            PathBuf::from("/root/scenes/scene.gd.remap")
        );
        assert_eq!(
            sibling(path, "scene", SCRIPT_SOURCE),
            PathBuf::from("/root/scenes/scene.gd")
        );
    }
}
