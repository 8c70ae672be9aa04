/// Path fragment marking images served from the catalog's media storage
pub const MEDIA_STORAGE_MARKER: &str = "storage/images";

/// Resolve an image reference into something a browser can load.
///
/// Relative media-storage paths are prefixed with `media_base`; absolute
/// URLs and anything else are returned as-is. Without a media base the
/// path is returned unchanged.
pub fn resolve_image_src(media_base: Option<&str>, path: &str) -> String {
    match media_base {
        Some(base) if path.contains(MEDIA_STORAGE_MARKER) => format!("{base}{path}"),
        _ => path.to_string(),
    }
}
