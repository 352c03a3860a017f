use std::path::Path;

/// Extensions offered by the file dialog filter.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif", "ico", "svg",
];

/// Declared media type for a picked path, derived from its extension.
/// Unknown extensions map to an opaque binary type, which the controller
/// then rejects as a non-image.
pub fn media_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let media_type = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tiff" | "tif" => "image/tiff",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    };

    media_type.to_string()
}

/// The selection rule: the declared media type must begin with the image
/// category. Nothing else about the content is inspected here.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}
