use crate::error::AppError;
use crate::services::session::FileSelection;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ImageReader;
use std::io::Cursor;

const PREVIEW_SIZE: u32 = 512;
const PREVIEW_QUALITY: u8 = 80;

// EXIF headers live at the front of the file; 128KB covers them.
const EXIF_SCAN_LIMIT: usize = 128 * 1024;

/// Local preview of the selected file, held as a base64 data URI. One
/// preview exists per selection; storing a new one drops the old, so a
/// superseded preview is released immediately.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    data_uri: String,
}

impl PreviewImage {
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

/// Build a preview for a freshly selected file.
///
/// Decodes, orients, and downscales the bytes into a small JPEG. Content
/// that does not decode is embedded raw under its declared media type
/// instead; selection itself is gated only on the declared type, so an
/// undecodable file still previews the way the platform can manage.
pub fn generate_preview(selection: &FileSelection) -> PreviewImage {
    match render_scaled(selection) {
        Ok(data_uri) => PreviewImage { data_uri },
        Err(e) => {
            log::warn!(
                "preview: falling back to raw bytes for {}: {}",
                selection.name,
                e
            );
            PreviewImage {
                data_uri: raw_data_uri(selection),
            }
        }
    }
}

fn render_scaled(selection: &FileSelection) -> Result<String, AppError> {
    let mut img = ImageReader::new(Cursor::new(&selection.bytes))
        .with_guessed_format()
        .map_err(|e| AppError::validation(e.to_string()))?
        .decode()?;

    // Resize to a bounding box before rotating; the box is square so
    // orientation does not change the target.
    let intermediate_size = PREVIEW_SIZE * 4;
    if img.width() > intermediate_size * 2 || img.height() > intermediate_size * 2 {
        img = img.resize(intermediate_size, intermediate_size, FilterType::Nearest);
    }
    img = img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Triangle);

    let orientation = read_orientation(&selection.bytes);
    if orientation != 1 {
        img = apply_orientation(img, orientation);
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, PREVIEW_QUALITY);
    img.write_with_encoder(encoder)
        .map_err(|e| AppError::validation(format!("Failed to encode preview: {}", e)))?;

    let b64 = base64::engine::general_purpose::STANDARD.encode(buffer.into_inner());
    Ok(format!("data:image/jpeg;base64,{}", b64))
}

/// Embed the selected bytes unchanged, typed as declared.
fn raw_data_uri(selection: &FileSelection) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(&selection.bytes);
    format!("data:{};base64,{}", selection.media_type, b64)
}

/// EXIF orientation of the selected bytes. Defaults to 1 if absent.
fn read_orientation(bytes: &[u8]) -> u32 {
    let head = &bytes[..bytes.len().min(EXIF_SCAN_LIMIT)];
    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(head)) {
        Ok(e) => e,
        Err(_) => return 1,
    };

    match exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY) {
        Some(field) => match field.value {
            exif::Value::Short(ref v) => *v.first().unwrap_or(&1) as u32,
            exif::Value::Long(ref v) => *v.first().unwrap_or(&1),
            _ => 1,
        },
        None => 1,
    }
}

fn apply_orientation(img: image::DynamicImage, orientation: u32) -> image::DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.fliph().rotate90(),
        6 => img.rotate90(),
        7 => img.fliph().rotate270(),
        8 => img.rotate270(),
        _ => img,
    }
}
