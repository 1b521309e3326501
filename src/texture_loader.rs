use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{In, Reader, Tag, Value};
use tracing::{debug, warn};

use crate::error::DisplayError;

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

pub fn is_supported_image(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Reads the EXIF orientation tag, 1 (upright) when absent or unreadable.
pub fn exif_orientation(path: &Path, file_bytes: &[u8]) -> u16 {
    let extension = extension_of(path);
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }

    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data, assuming upright");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, DisplayError> {
    if !is_supported_image(image_path) {
        return Err(DisplayError::UnsupportedImage { path: image_path.to_path_buf() });
    }

    let file_bytes = fs::read(image_path).map_err(|source| DisplayError::ImageRead {
        path: image_path.to_path_buf(),
        source,
    })?;

    let orientation = exif_orientation(image_path, &file_bytes);

    let mut image = Image::load_image_from_mem(&format!(".{}", extension_of(image_path)), &file_bytes)
        .map_err(|e| DisplayError::ImageDecode {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are left as stored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %image_path.display(), orientation, "background image decoded");

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| DisplayError::Texture { message: e.to_string() })
}
