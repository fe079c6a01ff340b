use crate::{Error, Result};
use base64::Engine;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Neither output dimension may exceed this. Smaller images pass through
/// untouched.
pub const MAX_DIMENSION: u32 = 800;

/// A processed upload ready to attach to a completion request.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// `data:image/..;base64,..` URL for the multimodal content part.
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Checks the upload's filename suffix and returns the format used for
/// re-encoding. Only JPEG and PNG are accepted, case-insensitive. Suffix
/// semantics, not `Path::extension`: a bare ".png" counts.
pub fn validate_filename(filename: &str) -> Result<ImageFormat> {
    let lower = filename.to_ascii_lowercase();

    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        Ok(ImageFormat::Jpeg)
    } else if lower.ends_with(".png") {
        Ok(ImageFormat::Png)
    } else {
        Err(Error::input(
            "Invalid file type. Only JPG, JPEG, PNG allowed.",
        ))
    }
}

fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        _ => "image/jpeg",
    }
}

fn process_sync(bytes: Vec<u8>, format: ImageFormat, uploads_dir: PathBuf) -> Result<EncodedImage> {
    let mut img = image::load_from_memory(&bytes)?;

    if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
        img = img.thumbnail(MAX_DIMENSION, MAX_DIMENSION);
    }

    // JPEG has no alpha channel; uploads carrying one (a .jpg-named PNG)
    // must be flattened before re-encoding.
    if format == ImageFormat::Jpeg && img.color().has_alpha() {
        img = image::DynamicImage::ImageRgb8(img.to_rgb8());
    }

    // Unique per request, removed on drop. The scratch file stays inside
    // the uploads directory even on error paths.
    let suffix = format!(".{}", format.extensions_str()[0]);
    let temp = tempfile::Builder::new()
        .prefix(&format!("{}-", Uuid::new_v4()))
        .suffix(&suffix)
        .tempfile_in(&uploads_dir)?;

    img.save_with_format(temp.path(), format)?;
    let processed = std::fs::read(temp.path())?;
    drop(temp);

    let encoded = base64::engine::general_purpose::STANDARD.encode(&processed);

    Ok(EncodedImage {
        data_url: format!("data:{};base64,{}", mime_type(format), encoded),
        width: img.width(),
        height: img.height(),
    })
}

/// Decodes the upload, downscales it to fit `MAX_DIMENSION`, re-encodes it
/// through a scoped temp file under `uploads_dir`, and base64-encodes the
/// result. Image work is blocking, so it runs off the async executor.
pub async fn process_upload(
    bytes: Vec<u8>,
    filename: &str,
    uploads_dir: &Path,
) -> Result<EncodedImage> {
    let format = validate_filename(filename)?;
    let uploads_dir = uploads_dir.to_path_buf();

    tokio::task::spawn_blocking(move || process_sync(bytes, format, uploads_dir))
        .await
        .map_err(|e| Error::processing(format!("Image task join error: {}", e)))?
}
