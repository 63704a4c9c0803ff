use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid photo payload: {0}")]
    Payload(#[from] base64::DecodeError),
    #[error("Invalid image: {0}")]
    Image(#[from] image::ImageError),
    #[error("The image contains no pixels")]
    Empty,
}

const DATA_URL_PREFIX: &str = "data:";

/// Extract the raw image bytes from a photo payload.
///
/// Browsers submit photos as data URLs
/// (`data:image/jpeg;base64,...`), plain base64
/// is accepted as well.
pub fn decode_photo_payload(payload: &str) -> Result<Vec<u8>, DecodeError> {
    let payload = payload.trim();
    let encoded = match payload.strip_prefix(DATA_URL_PREFIX) {
        Some(data_url) => data_url
            .split_once(',')
            .map(|(_media_type, data)| data)
            .unwrap_or_default(),
        None => payload,
    };
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(STANDARD.decode(encoded)?)
}

/// Decode an image of any supported raster format into RGB.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    let img = image::load_from_memory(bytes)?.to_rgb8();
    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::Empty);
    }
    Ok(img)
}

pub fn decode_photo(payload: &str) -> Result<RgbImage, DecodeError> {
    let bytes = decode_photo_payload(payload)?;
    decode_image(&bytes)
}
