//! Player head rendering from skin textures.
//!
//! Pure image glue: takes skin PNG bytes, returns the encoded head. The
//! façade is responsible for downloading the skin.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{GenericImageView, ImageFormat, imageops};
use std::io::Cursor;

/// Largest head edge, in pixels, that [`render_head`] will produce.
pub const MAX_HEAD_SIZE: u32 = 1024;

/// Output encoding of a rendered head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadEncoding {
    /// Raw PNG bytes
    Png,
    /// Base64 of the PNG, no prefix
    Base64,
    /// `data:image/png;base64,...` URI, ready for an `<img src>`
    #[default]
    DataUri,
}

impl HeadEncoding {
    /// Maps the classic `base64_only` flag: bare base64 when set, a data URI otherwise.
    pub fn from_base64_only(base64_only: bool) -> Self {
        if base64_only { Self::Base64 } else { Self::DataUri }
    }
}

/// Render a `size`x`size` head image from a Minecraft skin PNG.
///
/// The head is composed of:
/// - Face layer: 8x8 at position (8, 8)
/// - Hat overlay: 8x8 at position (40, 8), only on 64x64 skins
///
/// The two layers are composited and scaled with nearest-neighbor
/// interpolation (to preserve the pixelated Minecraft style).
pub fn render_head(
    skin_png: &[u8],
    size: u32,
    encoding: HeadEncoding,
) -> Result<Vec<u8>, RenderError> {
    if size == 0 || size > MAX_HEAD_SIZE {
        return Err(RenderError::InvalidSize(size));
    }

    let skin =
        image::load_from_memory(skin_png).map_err(|e| RenderError::ImageLoad(e.to_string()))?;

    // Skins are 64x64, or 64x32 for the legacy format
    let (width, height) = skin.dimensions();
    if width != 64 || (height != 64 && height != 32) {
        return Err(RenderError::InvalidSkinDimensions { width, height });
    }

    let mut head = skin.crop_imm(8, 8, 8, 8).to_rgba8();
    if height == 64 {
        let hat = skin.crop_imm(40, 8, 8, 8).to_rgba8();
        imageops::overlay(&mut head, &hat, 0, 0);
    }

    let head = imageops::resize(&head, size, size, imageops::FilterType::Nearest);

    let mut png = Vec::new();
    head.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| RenderError::ImageEncode(e.to_string()))?;

    Ok(match encoding {
        HeadEncoding::Png => png,
        HeadEncoding::Base64 => STANDARD.encode(&png).into_bytes(),
        HeadEncoding::DataUri => format!("data:image/png;base64,{}", STANDARD.encode(&png)).into_bytes(),
    })
}

/// Errors that can occur during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Failed to load image from memory
    ImageLoad(String),
    /// Invalid skin dimensions
    InvalidSkinDimensions { width: u32, height: u32 },
    /// Requested head size out of range
    InvalidSize(u32),
    /// Failed to encode image
    ImageEncode(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::ImageLoad(e) => write!(f, "failed to load image: {}", e),
            RenderError::InvalidSkinDimensions { width, height } => {
                write!(
                    f,
                    "invalid skin dimensions: {}x{} (expected 64x64 or 64x32)",
                    width, height
                )
            }
            RenderError::InvalidSize(size) => {
                write!(f, "invalid head size: {} (expected 1..={})", size, MAX_HEAD_SIZE)
            }
            RenderError::ImageEncode(e) => write!(f, "failed to encode image: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const FACE: Rgba<u8> = Rgba([200, 0, 0, 255]);
    const HAT: Rgba<u8> = Rgba([0, 0, 200, 255]);

    /// Skin with a solid face and a single opaque hat pixel at the top-left.
    fn skin_png(height: u32) -> Vec<u8> {
        let mut skin = RgbaImage::new(64, height);
        for y in 8..16 {
            for x in 8..16 {
                skin.put_pixel(x, y, FACE);
            }
        }
        skin.put_pixel(40, 8, HAT);

        let mut buf = Vec::new();
        skin.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn decode(png: &[u8]) -> RgbaImage {
        image::load_from_memory(png).unwrap().to_rgba8()
    }

    #[test]
    fn test_render_head_invalid_data() {
        let result = render_head(b"not a valid png", 64, HeadEncoding::Png);
        assert!(matches!(result, Err(RenderError::ImageLoad(_))));
    }

    #[test]
    fn test_render_head_wrong_dimensions() {
        let mut buf = Vec::new();
        RgbaImage::new(32, 32)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();

        let result = render_head(&buf, 64, HeadEncoding::Png);
        assert_eq!(
            result,
            Err(RenderError::InvalidSkinDimensions {
                width: 32,
                height: 32
            })
        );
    }

    #[test]
    fn test_render_head_invalid_size() {
        let skin = skin_png(64);
        assert_eq!(
            render_head(&skin, 0, HeadEncoding::Png),
            Err(RenderError::InvalidSize(0))
        );
        assert_eq!(
            render_head(&skin, MAX_HEAD_SIZE + 1, HeadEncoding::Png),
            Err(RenderError::InvalidSize(MAX_HEAD_SIZE + 1))
        );
    }

    #[test]
    fn test_render_head_composites_hat_over_face() {
        let png = render_head(&skin_png(64), 64, HeadEncoding::Png).unwrap();
        let head = decode(&png);

        assert_eq!(head.dimensions(), (64, 64));
        // Hat pixel scaled 8x covers the top-left block
        assert_eq!(*head.get_pixel(0, 0), HAT);
        assert_eq!(*head.get_pixel(7, 7), HAT);
        assert_eq!(*head.get_pixel(8, 8), FACE);
        assert_eq!(*head.get_pixel(63, 63), FACE);
    }

    #[test]
    fn test_render_head_legacy_skin_has_no_hat() {
        let png = render_head(&skin_png(32), 16, HeadEncoding::Png).unwrap();
        let head = decode(&png);

        assert_eq!(head.dimensions(), (16, 16));
        assert_eq!(*head.get_pixel(0, 0), FACE);
    }

    #[test]
    fn test_render_head_base64_encoding() {
        let encoded = render_head(&skin_png(64), 8, HeadEncoding::Base64).unwrap();
        let png = STANDARD.decode(&encoded).unwrap();

        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
        assert_eq!(decode(&png).dimensions(), (8, 8));
    }

    #[test]
    fn test_render_head_data_uri_encoding() {
        let uri = render_head(&skin_png(64), 8, HeadEncoding::DataUri).unwrap();
        let uri = String::from_utf8(uri).unwrap();

        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert!(STANDARD.decode(payload).is_ok());
    }

    #[test]
    fn test_encoding_from_base64_only_flag() {
        assert_eq!(HeadEncoding::from_base64_only(true), HeadEncoding::Base64);
        assert_eq!(HeadEncoding::from_base64_only(false), HeadEncoding::DataUri);
    }
}
