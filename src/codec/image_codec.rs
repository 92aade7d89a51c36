//! `image` crate backed codec.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use log::debug;

use super::ImageCodec;
use crate::format::{EncodeSettings, OutputFormat};
use crate::utils::error::CodecError;

/// Default codec: PNG, JPEG and lossless WebP via the `image` crate.
///
/// PNG compression levels (0-9) map onto the encoder presets: 0-3 fast,
/// 4-6 default, 7 and above best. WebP is always lossless here, so its
/// quality value is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateCodec;

impl ImageCrateCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        image::load_from_memory(bytes).map_err(CodecError::DecodeFailed)
    }

    fn encode(
        &self,
        image: &DynamicImage,
        settings: EncodeSettings,
    ) -> Result<Vec<u8>, CodecError> {
        let (width, height) = (image.width(), image.height());
        let mut buffer = Vec::new();

        match settings.format {
            OutputFormat::Png => {
                let rgba = image.to_rgba8();
                let encoder = PngEncoder::new_with_quality(
                    &mut buffer,
                    png_compression(settings.quality),
                    FilterType::Adaptive,
                );
                encoder
                    .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(CodecError::EncodeFailed)?;
            }
            OutputFormat::Jpeg => {
                // JPEG has no alpha channel
                let rgb = image.to_rgb8();
                let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(settings.quality));
                encoder
                    .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
                    .map_err(CodecError::EncodeFailed)?;
            }
            OutputFormat::Webp => {
                let rgba = image.to_rgba8();
                let encoder = WebPEncoder::new_lossless(&mut buffer);
                encoder
                    .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(CodecError::EncodeFailed)?;
            }
        }

        debug!(
            "Encoded {}x{} image as {} (quality {}): {} bytes",
            width,
            height,
            settings.format,
            settings.quality,
            buffer.len()
        );

        Ok(buffer)
    }
}

fn png_compression(level: u32) -> CompressionType {
    match level {
        0..=3 => CompressionType::Fast,
        4..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}

fn jpeg_quality(quality: u32) -> u8 {
    quality.clamp(1, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn sample_image() -> DynamicImage {
        let mut img = RgbaImage::new(4, 3);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 60) as u8, (y * 80) as u8, 128, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    fn settings(format: OutputFormat, quality: u32) -> EncodeSettings {
        EncodeSettings { format, quality }
    }

    #[test]
    fn test_png_roundtrip_keeps_pixels() {
        let codec = ImageCrateCodec::new();
        let original = sample_image();

        let bytes = codec.encode(&original, settings(OutputFormat::Png, 8)).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);

        let decoded = codec.decode(&bytes).unwrap();
        assert_eq!(decoded.to_rgba8(), original.to_rgba8());
    }

    #[test]
    fn test_jpeg_encoding() {
        let codec = ImageCrateCodec::new();
        let bytes = codec
            .encode(&sample_image(), settings(OutputFormat::Jpeg, 85))
            .unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = codec.decode(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[test]
    fn test_webp_encoding() {
        let codec = ImageCrateCodec::new();
        let bytes = codec
            .encode(&sample_image(), settings(OutputFormat::Webp, 85))
            .unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::WebP);
    }

    #[test]
    fn test_transcode_png_to_jpeg() {
        let codec = ImageCrateCodec::new();
        let png = codec.encode(&sample_image(), settings(OutputFormat::Png, 8)).unwrap();

        let jpeg = codec.transcode(&png, settings(OutputFormat::Jpeg, 50)).unwrap();
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let codec = ImageCrateCodec::new();
        assert!(matches!(
            codec.decode(b"not an image"),
            Err(CodecError::DecodeFailed(_))
        ));
    }

    #[test]
    fn test_png_compression_mapping() {
        assert!(matches!(png_compression(1), CompressionType::Fast));
        assert!(matches!(png_compression(5), CompressionType::Default));
        assert!(matches!(png_compression(8), CompressionType::Best));
    }

    #[test]
    fn test_jpeg_quality_clamped() {
        assert_eq!(jpeg_quality(0), 1);
        assert_eq!(jpeg_quality(250), 100);
    }
}
