//! Image encode/decode seam.
//!
//! The comparator only needs two things from a codec: turn a captured
//! buffer into pixels, and turn pixels into png/jpeg/webp bytes at a given
//! quality. `ImageCrateCodec` is the default, built on the `image` crate.

mod image_codec;

pub use image_codec::ImageCrateCodec;

use image::DynamicImage;

use crate::format::EncodeSettings;
use crate::utils::error::CodecError;

/// Encoder/decoder used for every artifact write
pub trait ImageCodec: Send + Sync {
    /// Decode an encoded image buffer (any supported format)
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError>;

    /// Encode pixels with the resolved format and quality
    fn encode(&self, image: &DynamicImage, settings: EncodeSettings)
        -> Result<Vec<u8>, CodecError>;

    /// Re-encode an already encoded buffer
    fn transcode(&self, bytes: &[u8], settings: EncodeSettings) -> Result<Vec<u8>, CodecError> {
        let image = self.decode(bytes)?;
        self.encode(&image, settings)
    }
}
