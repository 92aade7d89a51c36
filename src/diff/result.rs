//! What a diff engine reports back.

use image::DynamicImage;
use std::fmt;

use crate::utils::error::DiffError;

type Producer = Box<dyn FnOnce() -> Result<DynamicImage, DiffError> + Send>;

/// Diff raster, rendered only when someone asks for it.
///
/// Passing comparisons never need the image, so engines may defer the work.
pub struct DiffImage {
    producer: Producer,
}

impl DiffImage {
    /// An image that is already rendered
    pub fn ready(image: DynamicImage) -> Self {
        Self {
            producer: Box::new(move || Ok(image)),
        }
    }

    /// An image rendered on first use
    pub fn deferred<F>(render: F) -> Self
    where
        F: FnOnce() -> Result<DynamicImage, DiffError> + Send + 'static,
    {
        Self {
            producer: Box::new(render),
        }
    }

    /// For engines that cannot render a diff at all
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::deferred(move || Err(DiffError::ImageUnavailable(reason)))
    }

    /// Render the image
    pub fn produce(self) -> Result<DynamicImage, DiffError> {
        (self.producer)()
    }
}

impl fmt::Debug for DiffImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DiffImage { .. }")
    }
}

/// Result of one comparison
#[derive(Debug)]
pub struct ComparisonResult {
    pub is_same_dimensions: bool,

    /// Share of compared pixels that differ, 0-100
    pub mismatch_percentage: f64,

    pub diff_image: DiffImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_image() {
        let image = DiffImage::ready(DynamicImage::new_rgba8(2, 2));
        let produced = image.produce().unwrap();
        assert_eq!((produced.width(), produced.height()), (2, 2));
    }

    #[test]
    fn test_deferred_image_runs_on_produce() {
        let image = DiffImage::deferred(|| Ok(DynamicImage::new_rgba8(3, 1)));
        assert_eq!(image.produce().unwrap().width(), 3);
    }

    #[test]
    fn test_unavailable_image() {
        let image = DiffImage::unavailable("engine renders no overlay");
        assert!(matches!(
            image.produce(),
            Err(DiffError::ImageUnavailable(_))
        ));
    }
}
