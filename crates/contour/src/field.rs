use std::path::Path;

use image::RgbaImage;

use crate::{
    error::{ContourError, Result},
    types::Point,
};

/// An immutable snapshot of a decoded image as packed 32-bit ARGB samples,
/// together with the alpha threshold that classifies pixels as background.
///
/// The threshold is fixed at construction so a field's classification can
/// never change under a running trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelField {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    max_background_alpha: u8,
}

impl PixelField {
    /// Build a field from a raw row-major ARGB buffer.
    ///
    /// Fails on zero dimensions or a buffer whose length is not exactly
    /// `width * height`.
    pub fn from_raw(
        width: u32,
        height: u32,
        pixels: Vec<u32>,
        max_background_alpha: u8,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ContourError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ContourError::PixelCountMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            max_background_alpha,
        })
    }

    /// Snapshot a decoded RGBA image. Later changes to the image do not
    /// affect the field.
    pub fn from_image(image: &RgbaImage, max_background_alpha: u8) -> Result<Self> {
        let pixels = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
            })
            .collect();

        Self::from_raw(image.width(), image.height(), pixels, max_background_alpha)
    }

    /// Decode an image file and snapshot it.
    pub fn open<P: AsRef<Path>>(path: P, max_background_alpha: u8) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        Self::from_image(&image, max_background_alpha)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn max_background_alpha(&self) -> u8 {
        self.max_background_alpha
    }

    /// Raw checked accessor. Errors on out-of-bounds points; classification
    /// queries should go through [`Self::is_background`] instead, which
    /// treats out-of-bounds as background.
    pub fn get(&self, point: Point) -> Result<u32> {
        if !self.is_in_bounds(point) {
            return Err(ContourError::OutOfBounds {
                x: point.x,
                y: point.y,
            });
        }

        let index = point.y as usize * self.width as usize + point.x as usize;
        Ok(self.pixels[index])
    }

    pub fn is_in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.width as i32 && point.y < self.height as i32
    }

    /// Background classification. Out-of-bounds points are always background,
    /// which lets a boundary walk probe past the field edges safely; in-bounds
    /// pixels are background iff their alpha is at or below the threshold.
    pub fn is_background(&self, point: Point) -> bool {
        if !self.is_in_bounds(point) {
            return true;
        }

        let index = point.y as usize * self.width as usize + point.x as usize;
        let alpha = (self.pixels[index] >> 24) as u8;
        alpha <= self.max_background_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const OPAQUE: u32 = 0xFF00_0000;
    const CLEAR: u32 = 0x0000_0000;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            PixelField::from_raw(0, 4, vec![], 0),
            Err(ContourError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PixelField::from_raw(4, 0, vec![], 0),
            Err(ContourError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_buffer_length() {
        assert!(matches!(
            PixelField::from_raw(3, 3, vec![CLEAR; 8], 0),
            Err(ContourError::PixelCountMismatch { actual: 8, .. })
        ));
    }

    #[test]
    fn get_errors_out_of_bounds() {
        let field = PixelField::from_raw(2, 2, vec![OPAQUE; 4], 0).unwrap();
        assert!(field.get(Point::new(0, 1)).is_ok());
        assert!(matches!(
            field.get(Point::new(2, 0)),
            Err(ContourError::OutOfBounds { x: 2, y: 0 })
        ));
        assert!(matches!(
            field.get(Point::new(-1, 0)),
            Err(ContourError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn out_of_bounds_is_always_background() {
        let field = PixelField::from_raw(2, 2, vec![OPAQUE; 4], 0).unwrap();
        assert!(field.is_background(Point::new(-1, 0)));
        assert!(field.is_background(Point::new(0, -1)));
        assert!(field.is_background(Point::new(2, 0)));
        assert!(field.is_background(Point::new(0, 2)));
        assert!(!field.is_background(Point::new(1, 1)));
    }

    #[test]
    fn threshold_classifies_alpha_inclusively() {
        let pixels = vec![0x3200_0000, 0x3300_0000];
        let field = PixelField::from_raw(2, 1, pixels, 0x32).unwrap();
        assert!(field.is_background(Point::new(0, 0)));
        assert!(!field.is_background(Point::new(1, 0)));
    }

    #[test]
    fn from_image_snapshots_pixels() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([0x11, 0x22, 0x33, 0xFF]));

        let field = PixelField::from_image(&image, 0).unwrap();

        // Mutating the source must not affect the field.
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));

        assert_eq!(field.get(Point::new(0, 0)).unwrap(), 0xFF11_2233);
        assert!(!field.is_background(Point::new(0, 0)));
        assert!(field.is_background(Point::new(1, 0)));
    }
}
