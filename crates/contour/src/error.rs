use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContourError {
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("Invalid field dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} samples, expected {width}x{height}")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("Point ({x}, {y}) is outside the field bounds")]
    OutOfBounds { x: i32, y: i32 },
}

pub type Result<T> = std::result::Result<T, ContourError>;
