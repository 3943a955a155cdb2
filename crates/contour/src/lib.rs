//! # Moore-Neighbor Contour Tracing
//!
//! Extracts the ordered outer boundaries of all opaque regions in an image
//! against a transparent background. The tracer walks each boundary with the
//! classic Moore-neighborhood state machine (clockwise probing with
//! direction-jump resume indices and Jacob's stopping criterion) and rejects
//! isolated single-pixel noise.
//!
//! ## Core pieces
//!
//! - [`PixelField`]: an immutable ARGB raster snapshot with a background
//!   alpha threshold fixed at construction
//! - [`ContourTracer`]: one raster scan producing every closed boundary
//!   exactly once, in discovery order
//! - [`Contour`] / [`TraceResult`]: the boundary point sequences, plus
//!   bounding-rectangle derivation for sprite-frame consumers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contour::{ContourTracer, PixelField};
//!
//! // Pixels with alpha <= 50 count as background.
//! let field = PixelField::open("sprites.png", 50)?;
//! let result = ContourTracer::new(&field).trace();
//!
//! for rect in result.bounding_rects() {
//!     println!("{},{} {}x{}", rect.x, rect.y, rect.width, rect.height);
//! }
//! # Ok::<(), contour::ContourError>(())
//! ```
//!
//! Hole boundaries inside a filled shape are intentionally not produced; the
//! scan only follows the outer border of each connected foreground region.

pub mod error;
pub mod field;
pub mod tracer;
pub mod types;

pub use error::{ContourError, Result};
pub use field::PixelField;
pub use tracer::ContourTracer;
pub use types::{Contour, Point, Rect, TraceResult};
