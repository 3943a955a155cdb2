use serde::{Deserialize, Serialize};

/// An integer pixel coordinate, 0-based, x increasing rightward and
/// y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point displaced by (dx, dy).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned bounding rectangle in pixel coordinates.
///
/// `width` and `height` are the coordinate spans (`max - min`), matching the
/// sprite-frame convention of the rest of the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// The ordered boundary of one connected foreground region, in the order the
/// walk discovered its pixels. Closed by construction; append-only while a
/// trace is running and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The smallest axis-aligned rectangle covering every boundary point.
    ///
    /// Returns `None` for an empty contour (never produced by a trace).
    pub fn bounding_rect(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Some(Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}

/// All contours discovered by one trace, in raster-scan discovery order of
/// their seed points, together with the dimensions of the traced field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceResult {
    pub contours: Vec<Contour>,
    pub field_width: u32,
    pub field_height: u32,
}

impl TraceResult {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Bounding rectangles of all contours, in discovery order.
    pub fn bounding_rects(&self) -> Vec<Rect> {
        self.contours
            .iter()
            .filter_map(Contour::bounding_rect)
            .collect()
    }
}
