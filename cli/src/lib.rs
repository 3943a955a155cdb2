use contour::{Rect, TraceResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlicerError {
    #[error(transparent)]
    Contour(#[from] contour::ContourError),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// One detected foreground region: its bounding rectangle plus a default
/// name assigned in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub name: String,
    pub rect: Rect,
}

/// The regions found in one image, ready for downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSet {
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub regions: Vec<Region>,
}

impl RegionSet {
    /// Derive named bounding regions from a trace, keeping discovery order.
    pub fn from_trace(image: impl Into<String>, result: &TraceResult) -> Self {
        let regions = result
            .bounding_rects()
            .into_iter()
            .enumerate()
            .map(|(i, rect)| Region {
                name: format!("Boundary {i}"),
                rect,
            })
            .collect();

        Self {
            image: image.into(),
            width: result.field_width,
            height: result.field_height,
            regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour::{Contour, Point};

    #[test]
    fn regions_are_named_in_discovery_order() {
        let result = TraceResult {
            contours: vec![
                Contour {
                    points: vec![Point::new(1, 1), Point::new(3, 2)],
                },
                Contour {
                    points: vec![Point::new(5, 5)],
                },
            ],
            field_width: 8,
            field_height: 8,
        };

        let set = RegionSet::from_trace("sheet.png", &result);

        assert_eq!(set.image, "sheet.png");
        assert_eq!(set.regions.len(), 2);
        assert_eq!(set.regions[0].name, "Boundary 0");
        assert_eq!(
            set.regions[0].rect,
            Rect {
                x: 1,
                y: 1,
                width: 2,
                height: 1
            }
        );
        assert_eq!(set.regions[1].name, "Boundary 1");
    }

    #[test]
    fn empty_trace_yields_no_regions() {
        let result = TraceResult {
            contours: vec![],
            field_width: 4,
            field_height: 4,
        };

        let set = RegionSet::from_trace("empty.png", &result);
        assert!(set.regions.is_empty());
        assert_eq!((set.width, set.height), (4, 4));
    }
}
