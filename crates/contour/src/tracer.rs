use std::collections::HashSet;

use tracing::debug;

use crate::{
    field::PixelField,
    types::{Contour, Point, TraceResult},
};

/// Moore neighborhood as `(dx, dy, resume_index)`, indexed 1..=8 clockwise
/// starting due west. After stepping onto a neighbor, the walk resumes its
/// search at the paired resume index instead of restarting from 1, which
/// points the next probe back toward the region just left.
const NEIGHBORHOOD: [(i32, i32, usize); 8] = [
    (-1, 0, 7),
    (-1, -1, 7),
    (0, -1, 1),
    (1, -1, 1),
    (1, 0, 3),
    (1, 1, 3),
    (0, 1, 5),
    (-1, 1, 5),
];

/// Walks the outer boundary of every connected foreground region in a
/// [`PixelField`] using Moore-neighbor tracing with Jacob's stopping
/// criterion. Single foreground pixels with no foreground neighbor are
/// rejected as noise.
#[derive(Debug)]
pub struct ContourTracer<'a> {
    field: &'a PixelField,
}

impl<'a> ContourTracer<'a> {
    pub fn new(field: &'a PixelField) -> Self {
        Self { field }
    }

    /// Scan the whole field in raster order and trace each undiscovered
    /// foreground boundary exactly once.
    ///
    /// Pure with respect to the field: repeated calls yield identical
    /// results in identical order.
    pub fn trace(&self) -> TraceResult {
        let (width, height) = self.field.dimensions();

        let mut visited: HashSet<Point> = HashSet::new();
        let mut contours: Vec<Contour> = Vec::new();
        let mut discarded = 0usize;

        // `inside` tracks whether the scan cursor is currently within a
        // region whose boundary is already traced. It deliberately survives
        // across contours within one row sweep.
        let mut inside = false;

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let point = Point::new(x, y);

                if visited.contains(&point) && !inside {
                    // Re-entering a border discovered earlier in the scan.
                    inside = true;
                    continue;
                }

                let background = self.field.is_background(point);

                if !background && inside {
                    continue;
                }

                if background {
                    if inside {
                        inside = false;
                    }
                    continue;
                }

                // Undiscovered foreground pixel: walk its boundary.
                match self.trace_boundary(point, &mut visited, &mut inside) {
                    Some(contour) => contours.push(contour),
                    None => discarded += 1,
                }
            }
        }

        debug!(
            contours = contours.len(),
            discarded_seeds = discarded,
            width,
            height,
            "contour trace complete"
        );

        TraceResult {
            contours,
            field_width: width,
            field_height: height,
        }
    }

    /// Walk the boundary starting from `seed`, a foreground pixel not yet
    /// assigned to any contour.
    ///
    /// Returns `None` when the seed turns out to be an isolated pixel (all
    /// eight neighbors background); the seed stays in the visited set so the
    /// outer scan never re-seeds from it.
    fn trace_boundary(
        &self,
        seed: Point,
        visited: &mut HashSet<Point>,
        inside: &mut bool,
    ) -> Option<Contour> {
        let mut points = vec![seed];
        visited.insert(seed);

        let mut current = seed;
        let mut check_idx = 1usize;
        let mut close_counter = 0u32;
        let mut dead_counter = 0u32;

        loop {
            let (dx, dy, resume_idx) = NEIGHBORHOOD[check_idx - 1];
            let candidate = current.offset(dx, dy);

            if !self.field.is_background(candidate) {
                if candidate == seed {
                    close_counter += 1;

                    // Jacob's stopping criterion: arriving back at the seed
                    // through neighbor slot 1, or hitting the seed a third
                    // time, certifies a closed loop.
                    if resume_idx == 1 || close_counter >= 3 {
                        *inside = true;
                        return Some(Contour { points });
                    }
                }

                points.push(candidate);
                visited.insert(candidate);
                check_idx = resume_idx;
                current = candidate;
                dead_counter = 0;
            } else {
                // Rotate clockwise to the next neighbor.
                check_idx = 1 + (check_idx % 8);
                dead_counter += 1;

                if dead_counter > 8 {
                    // Every neighbor of `current` is background: the seed is
                    // an isolated pixel. Drop the walk entirely.
                    return None;
                }
            }
        }
    }
}
