use rayon::prelude::*;

use crate::distance::{euclidian_distance, nearest_index};
use crate::point::Point;

/// Sum of each point's distance to its nearest center. Points with no
/// comparable center are skipped.
pub fn calculate_inertia(data: &[Point], centers: &[Point]) -> f64 {
    data.par_iter()
        .filter_map(|point| nearest_index(point, centers).map(|idx| euclidian_distance(point, &centers[idx])))
        .sum()
}
