use crate::point::Point;

pub fn euclidian_distance(us: &Point, them: &Point) -> f64 {
    let dx = us.x as f64 - them.x as f64;
    let dy = us.y as f64 - them.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Index of the center closest to `point`.
///
/// Ties go to the first center reaching the minimum: the scan only moves on
/// a strictly smaller distance. Returns `None` for an empty center set, or
/// when no distance compares (NaN coordinates).
pub fn nearest_index(point: &Point, centers: &[Point]) -> Option<usize> {
    let mut index = None;
    let mut min_distance = f64::INFINITY;
    for (center_idx, center) in centers.iter().enumerate() {
        let distance = euclidian_distance(point, center);
        if distance < min_distance {
            min_distance = distance;
            index = Some(center_idx);
        }
    }
    index
}

/// Sum of the distances each center moved between two iterations.
pub fn total_shift(old_centers: &[Point], new_centers: &[Point]) -> f64 {
    old_centers
        .iter()
        .zip(new_centers.iter())
        .map(|(old, new)| euclidian_distance(old, new))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidian() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(euclidian_distance(&a, &b), 5.0);
        assert_eq!(euclidian_distance(&b, &a), 5.0);
        assert_eq!(euclidian_distance(&b, &b), 0.0);
    }

    #[test]
    fn nearest_index_picks_closest_center() {
        let centers = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(5.0, 5.0)];
        assert_eq!(nearest_index(&Point::new(9.0, 9.0), &centers), Some(1));
        assert_eq!(nearest_index(&Point::new(-1.0, 0.0), &centers), Some(0));
        assert_eq!(nearest_index(&Point::new(4.0, 6.0), &centers), Some(2));
    }

    #[test]
    fn nearest_index_breaks_ties_on_first_center() {
        let centers = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0), Point::new(-1.0, 0.0)];
        assert_eq!(nearest_index(&Point::ORIGIN, &centers), Some(0));

        let reversed = [Point::new(1.0, 0.0), Point::new(-1.0, 0.0)];
        assert_eq!(nearest_index(&Point::ORIGIN, &reversed), Some(0));
    }

    #[test]
    fn nearest_index_without_comparable_centers() {
        assert_eq!(nearest_index(&Point::ORIGIN, &[]), None);
        let centers = [Point::new(1.0, 1.0)];
        assert_eq!(nearest_index(&Point::new(f32::NAN, 0.0), &centers), None);
    }

    #[test]
    fn total_shift_sums_pairwise_distances() {
        let old = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let new = [Point::new(3.0, 4.0), Point::new(10.0, 10.0)];
        assert_eq!(total_shift(&old, &new), 5.0);
        assert_eq!(total_shift(&new, &new), 0.0);
    }
}
