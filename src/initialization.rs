use itertools::Itertools;
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::ClusterError;
use crate::point::Point;

/// `k` centers with both coordinates drawn uniformly from `[lower, upper)`.
pub fn random_centers<R: Rng + ?Sized>(
    k: usize,
    lower: f32,
    upper: f32,
    rng: &mut R,
) -> Result<Vec<Point>, ClusterError> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(ClusterError::InvalidConfig(format!(
            "center bounds must satisfy lower < upper, got [{}, {})",
            lower, upper
        )));
    }

    let coords: Array2<f32> = Array2::random_using((k, 2), Uniform::new(lower, upper), rng);
    Ok(coords.rows().into_iter().map(|row| Point::new(row[0], row[1])).collect_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn centers_fall_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let centers = random_centers(50, -5.0, 5.0, &mut rng).unwrap();
        assert_eq!(centers.len(), 50);
        for center in centers {
            assert!((-5.0..5.0).contains(&center.x), "{center}");
            assert!((-5.0..5.0).contains(&center.y), "{center}");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = random_centers(8, 0.0, 1_000_000.0, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random_centers(8, 0.0, 1_000_000.0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_centers(3, 1.0, 1.0, &mut rng).is_err());
        assert!(random_centers(3, 0.0, f32::INFINITY, &mut rng).is_err());
        assert!(random_centers(0, 0.0, 1.0, &mut rng).unwrap().is_empty());
    }
}
