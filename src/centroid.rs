use crate::point::Point;

/// Running coordinate sums of the points assigned to one cluster.
#[derive(Debug, Clone, Copy, Default)]
pub struct Centroid {
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl Centroid {
    pub fn update_centroid(&mut self, data_point: &Point) {
        self.sum_x += data_point.x as f64;
        self.sum_y += data_point.y as f64;
        self.count += 1;
    }

    /// An empty centroid collapses to the origin so the center count stays `k`.
    pub fn finalize_centroid(&self) -> Point {
        if self.count == 0 {
            return Point::ORIGIN;
        }
        let count = self.count as f64;
        Point::new((self.sum_x / count) as f32, (self.sum_y / count) as f32)
    }
}

pub fn mean<'a>(points: impl IntoIterator<Item = &'a Point>) -> Point {
    let mut centroid = Centroid::default();
    for point in points {
        centroid.update_centroid(point);
    }
    centroid.finalize_centroid()
}
