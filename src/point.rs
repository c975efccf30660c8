use std::fmt;

/// An immutable 2-D point. Equality is exact coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point::new(1.0, 2.0), Point::from((1.0, 2.0)));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.000_001));
    }

    #[test]
    fn displays_as_bracketed_pair() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "[1.5,-2]");
        assert_eq!(Point::default(), Point::ORIGIN);
    }
}
