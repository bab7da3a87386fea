mod outline;

pub use outline::Outline;

/// A pixel position on the canvas. Coordinates may fall outside the buffer;
/// rasterization clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute axis deltas between two points
    pub fn manhattan_distance(self, other: Point) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Round a floating point position to the nearest pixel
    pub fn from_pos2(pos: egui::Pos2) -> Self {
        Self {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance_is_symmetric() {
        let a = Point::new(-2, 5);
        let b = Point::new(4, 1);
        assert_eq!(a.manhattan_distance(b), 10);
        assert_eq!(b.manhattan_distance(a), 10);
    }

    #[test]
    fn test_from_pos2_rounds() {
        assert_eq!(Point::from_pos2(egui::pos2(3.4, 7.6)), Point::new(3, 8));
        assert_eq!(Point::from_pos2(egui::pos2(-0.6, 0.4)), Point::new(-1, 0));
    }
}
