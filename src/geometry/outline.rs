use super::Point;

/// The geometric primitive a gesture commits to the canvas.
///
/// Outlines are rasterized immediately and never retained, so this type only
/// lives between the end of a gesture and the pixel writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outline {
    /// A single line segment, used by free drawing
    Segment(Point, Point),
    /// Axis-aligned rectangle with inclusive corners
    Rectangle { min: Point, max: Point },
    /// Circle given by center and radius in pixels
    Circle { center: Point, radius: i32 },
    /// Closed polygon through the given vertices
    Polygon(Vec<Point>),
}

impl Outline {
    /// Rectangle spanned by two opposite corners, in any order
    pub fn rectangle(start: Point, end: Point) -> Self {
        Self::Rectangle {
            min: Point::new(start.x.min(end.x), start.y.min(end.y)),
            max: Point::new(start.x.max(end.x), start.y.max(end.y)),
        }
    }

    /// Circle centered on `start`. The radius is the Manhattan distance to `end`.
    pub fn circle(start: Point, end: Point) -> Self {
        Self::Circle {
            center: start,
            radius: start.manhattan_distance(end),
        }
    }

    /// Right triangle anchored on the horizontal line through `start`
    pub fn triangle(start: Point, end: Point) -> Self {
        Self::Polygon(vec![start, end, Point::new(end.x, start.y)])
    }

    /// Corner points of the outline. Circles have none.
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Self::Segment(a, b) => vec![*a, *b],
            Self::Rectangle { min, max } => vec![
                *min,
                Point::new(max.x, min.y),
                *max,
                Point::new(min.x, max.y),
            ],
            Self::Circle { .. } => Vec::new(),
            Self::Polygon(points) => points.clone(),
        }
    }

    /// Straight edges making up the outline, closed for rectangles and polygons
    pub fn edges(&self) -> Vec<(Point, Point)> {
        match self {
            Self::Segment(a, b) => vec![(*a, *b)],
            Self::Circle { .. } => Vec::new(),
            Self::Rectangle { .. } | Self::Polygon(_) => {
                let vertices = self.vertices();
                let count = vertices.len();
                (0..count)
                    .map(|i| (vertices[i], vertices[(i + 1) % count]))
                    .collect()
            }
        }
    }
}
