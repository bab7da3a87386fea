use std::fmt;

use crate::geometry::{Outline, Point};

/// The primitive a completed gesture commits to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeMode {
    #[default]
    FreeDrawing,
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeMode {
    pub const ALL: [ShapeMode; 4] = [
        Self::FreeDrawing,
        Self::Rectangle,
        Self::Circle,
        Self::Triangle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FreeDrawing => "Free Drawing",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label)
    }

    pub fn is_free_drawing(self) -> bool {
        matches!(self, Self::FreeDrawing)
    }

    /// Outline committed by a gesture from `start` to `end` in this mode
    pub fn outline(self, start: Point, end: Point) -> Outline {
        match self {
            Self::FreeDrawing => Outline::Segment(start, end),
            Self::Rectangle => Outline::rectangle(start, end),
            Self::Circle => Outline::circle(start, end),
            Self::Triangle => Outline::triangle(start, end),
        }
    }
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
