use std::fmt;
use std::path::PathBuf;

use egui::Color32;

use crate::canvas::Commit;
use crate::tool::{BrushVariant, PenSize, ShapeMode, color_name};

/// User actions that get written to the journal
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CanvasCleared,
    ImageSaved(PathBuf),
    ImageOpened(PathBuf),
    ColorChanged(Color32),
    SizeChanged(PenSize),
    BrushChanged(BrushVariant),
    ShapeChanged(ShapeMode),
    /// A finished gesture
    Drawn(Commit),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CanvasCleared => f.write_str("Canvas cleared"),
            Action::ImageSaved(path) => write!(f, "Image saved as {}", path.display()),
            Action::ImageOpened(path) => write!(f, "Image opened: {}", path.display()),
            Action::ColorChanged(color) => write!(f, "Color changed to {}", color_name(*color)),
            Action::SizeChanged(size) => write!(f, "Size changed to {size}"),
            Action::BrushChanged(brush) => write!(f, "Brush type changed to {brush}"),
            Action::ShapeChanged(shape) => write!(f, "Shape type changed to {shape}"),
            Action::Drawn(commit) if commit.shape.is_free_drawing() => {
                write!(f, "Stroke drawn with {}", commit.brush)
            }
            Action::Drawn(commit) => write!(
                f,
                "{} drawn from {} to {}",
                commit.shape, commit.start, commit.end
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_descriptions() {
        assert_eq!(Action::CanvasCleared.to_string(), "Canvas cleared");
        assert_eq!(
            Action::ImageSaved(PathBuf::from("out.png")).to_string(),
            "Image saved as out.png"
        );
        assert_eq!(
            Action::ImageOpened(PathBuf::from("in.png")).to_string(),
            "Image opened: in.png"
        );
        assert_eq!(
            Action::ColorChanged(Color32::from_rgb(0x12, 0xab, 0xff)).to_string(),
            "Color changed to #12abff"
        );
        assert_eq!(
            Action::BrushChanged(BrushVariant::Eraser).to_string(),
            "Brush type changed to Eraser"
        );
        assert_eq!(
            Action::ShapeChanged(ShapeMode::Circle).to_string(),
            "Shape type changed to Circle"
        );
    }

    #[test]
    fn test_drawn_descriptions() {
        let stroke = Commit {
            shape: ShapeMode::FreeDrawing,
            brush: BrushVariant::Round,
            start: Point::new(0, 0),
            end: Point::new(5, 5),
        };
        assert_eq!(Action::Drawn(stroke).to_string(), "Stroke drawn with Round Brush");

        let rect = Commit {
            shape: ShapeMode::Rectangle,
            ..stroke
        };
        assert_eq!(
            Action::Drawn(rect).to_string(),
            "Rectangle drawn from (0, 0) to (5, 5)"
        );
    }
}
