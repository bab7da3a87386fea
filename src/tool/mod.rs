mod brush;
mod pen;
mod shape;

pub use brush::BrushVariant;
pub use pen::{PenSize, color_name, to_rgb};
pub use shape::ShapeMode;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

/// Which brush variants and shape modes the toolbar offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolProfile {
    /// Classic brushes plus every shape mode
    #[default]
    Standard,
    /// Free drawing only, with the extended brush set
    Restricted,
}

impl ToolProfile {
    pub fn brushes(self) -> &'static [BrushVariant] {
        match self {
            Self::Standard => &[
                BrushVariant::Normal,
                BrushVariant::Round,
                BrushVariant::Square,
                BrushVariant::Eraser,
            ],
            Self::Restricted => &[
                BrushVariant::Normal,
                BrushVariant::Spray,
                BrushVariant::Oil,
                BrushVariant::Puffy,
                BrushVariant::Textured,
                BrushVariant::Calligraphy,
                BrushVariant::Eraser,
            ],
        }
    }

    pub fn shapes(self) -> &'static [ShapeMode] {
        match self {
            Self::Standard => &ShapeMode::ALL,
            Self::Restricted => &[ShapeMode::FreeDrawing],
        }
    }

    pub fn offers_brush(self, brush: BrushVariant) -> bool {
        self.brushes().contains(&brush)
    }

    pub fn offers_shape(self, shape: ShapeMode) -> bool {
        self.shapes().contains(&shape)
    }
}

/// Pen and shape settings applied to the next gesture
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    profile: ToolProfile,
    color: Color32,
    size: PenSize,
    brush: BrushVariant,
    shape: ShapeMode,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(ToolProfile::default(), Color32::BLACK, PenSize::default())
    }
}

impl ToolState {
    pub fn new(profile: ToolProfile, color: Color32, size: PenSize) -> Self {
        Self {
            profile,
            color,
            size,
            brush: BrushVariant::Normal,
            shape: ShapeMode::FreeDrawing,
        }
    }

    pub fn profile(&self) -> ToolProfile {
        self.profile
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> PenSize {
        self.size
    }

    pub fn brush(&self) -> BrushVariant {
        self.brush
    }

    pub fn shape(&self) -> ShapeMode {
        self.shape
    }

    /// Returns true if the color changed. Alpha is discarded.
    pub fn set_color(&mut self, color: Color32) -> bool {
        let color = Color32::from_rgb(color.r(), color.g(), color.b());
        let changed = self.color != color;
        self.color = color;
        changed
    }

    /// Returns true if the size changed
    pub fn set_size(&mut self, size: PenSize) -> bool {
        let changed = self.size != size;
        self.size = size;
        changed
    }

    /// Returns true if the brush changed. Brushes outside the profile are rejected.
    pub fn select_brush(&mut self, brush: BrushVariant) -> Result<bool, ToolError> {
        if !self.profile.offers_brush(brush) {
            return Err(ToolError::InvalidToolValue(format!(
                "{} is not available",
                brush.label()
            )));
        }
        let changed = self.brush != brush;
        self.brush = brush;
        Ok(changed)
    }

    /// Returns true if the shape mode changed. Modes outside the profile are rejected.
    pub fn select_shape(&mut self, shape: ShapeMode) -> Result<bool, ToolError> {
        if !self.profile.offers_shape(shape) {
            return Err(ToolError::InvalidToolValue(format!(
                "{} is not available",
                shape.label()
            )));
        }
        let changed = self.shape != shape;
        self.shape = shape;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_selector_strings() {
        for brush in BrushVariant::ALL {
            assert_eq!(BrushVariant::from_label(brush.label()), Some(brush));
        }
        for shape in ShapeMode::ALL {
            assert_eq!(ShapeMode::from_label(shape.label()), Some(shape));
        }
        assert_eq!(BrushVariant::from_label("Crayon"), None);
    }

    #[test]
    fn test_restricted_profile_only_free_drawing() {
        let mut tools = ToolState::new(ToolProfile::Restricted, Color32::BLACK, PenSize::default());
        assert!(tools.select_shape(ShapeMode::Circle).is_err());
        assert_eq!(tools.shape(), ShapeMode::FreeDrawing);
        assert!(matches!(tools.select_brush(BrushVariant::Spray), Ok(true)));
        assert!(tools.select_brush(BrushVariant::Square).is_err());
        assert_eq!(tools.brush(), BrushVariant::Spray);
    }

    #[test]
    fn test_standard_profile_rejects_extended_brushes() {
        let mut tools = ToolState::default();
        assert!(tools.select_brush(BrushVariant::Calligraphy).is_err());
        assert!(matches!(tools.select_brush(BrushVariant::Eraser), Ok(true)));
        assert!(matches!(tools.select_brush(BrushVariant::Eraser), Ok(false)));
    }

    #[test]
    fn test_set_color_drops_alpha() {
        let mut tools = ToolState::default();
        assert!(tools.set_color(Color32::from_rgba_premultiplied(10, 20, 30, 40)));
        assert_eq!(tools.color(), Color32::from_rgb(10, 20, 30));
        assert!(!tools.set_color(Color32::from_rgb(10, 20, 30)));
    }
}
