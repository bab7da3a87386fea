use std::fmt;

/// Stroke style used for free drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrushVariant {
    /// Flat pen with square caps
    #[default]
    Normal,
    /// Round stamp
    Round,
    /// Axis-aligned square stamp
    Square,
    /// Scattered dots around the path
    Spray,
    /// Round stamp broken into short bristle runs
    Oil,
    /// Chain of hollow bubbles
    Puffy,
    /// Round stamp with a grain mask
    Textured,
    /// Slanted flat nib
    Calligraphy,
    /// Paints with the background color
    Eraser,
}

impl BrushVariant {
    pub const ALL: [BrushVariant; 9] = [
        Self::Normal,
        Self::Round,
        Self::Square,
        Self::Spray,
        Self::Oil,
        Self::Puffy,
        Self::Textured,
        Self::Calligraphy,
        Self::Eraser,
    ];

    /// Display name shown in the brush selector
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal Brush",
            Self::Round => "Round Brush",
            Self::Square => "Square Brush",
            Self::Spray => "Spray Can",
            Self::Oil => "Oil Brush",
            Self::Puffy => "Puffy Brush",
            Self::Textured => "Textured Brush",
            Self::Calligraphy => "Calligraphy Brush",
            Self::Eraser => "Eraser",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.label() == label)
    }

    pub fn is_eraser(self) -> bool {
        matches!(self, Self::Eraser)
    }
}

impl fmt::Display for BrushVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
