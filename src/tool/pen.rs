use std::fmt;
use std::str::FromStr;

use egui::Color32;

use crate::error::ToolError;

/// Pen width in pixels, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PenSize(u32);

impl PenSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 256;

    pub fn new(value: i64) -> Result<Self, ToolError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(ToolError::InvalidToolValue(format!(
                "Enter a positive integer between {} and {}.",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Half the pen width, never below half a pixel so thin lines stay connected
    pub fn half_width(self) -> f32 {
        (self.0 as f32 / 2.0).max(0.5)
    }
}

impl Default for PenSize {
    fn default() -> Self {
        Self(2)
    }
}

impl FromStr for PenSize {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ToolError::InvalidToolValue("Enter a valid integer.".to_owned()))?;
        Self::new(value)
    }
}

impl fmt::Display for PenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercase `#rrggbb` name of an opaque color
pub fn color_name(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// RGB channels of a color, dropping alpha
pub fn to_rgb(color: Color32) -> image::Rgb<u8> {
    image::Rgb([color.r(), color.g(), color.b()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_size_bounds() {
        assert_eq!(PenSize::new(1).map(PenSize::get).ok(), Some(1));
        assert_eq!(PenSize::new(256).map(PenSize::get).ok(), Some(256));
        assert!(PenSize::new(0).is_err());
        assert!(PenSize::new(257).is_err());
        assert!(PenSize::new(-5).is_err());
    }

    #[test]
    fn test_pen_size_parsing() {
        assert_eq!(" 12 ".parse::<PenSize>().map(PenSize::get).ok(), Some(12));
        assert!("abc".parse::<PenSize>().is_err());
        assert!("".parse::<PenSize>().is_err());
        assert!("3.5".parse::<PenSize>().is_err());
        assert!("999".parse::<PenSize>().is_err());
    }

    #[test]
    fn test_half_width_floor() {
        assert_eq!(PenSize::new(1).map(PenSize::half_width).ok(), Some(0.5));
        assert_eq!(PenSize::new(9).map(PenSize::half_width).ok(), Some(4.5));
    }

    #[test]
    fn test_color_name() {
        assert_eq!(color_name(Color32::from_rgb(255, 8, 171)), "#ff08ab");
        assert_eq!(color_name(Color32::BLACK), "#000000");
    }
}
