use std::path::Path;

use egui::Color32;
use image::{Rgb, RgbImage};
use log::{debug, info, warn};

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{Outline, Point};
use crate::raster::{self, Ink};
use crate::tool::{BrushVariant, ShapeMode, ToolState, to_rgb};

/// An output surface the canvas can copy itself into
pub trait RenderTarget {
    /// Receives the full buffer as tightly packed RGB rows
    fn present(&mut self, width: u32, height: u32, rgb: &[u8]);
}

impl RenderTarget for RgbImage {
    fn present(&mut self, width: u32, height: u32, rgb: &[u8]) {
        if self.width() == width && self.height() == height {
            self.copy_from_slice(rgb);
            return;
        }
        match RgbImage::from_raw(width, height, rgb.to_vec()) {
            Some(img) => *self = img,
            None => warn!("Render target rejected a {}x{} buffer", width, height),
        }
    }
}

impl RenderTarget for egui::ColorImage {
    fn present(&mut self, width: u32, height: u32, rgb: &[u8]) {
        *self = egui::ColorImage::from_rgb([width as usize, height as usize], rgb);
    }
}

/// Pointer drag currently being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub start: Point,
    pub last: Point,
}

/// What a finished gesture put on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub shape: ShapeMode,
    pub brush: BrushVariant,
    pub start: Point,
    pub end: Point,
}

/// Fixed-size raster canvas. The only thing in the crate that writes pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
    background: Rgb<u8>,
    gesture: Option<Gesture>,
    /// Bumped on every pixel change so renderers know when to re-upload
    version: u64,
}

impl Canvas {
    /// Allocate a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color32) -> CanvasResult<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimension(format!(
                "{width}x{height} must be positive"
            )));
        }
        let background = to_rgb(background);
        info!("Creating {}x{} canvas", width, height);
        Ok(Self {
            pixels: RgbImage::from_pixel(width, height, background),
            background,
            gesture: None,
            version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn background(&self) -> Color32 {
        let [r, g, b] = self.background.0;
        Color32::from_rgb(r, g, b)
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Fill the whole buffer with the background color
    pub fn clear(&mut self) {
        let background = self.background;
        self.pixels.pixels_mut().for_each(|p| *p = background);
        self.touch();
    }

    /// Start a gesture. Returns false and changes nothing if one is already open.
    pub fn begin_gesture(&mut self, point: Point) -> bool {
        if let Some(gesture) = self.gesture {
            warn!(
                "Ignoring pointer down at {}: gesture from {} still open",
                point, gesture.start
            );
            return false;
        }
        self.gesture = Some(Gesture {
            start: point,
            last: point,
        });
        true
    }

    /// Extend a free-drawing gesture to `point`. Shape modes only render on release.
    pub fn continue_gesture(&mut self, point: Point, tools: &ToolState) {
        let Some(gesture) = self.gesture else {
            return;
        };
        if !tools.shape().is_free_drawing() {
            return;
        }
        self.draw_stroke(gesture.last, point, tools);
        self.gesture = Some(Gesture {
            last: point,
            ..gesture
        });
    }

    /// Close the open gesture at `point` and rasterize what it commits
    pub fn end_gesture(&mut self, point: Point, tools: &ToolState) -> Option<Commit> {
        let gesture = self.gesture.take()?;
        let shape = tools.shape();
        if shape.is_free_drawing() {
            self.draw_stroke(gesture.last, point, tools);
        } else {
            let outline = shape.outline(gesture.start, point);
            self.draw_shape(&outline, tools);
        }
        Some(Commit {
            shape,
            brush: tools.brush(),
            start: gesture.start,
            end: point,
        })
    }

    /// Copy the full buffer into `target`
    pub fn render(&self, target: &mut impl RenderTarget) {
        target.present(self.width(), self.height(), self.pixels.as_raw());
    }

    /// Replace the buffer with a decoded image, adopting its dimensions.
    /// The canvas is left untouched if decoding fails.
    pub fn load_image(&mut self, path: &Path) -> CanvasResult<()> {
        let decoded = image::open(path).map_err(|source| CanvasError::DecodeError {
            path: path.to_path_buf(),
            source,
        })?;
        let pixels = decoded.to_rgb8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(CanvasError::InvalidDimension(format!(
                "{} has no pixels",
                path.display()
            )));
        }
        info!(
            "Loaded {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        self.pixels = pixels;
        self.gesture = None;
        self.touch();
        Ok(())
    }

    /// Encode the buffer to `path`; the format follows the file extension
    pub fn save_image(&self, path: &Path) -> CanvasResult<()> {
        self.pixels
            .save(path)
            .map_err(|source| CanvasError::EncodeError {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Saved canvas to {}", path.display());
        Ok(())
    }

    fn draw_stroke(&mut self, from: Point, to: Point, tools: &ToolState) {
        let brush = tools.brush();
        let color = if brush.is_eraser() {
            self.background
        } else {
            to_rgb(tools.color())
        };
        let ink = Ink {
            color,
            half_width: tools.size().half_width(),
        };
        debug!("{} segment {} -> {}", brush, from, to);
        raster::draw_brush_segment(&mut self.pixels, brush, from, to, ink);
        self.touch();
    }

    fn draw_shape(&mut self, outline: &Outline, tools: &ToolState) {
        let ink = Ink {
            color: to_rgb(tools.color()),
            half_width: tools.size().half_width(),
        };
        debug!("Rasterizing {:?}", outline);
        raster::draw_outline(&mut self.pixels, outline, ink);
        self.touch();
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::{PenSize, ToolProfile};

    fn canvas() -> Canvas {
        Canvas::new(64, 48, Color32::WHITE).expect("valid canvas")
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, Color32::WHITE),
            Err(CanvasError::InvalidDimension(_))
        ));
        assert!(Canvas::new(10, 0, Color32::WHITE).is_err());
    }

    #[test]
    fn test_second_begin_is_ignored() {
        let mut canvas = canvas();
        assert!(canvas.begin_gesture(Point::new(1, 1)));
        assert!(!canvas.begin_gesture(Point::new(9, 9)));
        assert_eq!(canvas.gesture().map(|g| g.start), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_shape_mode_does_not_draw_while_moving() {
        let mut canvas = canvas();
        let mut tools = ToolState::default();
        tools.select_shape(ShapeMode::Rectangle).expect("standard shape");
        canvas.begin_gesture(Point::new(5, 5));
        let before = canvas.version();
        canvas.continue_gesture(Point::new(30, 30), &tools);
        assert_eq!(canvas.version(), before);
        assert_eq!(canvas.gesture().map(|g| g.last), Some(Point::new(5, 5)));
    }

    #[test]
    fn test_free_drawing_tracks_last_point() {
        let mut canvas = canvas();
        let tools = ToolState::default();
        canvas.begin_gesture(Point::new(5, 5));
        canvas.continue_gesture(Point::new(10, 5), &tools);
        canvas.continue_gesture(Point::new(10, 12), &tools);
        assert_eq!(canvas.gesture().map(|g| g.last), Some(Point::new(10, 12)));
        let commit = canvas.end_gesture(Point::new(20, 12), &tools);
        assert_eq!(
            commit,
            Some(Commit {
                shape: ShapeMode::FreeDrawing,
                brush: BrushVariant::Normal,
                start: Point::new(5, 5),
                end: Point::new(20, 12),
            })
        );
        assert!(!canvas.is_drawing());
        assert_eq!(canvas.pixel(15, 12), Some(Rgb([0, 0, 0])));
    }

    #[test]
    fn test_end_without_begin_commits_nothing() {
        let mut canvas = canvas();
        assert_eq!(canvas.end_gesture(Point::new(3, 3), &ToolState::default()), None);
        assert_eq!(canvas.version(), 0);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut canvas = canvas();
        let tools = ToolState::new(ToolProfile::Standard, Color32::RED, PenSize::default());
        canvas.begin_gesture(Point::new(0, 0));
        canvas.end_gesture(Point::new(63, 47), &tools);
        canvas.clear();
        assert!(canvas.pixels().pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_render_into_color_image() {
        let canvas = canvas();
        let mut target = egui::ColorImage::new([1, 1], Color32::BLACK);
        canvas.render(&mut target);
        assert_eq!(target.size, [64, 48]);
        assert!(target.pixels.iter().all(|p| *p == Color32::WHITE));
    }
}
