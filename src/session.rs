//! The live editing session: one canvas, one tool state, one journal.
//!
//! `Session` is the only place where canvas changes and journal entries meet.
//! Every operation mutates its component first and journals the action only
//! once the mutation has succeeded, so a rejected setting or a failed decode
//! never leaves an entry behind.
//!
//! # Example
//!
//! ```rust,no_run
//! use sketchbook::{CanvasSize, Session, SessionLabel, SketchConfig};
//! use sketchbook::geometry::Point;
//!
//! let config = SketchConfig::default();
//! let size = CanvasSize::parse("800", "600")?;
//! let mut session = Session::start(&config, size, &SessionLabel::now())?;
//!
//! session.pointer_down(Point::new(10, 10));
//! session.pointer_move(Point::new(40, 25));
//! session.pointer_up(Point::new(60, 30))?;
//! session.change_size("8")?;
//! # Ok::<(), sketchbook::SketchError>(())
//! ```

use std::path::Path;

use egui::Color32;
use log::{info, warn};

use crate::action::Action;
use crate::canvas::{Canvas, Commit, RenderTarget};
use crate::config::SketchConfig;
use crate::error::{CanvasError, JournalResult, SketchResult};
use crate::geometry::Point;
use crate::journal::{ActionJournal, JournalEntry, SessionLabel};
use crate::tool::{BrushVariant, PenSize, ShapeMode, ToolState};

/// Canvas dimensions collected by the startup prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: i64, height: i64) -> Result<Self, CanvasError> {
        let positive = |value: i64| u32::try_from(value).ok().filter(|v| *v > 0);
        match (positive(width), positive(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(CanvasError::InvalidDimension(format!(
                "{width}x{height} must be positive"
            ))),
        }
    }

    /// Parse the two text fields of the size prompt
    pub fn parse(width: &str, height: &str) -> Result<Self, CanvasError> {
        let number = |text: &str| {
            text.trim().parse::<i64>().map_err(|_| {
                CanvasError::InvalidDimension(format!("{:?} is not an integer", text.trim()))
            })
        };
        Self::new(number(width)?, number(height)?)
    }
}

#[derive(Debug)]
pub struct Session {
    canvas: Canvas,
    tools: ToolState,
    journal: ActionJournal,
}

impl Session {
    /// Open the session journal and create the canvas
    pub fn start(
        config: &SketchConfig,
        size: CanvasSize,
        label: &SessionLabel,
    ) -> SketchResult<Self> {
        let tools = config.initial_tools()?;
        let canvas = Canvas::new(size.width, size.height, config.background_color())?;
        let journal = ActionJournal::open(&config.journal_dir, label)?;
        info!("Session {} started", journal.label());
        Ok(Self::from_parts(canvas, tools, journal))
    }

    pub fn from_parts(canvas: Canvas, tools: ToolState, journal: ActionJournal) -> Self {
        Self {
            canvas,
            tools,
            journal,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn journal(&self) -> &ActionJournal {
        &self.journal
    }

    pub fn render(&self, target: &mut impl RenderTarget) {
        self.canvas.render(target);
    }

    pub fn clear(&mut self) -> SketchResult<()> {
        self.canvas.clear();
        self.record(Action::CanvasCleared)?;
        Ok(())
    }

    pub fn save_image(&mut self, path: &Path) -> SketchResult<()> {
        self.canvas.save_image(path)?;
        self.record(Action::ImageSaved(path.to_path_buf()))?;
        Ok(())
    }

    pub fn open_image(&mut self, path: &Path) -> SketchResult<()> {
        self.canvas.load_image(path)?;
        self.record(Action::ImageOpened(path.to_path_buf()))?;
        Ok(())
    }

    /// Apply the color picker's result. `None` means the picker was cancelled.
    pub fn set_color(&mut self, color: Option<Color32>) -> SketchResult<()> {
        if let Some(color) = color {
            if self.tools.set_color(color) {
                self.record(Action::ColorChanged(self.tools.color()))?;
            }
        }
        Ok(())
    }

    /// Apply the size field's text. Invalid input keeps the current size.
    pub fn change_size(&mut self, input: &str) -> SketchResult<()> {
        let size = input.parse::<PenSize>().inspect_err(|err| {
            warn!("Rejected pen size {:?}: {}", input, err);
        })?;
        if self.tools.set_size(size) {
            self.record(Action::SizeChanged(size))?;
        }
        Ok(())
    }

    pub fn set_brush(&mut self, brush: BrushVariant) -> SketchResult<()> {
        if self.tools.select_brush(brush)? {
            self.record(Action::BrushChanged(brush))?;
        }
        Ok(())
    }

    pub fn set_shape(&mut self, shape: ShapeMode) -> SketchResult<()> {
        if self.tools.select_shape(shape)? {
            self.record(Action::ShapeChanged(shape))?;
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, point: Point) -> bool {
        self.canvas.begin_gesture(point)
    }

    pub fn pointer_move(&mut self, point: Point) {
        self.canvas.continue_gesture(point, &self.tools);
    }

    /// Finish the gesture and journal what it drew
    pub fn pointer_up(&mut self, point: Point) -> SketchResult<Option<Commit>> {
        let commit = self.canvas.end_gesture(point, &self.tools);
        if let Some(commit) = commit {
            self.record(Action::Drawn(commit))?;
        }
        Ok(commit)
    }

    pub fn history(&self) -> JournalResult<Vec<JournalEntry>> {
        self.journal.list_all()
    }

    /// Remove the newest journal entry. Canvas pixels are not touched.
    pub fn undo_last(&mut self) -> JournalResult<Option<JournalEntry>> {
        self.journal.undo_last()
    }

    fn record(&mut self, action: Action) -> JournalResult<JournalEntry> {
        self.journal.append(&action.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_parse() {
        assert_eq!(
            CanvasSize::parse(" 640", "480 ").ok(),
            Some(CanvasSize {
                width: 640,
                height: 480
            })
        );
        assert!(matches!(
            CanvasSize::parse("0", "480"),
            Err(CanvasError::InvalidDimension(_))
        ));
        assert!(CanvasSize::parse("-3", "480").is_err());
        assert!(CanvasSize::parse("wide", "480").is_err());
        assert!(CanvasSize::parse("640", "").is_err());
        assert!(CanvasSize::new(i64::from(u32::MAX) + 1, 10).is_err());
    }
}
