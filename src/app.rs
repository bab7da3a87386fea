use std::path::PathBuf;

use egui::Color32;

use crate::config::SketchConfig;
use crate::error::SketchError;
use crate::input::{InputEvent, InputHandler};
use crate::journal::SessionLabel;
use crate::panels;
use crate::renderer::Renderer;
use crate::session::{CanvasSize, Session};

/// Where the application is in its lifecycle
#[derive(Debug)]
pub enum AppState {
    /// Waiting for the user to enter the canvas size
    Setup { width: String, height: String },
    Ready(Box<Session>),
    /// Setup was abandoned; only a message and a quit button remain
    Failed(String),
}

/// Which file prompt is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Open,
    Save,
}

/// A modal message window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Message shown to the user when an operation fails
    pub fn from_error(err: &SketchError) -> Self {
        let title = match err {
            SketchError::Tool(_) => "Invalid Size",
            SketchError::Canvas(_) => "Image Error",
            SketchError::Journal(_) => "Journal Error",
            SketchError::Config(_) => "Configuration Error",
        };
        Self::new(title, err.to_string())
    }
}

/// Transient state of the toolbar widgets and dialogs
#[derive(Debug, Default)]
pub struct UiState {
    pub size_text: String,
    pub file_prompt: Option<(FileAction, String)>,
    /// Color being edited in the color dialog
    pub color_prompt: Option<Color32>,
    pub notice: Option<Notice>,
}

pub struct SketchApp {
    pub(crate) config: SketchConfig,
    pub(crate) label: SessionLabel,
    pub(crate) state: AppState,
    pub(crate) ui: UiState,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: SketchConfig,
        label: SessionLabel,
    ) -> Self {
        Self::with_config(config, label)
    }

    pub fn with_config(config: SketchConfig, label: SessionLabel) -> Self {
        Self {
            config,
            label,
            state: AppState::Setup {
                width: String::new(),
                height: String::new(),
            },
            ui: UiState::default(),
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            AppState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.state {
            AppState::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// Leave setup with the prompt's values. Any failure abandons the session.
    pub fn finish_setup(&mut self, width: &str, height: &str) {
        let started = CanvasSize::parse(width, height)
            .map_err(SketchError::from)
            .and_then(|size| Session::start(&self.config, size, &self.label));
        self.state = match started {
            Ok(session) => {
                self.ui.size_text = session.tools().size().to_string();
                AppState::Ready(Box::new(session))
            }
            Err(err) => {
                log::error!("Session setup failed: {}", err);
                AppState::Failed(err.to_string())
            }
        };
    }

    /// Run a session operation, turning failures into a notice
    pub fn run<T>(
        &mut self,
        op: impl FnOnce(&mut Session) -> Result<T, SketchError>,
    ) -> Option<T> {
        let session = self.session_mut()?;
        match op(session) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("{}", err);
                self.ui.notice = Some(Notice::from_error(&err));
                None
            }
        }
    }

    pub fn apply_input(&mut self, events: Vec<InputEvent>) {
        for event in events {
            match event {
                InputEvent::PointerDown(point) => {
                    if let Some(session) = self.session_mut() {
                        session.pointer_down(point);
                    }
                }
                InputEvent::PointerMove(point) => {
                    if let Some(session) = self.session_mut() {
                        session.pointer_move(point);
                    }
                }
                InputEvent::PointerUp(point) => {
                    self.run(|session| session.pointer_up(point));
                }
            }
        }
    }

    pub fn submit_file_prompt(&mut self, action: FileAction, path: &str) {
        let path = PathBuf::from(path.trim());
        if path.as_os_str().is_empty() {
            return;
        }
        match action {
            FileAction::Open => self.run(|session| session.open_image(&path)),
            FileAction::Save => self.run(|session| session.save_image(&path)),
        };
    }

    pub fn show_history(&mut self) {
        let Some(session) = self.session() else {
            return;
        };
        let notice = match session.history() {
            Ok(entries) if entries.is_empty() => {
                Notice::new("Action History", "No action records.")
            }
            Ok(entries) => {
                let lines: Vec<String> = entries.iter().map(ToString::to_string).collect();
                Notice::new("Action History", lines.join("\n"))
            }
            Err(err) => Notice::from_error(&err.into()),
        };
        self.ui.notice = Some(notice);
    }

    pub fn undo(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        let notice = match session.undo_last() {
            Ok(_) => Notice::new("Undo Action", "Last action undone."),
            Err(err) => Notice::from_error(&err.into()),
        };
        self.ui.notice = Some(notice);
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.state {
            AppState::Setup { .. } => panels::setup_prompt(self, ctx),
            AppState::Failed(_) => panels::setup_failed(self, ctx),
            AppState::Ready(_) => {
                panels::toolbar(self, ctx);
                panels::canvas_panel(self, ctx);
                panels::dialogs(self, ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn app(dir: &std::path::Path) -> SketchApp {
        let config = SketchConfig {
            journal_dir: dir.to_path_buf(),
            ..SketchConfig::default()
        };
        SketchApp::with_config(config, SessionLabel::now())
    }

    #[test]
    fn test_invalid_setup_abandons_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(dir.path());
        app.finish_setup("0", "100");
        assert!(matches!(app.state(), AppState::Failed(_)));
        assert!(app.session().is_none());
    }

    #[test]
    fn test_rejected_size_raises_notice() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(dir.path());
        app.finish_setup("40", "30");
        app.run(|session| session.change_size("300"));
        assert_eq!(app.ui.notice.as_ref().map(|n| n.title.as_str()), Some("Invalid Size"));
    }

    #[test]
    fn test_history_notice_lists_drawn_stroke() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(dir.path());
        app.finish_setup("40", "30");
        app.show_history();
        assert_eq!(
            app.ui.notice.take().map(|n| n.body),
            Some("No action records.".to_owned())
        );

        app.apply_input(vec![
            InputEvent::PointerDown(Point::new(1, 1)),
            InputEvent::PointerMove(Point::new(10, 5)),
            InputEvent::PointerUp(Point::new(20, 5)),
        ]);
        app.show_history();
        let body = app.ui.notice.take().map(|n| n.body).unwrap_or_default();
        assert!(body.starts_with("1: Stroke drawn with Normal Brush at "));
    }
}
