use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};

use crate::canvas::Canvas;

/// Uploads the canvas buffer to a GPU texture and paints it
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Canvas version the texture was last built from
    uploaded_version: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the texture is missing or older than the canvas
    pub fn needs_upload(&self, canvas: &Canvas) -> bool {
        self.texture.is_none() || self.uploaded_version != Some(canvas.version())
    }

    /// Paint the canvas at 1:1 scale with its top-left corner at `rect.min`
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        canvas: &Canvas,
    ) {
        if self.needs_upload(canvas) {
            let mut image = ColorImage::new([0, 0], Color32::TRANSPARENT);
            canvas.render(&mut image);
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    let texture = ctx.load_texture("canvas", image, TextureOptions::NEAREST);
                    self.texture = Some(texture);
                }
            }
            self.uploaded_version = Some(canvas.version());
            log::trace!("Uploaded canvas version {}", canvas.version());
        }

        if let Some(texture) = &self.texture {
            let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(
                texture.id(),
                egui::Rect::from_min_size(rect.min, size),
                uv,
                Color32::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_uploads_on_change() {
        let mut canvas = Canvas::new(8, 8, Color32::WHITE).expect("valid canvas");
        let mut renderer = Renderer::new();
        assert!(renderer.needs_upload(&canvas));

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
            let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            renderer.render(ctx, &painter, rect, &canvas);
        });
        assert!(!renderer.needs_upload(&canvas));

        canvas.clear();
        assert!(renderer.needs_upload(&canvas));
    }
}
