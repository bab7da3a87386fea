use crate::SketchApp;
use crate::app::AppState;

pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let AppState::Ready(session) = &app.state else {
                return;
            };
            let canvas = session.canvas();
            let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());

            app.input.set_canvas_rect(response.rect);
            app.renderer.render(ctx, &painter, response.rect, canvas);
        });
    });

    // Dialogs own the pointer while open
    if app.ui.notice.is_none() && app.ui.file_prompt.is_none() && app.ui.color_prompt.is_none() {
        let events = app.input.process_input(ctx);
        if !events.is_empty() {
            app.apply_input(events);
            ctx.request_repaint();
        }
    }
}
